//! Module for core business logic services.
//!
//! This module encapsulates the hospital directory, the bed inventory and
//! read access to requests and appointments. Each service authorizes the
//! caller against the policy table before touching the database.

pub mod bed_inventory;
pub mod hospital_directory;
pub mod records;

pub use bed_inventory::BedInventory;
pub use hospital_directory::HospitalDirectory;
pub use records::RecordAccess;
