//! Module for the hospital directory API.
//!
//! Registration, public listing, the caller's own record, updates, deletion,
//! and the request/appointment views of a hospital.

pub mod handlers;
pub mod routes;
