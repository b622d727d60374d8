//! Module for the bed inventory API.

pub mod handlers;
pub mod routes;
