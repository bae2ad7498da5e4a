//! Module for the artist side of the booking API.

pub mod handlers;
pub mod routes;
