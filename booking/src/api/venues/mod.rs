//! Module for the venue side of the booking API.

pub mod handlers;
pub mod routes;
