//! Module for the show side of the booking API.

pub mod handlers;
pub mod routes;
