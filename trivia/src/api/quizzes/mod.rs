//! Module for the quiz-play endpoint.

pub mod handlers;
pub mod routes;
