//! Shared plumbing for the booking, trivia and cafe services.
//!
//! This crate collects the pieces every service needs but none owns: the
//! JSON error envelope, pagination arithmetic, environment-driven
//! configuration loading, SQLite pool setup, and tracing initialization.

pub mod config;
pub mod db;
pub mod error;
pub mod pagination;
pub mod telemetry;
