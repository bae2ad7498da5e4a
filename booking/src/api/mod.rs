//! Central module for the booking API endpoints.
//!
//! Each domain (venues, artists, shows) carries its own handlers and
//! routes; the payload shapes they share live here.

pub mod artists;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Serialize};

/// The form posted to the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search_term: String,
}

/// Search responses: a match count plus the matching records.
#[derive(Debug, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

/// Flash-style result for the creation endpoints: they always answer 200
/// and report the outcome in the body.
#[derive(Debug, Serialize)]
pub struct FlashMessage {
    pub success: bool,
    pub message: String,
}

impl FlashMessage {
    pub fn listed(kind: &str, name: &str) -> Self {
        Self {
            success: true,
            message: format!("{kind} {name} was successfully listed!"),
        }
    }

    pub fn failed(kind: &str, name: &str) -> Self {
        Self {
            success: false,
            message: format!("An error occurred. {kind} {name} could not be listed."),
        }
    }
}
