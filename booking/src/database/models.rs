//! Row structs for the booking database.
//!
//! These mirror the table layouts; the API layer reshapes them into its
//! own response payloads where the two differ.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Insert/update payload for a venue, as posted by the listing form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Insert/update payload for an artist.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// A show seen from the venue side, joined with its artist.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show seen from the artist side, joined with its venue.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show joined both ways, as served by the show listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// An id/name pair used by listings and area grouping.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Summary {
    pub id: i64,
    pub name: String,
}
