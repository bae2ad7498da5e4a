//! SQL for the booking backend, one function per operation.
//!
//! Handlers never touch SQL directly; everything goes through here.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::models::{
    Artist, ArtistShow, NewArtist, NewVenue, ShowListing, Summary, Venue, VenueShow,
};

pub async fn all_venues(pool: &SqlitePool) -> Result<Vec<Venue>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM venues ORDER BY city, state, id")
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring match on the venue name.
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM venues WHERE name LIKE '%' || ?1 || '%' ORDER BY id")
        .bind(term)
        .fetch_all(pool)
        .await
}

pub async fn venue_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Venue>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM venues WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_venue(pool: &SqlitePool, venue: &NewVenue) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Rewrites the mutable columns; false when the id is unknown.
pub async fn update_venue(
    pool: &SqlitePool,
    id: i64,
    venue: &NewVenue,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE venues SET name = ?1, city = ?2, state = ?3, address = ?4,
         phone = ?5, image_link = ?6, facebook_link = ?7 WHERE id = ?8",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Deletes the venue; its shows go with it through the cascade.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn all_artists(pool: &SqlitePool) -> Result<Vec<Summary>, sqlx::Error> {
    sqlx::query_as("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM artists WHERE name LIKE '%' || ?1 || '%' ORDER BY id")
        .bind(term)
        .fetch_all(pool)
        .await
}

pub async fn artist_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Artist>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM artists WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO artists (name, city, state, phone, image_link, facebook_link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_artist(
    pool: &SqlitePool,
    id: i64,
    artist: &NewArtist,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE artists SET name = ?1, city = ?2, state = ?3,
         phone = ?4, image_link = ?5, facebook_link = ?6 WHERE id = ?7",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Shows booked at a venue on one side of `now`, joined with their artist.
pub async fn venue_shows(
    pool: &SqlitePool,
    venue_id: i64,
    now: NaiveDateTime,
    past: bool,
) -> Result<Vec<ArtistShow>, sqlx::Error> {
    let sql = if past {
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?1 AND s.start_time < ?2 ORDER BY s.start_time"
    } else {
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?1 AND s.start_time > ?2 ORDER BY s.start_time"
    };
    sqlx::query_as(sql)
        .bind(venue_id)
        .bind(now)
        .fetch_all(pool)
        .await
}

/// Shows an artist plays on one side of `now`, joined with their venue.
pub async fn artist_shows(
    pool: &SqlitePool,
    artist_id: i64,
    now: NaiveDateTime,
    past: bool,
) -> Result<Vec<VenueShow>, sqlx::Error> {
    let sql = if past {
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?1 AND s.start_time < ?2 ORDER BY s.start_time"
    } else {
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?1 AND s.start_time > ?2 ORDER BY s.start_time"
    };
    sqlx::query_as(sql)
        .bind(artist_id)
        .bind(now)
        .fetch_all(pool)
        .await
}

pub async fn all_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>, sqlx::Error> {
    sqlx::query_as(
        "SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.start_time",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_show(
    pool: &SqlitePool,
    venue_id: i64,
    artist_id: i64,
    start_time: NaiveDateTime,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(venue_id)
    .bind(artist_id)
    .bind(start_time)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
