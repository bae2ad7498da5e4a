//! Row structs for the cafe database.

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A drink row. The recipe is stored as a JSON string listing the
/// ingredient parts.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: String,
}

/// The API-facing shape, with the recipe parsed back into JSON.
#[derive(Debug, Serialize)]
pub struct DrinkPayload {
    pub id: i64,
    pub title: String,
    pub recipe: Value,
}

impl Drink {
    /// Expands the stored recipe string into the response shape.
    pub fn into_payload(self) -> Result<DrinkPayload, serde_json::Error> {
        let recipe = serde_json::from_str(&self.recipe)?;
        Ok(DrinkPayload {
            id: self.id,
            title: self.title,
            recipe,
        })
    }
}
