//! Place persistence

use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::de::DeserializeOwned;

use crate::domain::{Coordinates, Mood, Place, Rating};

const PLACE_COLUMNS: &str = "id, name, lat, lng, country, country_code, visit_date, notes, \
                             rating, added_at, images, tags, mood, user_id";

/// Reads and writes place records on a borrowed connection or transaction
pub struct PlaceStore<'a> {
    conn: &'a Connection,
}

impl<'a> PlaceStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, place: &Place) -> Result<()> {
        let images = serde_json::to_string(&place.images)?;
        let tags = serde_json::to_string(&place.tags)?;

        self.conn
            .execute(
                r#"INSERT INTO places
                   (id, name, lat, lng, country, country_code, visit_date, notes,
                    rating, added_at, images, tags, mood, user_id)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"#,
                params![
                    place.id, place.name, place.location.lat(), place.location.lng(),
                    place.country, place.country_code, place.visit_date, place.notes,
                    place.rating.map(|r| r.value()), place.added_at, images, tags,
                    place.mood.map(|m| m.as_str()), place.user_id,
                ],
            )
            .with_context(|| format!("Failed to insert place {}", place.id))?;
        Ok(())
    }

    /// Overwrite an existing place. Returns false if no row has that ID.
    pub fn update(&self, place: &Place) -> Result<bool> {
        let images = serde_json::to_string(&place.images)?;
        let tags = serde_json::to_string(&place.tags)?;

        let changed = self
            .conn
            .execute(
                r#"UPDATE places SET
                   name = ?2, lat = ?3, lng = ?4, country = ?5, country_code = ?6,
                   visit_date = ?7, notes = ?8, rating = ?9, images = ?10, tags = ?11,
                   mood = ?12
                   WHERE id = ?1"#,
                params![
                    place.id, place.name, place.location.lat(), place.location.lng(),
                    place.country, place.country_code, place.visit_date, place.notes,
                    place.rating.map(|r| r.value()), images, tags,
                    place.mood.map(|m| m.as_str()),
                ],
            )
            .with_context(|| format!("Failed to update place {}", place.id))?;
        Ok(changed > 0)
    }

    /// Returns false if no row has that ID.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM places WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// Delete the places owned by `user_id`. Unowned places are kept.
    pub fn delete_for_user(&self, user_id: &str) -> Result<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM places WHERE user_id = ?1", [user_id])?;
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Result<Option<Place>> {
        let place = self
            .conn
            .query_row(
                &format!("SELECT {PLACE_COLUMNS} FROM places WHERE id = ?1"),
                [id],
                place_from_row,
            )
            .optional()?;
        Ok(place)
    }

    /// Places owned by `user_id` plus places with no owner, most recently added first
    pub fn list_for_user(&self, user_id: &str) -> Result<Vec<Place>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PLACE_COLUMNS} FROM places
             WHERE user_id IS NULL OR user_id = ?1
             ORDER BY added_at DESC, rowid DESC"
        ))?;
        let places = stmt
            .query_map([user_id], place_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(places)
    }
}

fn place_from_row(row: &Row<'_>) -> rusqlite::Result<Place> {
    let location = Coordinates::new(row.get(2)?, row.get(3)?)
        .map_err(|e| conversion_error(2, Type::Real, e))?;
    let rating = row
        .get::<_, Option<u8>>(8)?
        .map(Rating::new)
        .transpose()
        .map_err(|e| conversion_error(8, Type::Integer, e))?;
    // Unknown moods from newer builds are dropped, not fatal
    let mood = row
        .get::<_, Option<String>>(12)?
        .and_then(|m| Mood::from_str(&m));

    Ok(Place {
        id: row.get(0)?,
        name: row.get(1)?,
        location,
        country: row.get(4)?,
        country_code: row.get(5)?,
        visit_date: row.get(6)?,
        notes: row.get(7)?,
        rating,
        added_at: row.get(9)?,
        images: json_column(row, 10)?,
        tags: json_column(row, 11)?,
        mood,
        user_id: row.get(13)?,
    })
}

fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text).map_err(|e| conversion_error(idx, Type::Text, e))
}

fn conversion_error<E>(idx: usize, ty: Type, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(err))
}
