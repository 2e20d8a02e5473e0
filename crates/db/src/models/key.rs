//! Key entity model, detail view and filter.

use harmonia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pitch::Pitch;

/// Visualization coordinate of a key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A scale anchored to a tonic pitch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Key {
    pub id: DbId,
    pub scale_id: DbId,
    pub name: String,
    pub number: i32,
    pub balanced: bool,
    pub center: Point,
    /// Rotation class shared by all modes of this key.
    pub rotation: i32,
    pub tonic: Pitch,
}

/// A key together with its member pitches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyDetail {
    #[serde(flatten)]
    pub key: Key,
    pub pitches: Vec<Pitch>,
}

/// A flat `keys` row joined with its tonic pitch (`tonic_*`).
#[derive(Debug, Clone, FromRow)]
pub struct KeyRow {
    pub id: DbId,
    pub scale_id: DbId,
    pub name: String,
    pub number: i32,
    pub balanced: bool,
    pub center_x: f64,
    pub center_y: f64,
    pub rotation: i32,
    pub tonic_id: DbId,
    pub tonic_name: String,
    pub tonic_number: i32,
    pub tonic_frequency: f64,
}

impl TryFrom<KeyRow> for Key {
    type Error = sqlx::Error;

    fn try_from(row: KeyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            scale_id: row.scale_id,
            name: row.name,
            number: row.number,
            balanced: row.balanced,
            center: Point {
                x: row.center_x,
                y: row.center_y,
            },
            rotation: row.rotation,
            tonic: Pitch {
                id: row.tonic_id,
                name: row.tonic_name,
                number: row.tonic_number,
                frequency: row.tonic_frequency,
            },
        })
    }
}

/// Filter for key lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyFilter {
    pub scale_id: DbId,
    pub tonic_id: DbId,
    pub number: i32,
    /// Cardinality of the key's scale.
    pub cardinality: i32,
    pub balanced: Option<bool>,
}
