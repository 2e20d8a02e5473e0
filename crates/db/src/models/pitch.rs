//! Pitch entity model and filter.

use harmonia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named tone with a fixed frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pitch {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub frequency: f64,
}

/// A row from `pitches`.
#[derive(Debug, Clone, FromRow)]
pub struct PitchRow {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub frequency: f64,
}

impl TryFrom<PitchRow> for Pitch {
    type Error = sqlx::Error;

    fn try_from(row: PitchRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            number: row.number,
            frequency: row.frequency,
        })
    }
}

/// Filter for pitch lists. `number` applies only when positive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PitchFilter {
    pub number: i32,
}
