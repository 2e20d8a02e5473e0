//! Chord quality entity model and filter.

use harmonia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::decode_sequence;

/// The intervallic shape of a chord independent of its root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordQuality {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub cardinality: i32,
    pub pitch_class_set: Vec<i32>,
    pub interval_pattern: Vec<i32>,
}

/// A row from `chord_qualities`. Array columns hold JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct ChordQualityRow {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub cardinality: i32,
    pub pitch_class_set: String,
    pub interval_pattern: String,
}

impl TryFrom<ChordQualityRow> for ChordQuality {
    type Error = sqlx::Error;

    fn try_from(row: ChordQualityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            number: row.number,
            cardinality: row.cardinality,
            pitch_class_set: decode_sequence("pitch_class_set", &row.pitch_class_set)?,
            interval_pattern: decode_sequence("interval_pattern", &row.interval_pattern)?,
        })
    }
}

/// Filter for chord quality lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChordQualityFilter {
    pub number: i32,
    pub cardinality: i32,
}
