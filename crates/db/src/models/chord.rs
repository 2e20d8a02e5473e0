//! Chord entity model, detail view and filter.

use harmonia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::chord_quality::ChordQuality;
use super::decode_sequence;
use super::pitch::Pitch;

/// A chord built from a root pitch and a quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub quality: ChordQuality,
    pub root: Pitch,
}

/// A chord together with its member pitches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordDetail {
    #[serde(flatten)]
    pub chord: Chord,
    pub pitches: Vec<Pitch>,
}

/// A flat `chords` row joined with its quality (`quality_*`) and root pitch
/// (`root_*`).
#[derive(Debug, Clone, FromRow)]
pub struct ChordRow {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub quality_id: DbId,
    pub quality_name: String,
    pub quality_number: i32,
    pub quality_cardinality: i32,
    pub quality_pitch_class_set: String,
    pub quality_interval_pattern: String,
    pub root_id: DbId,
    pub root_name: String,
    pub root_number: i32,
    pub root_frequency: f64,
}

impl TryFrom<ChordRow> for Chord {
    type Error = sqlx::Error;

    fn try_from(row: ChordRow) -> Result<Self, Self::Error> {
        let quality = ChordQuality {
            id: row.quality_id,
            name: row.quality_name,
            number: row.quality_number,
            cardinality: row.quality_cardinality,
            pitch_class_set: decode_sequence(
                "quality_pitch_class_set",
                &row.quality_pitch_class_set,
            )?,
            interval_pattern: decode_sequence(
                "quality_interval_pattern",
                &row.quality_interval_pattern,
            )?,
        };
        let root = Pitch {
            id: row.root_id,
            name: row.root_name,
            number: row.root_number,
            frequency: row.root_frequency,
        };
        Ok(Self {
            id: row.id,
            name: row.name,
            number: row.number,
            quality,
            root,
        })
    }
}

/// Filter for chord lists. All fields apply only when positive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChordFilter {
    pub root_id: DbId,
    pub chord_quality_id: DbId,
    pub number: i32,
    /// Cardinality of the chord's quality.
    pub cardinality: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major_row() -> ChordRow {
        ChordRow {
            id: 10,
            name: "C major".to_string(),
            number: 145,
            quality_id: 1,
            quality_name: "Major".to_string(),
            quality_number: 145,
            quality_cardinality: 3,
            quality_pitch_class_set: "[0,4,7]".to_string(),
            quality_interval_pattern: "[4,3,5]".to_string(),
            root_id: 1,
            root_name: "C".to_string(),
            root_number: 1,
            root_frequency: 261.63,
        }
    }

    #[test]
    fn assembles_nested_quality_and_root() {
        let chord = Chord::try_from(c_major_row()).unwrap();

        assert_eq!(chord.id, 10);
        assert_eq!(chord.quality.id, 1);
        assert_eq!(chord.quality.name, "Major");
        assert_eq!(chord.quality.pitch_class_set, vec![0, 4, 7]);
        assert_eq!(chord.root.name, "C");
        assert_eq!(chord.root.frequency, 261.63);
    }

    #[test]
    fn bad_quality_column_fails_the_whole_row() {
        let mut row = c_major_row();
        row.quality_interval_pattern = "{}".to_string();
        assert!(Chord::try_from(row).is_err());
    }

    #[test]
    fn detail_serializes_flat_with_pitches() {
        let chord = Chord::try_from(c_major_row()).unwrap();
        let detail = ChordDetail {
            pitches: vec![chord.root.clone()],
            chord,
        };
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], 10);
        assert_eq!(json["quality"]["cardinality"], 3);
        assert_eq!(json["root"]["name"], "C");
        assert_eq!(json["pitches"][0]["id"], 1);
    }
}
