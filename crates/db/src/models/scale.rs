//! Scale entity model and filter.

use harmonia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::decode_sequence;

/// An ordered set of pitch classes with its structural properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub id: DbId,
    pub name: String,
    pub cardinality: i32,
    pub number: i32,
    pub perfection: i32,
    pub imperfection: i32,
    pub pitch_class_set: Vec<i32>,
    pub interval_pattern: Vec<i32>,
    pub rotational_symmetric: bool,
    pub rotational_symmetry_level: i32,
    pub reflectional_symmetric: bool,
    pub reflection_axes: Vec<i32>,
    pub palindromic: bool,
    pub balanced: bool,
}

/// A row from `scales`. Array columns hold JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct ScaleRow {
    pub id: DbId,
    pub name: String,
    pub cardinality: i32,
    pub number: i32,
    pub perfection: i32,
    pub imperfection: i32,
    pub pitch_class_set: String,
    pub interval_pattern: String,
    pub rotational_symmetric: bool,
    pub rotational_symmetry_level: i32,
    pub reflectional_symmetric: bool,
    pub reflection_axes: String,
    pub palindromic: bool,
    pub balanced: bool,
}

impl TryFrom<ScaleRow> for Scale {
    type Error = sqlx::Error;

    fn try_from(row: ScaleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            cardinality: row.cardinality,
            number: row.number,
            perfection: row.perfection,
            imperfection: row.imperfection,
            pitch_class_set: decode_sequence("pitch_class_set", &row.pitch_class_set)?,
            interval_pattern: decode_sequence("interval_pattern", &row.interval_pattern)?,
            rotational_symmetric: row.rotational_symmetric,
            rotational_symmetry_level: row.rotational_symmetry_level,
            reflectional_symmetric: row.reflectional_symmetric,
            reflection_axes: decode_sequence("reflection_axes", &row.reflection_axes)?,
            palindromic: row.palindromic,
            balanced: row.balanced,
        })
    }
}

/// Filter for scale lists.
///
/// `perfection` and `imperfection` are optional because a score of `0` is a
/// legitimate value to filter on. The flags are optional so `false` can be
/// told apart from "unset".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScaleFilter {
    pub number: i32,
    pub cardinality: i32,
    pub perfection: Option<i32>,
    pub imperfection: Option<i32>,
    pub balanced: Option<bool>,
    pub rotational_symmetric: Option<bool>,
    pub rotational_symmetry_level: i32,
    pub reflectional_symmetric: Option<bool>,
    pub palindromic: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_arrays_read_back_unchanged() {
        let pitch_class_set = vec![0, 2, 4, 5, 7, 9, 11];
        let interval_pattern = vec![2, 2, 1, 2, 2, 2, 1];
        let reflection_axes = vec![2];

        let row = ScaleRow {
            id: 1,
            name: "Major".to_string(),
            cardinality: 7,
            number: 2741,
            perfection: 6,
            imperfection: 1,
            pitch_class_set: "[0,2,4,5,7,9,11]".to_string(),
            interval_pattern: "[2, 2, 1, 2, 2, 2, 1]".to_string(),
            rotational_symmetric: false,
            rotational_symmetry_level: 0,
            reflectional_symmetric: true,
            reflection_axes: "[2]".to_string(),
            palindromic: false,
            balanced: false,
        };
        let scale = Scale::try_from(row).unwrap();

        assert_eq!(scale.pitch_class_set, pitch_class_set);
        assert_eq!(scale.interval_pattern, interval_pattern);
        assert_eq!(scale.reflection_axes, reflection_axes);
        assert_eq!(scale.perfection, 6);
        assert!(scale.reflectional_symmetric);
        assert!(!scale.palindromic);
    }
}
