//! Domain model structs, row structs and filter objects.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct in the shape returned to clients
//! - A flat `FromRow` row struct matching the selected column aliases
//! - A `TryFrom<Row>` assembly step (nested objects, array decoding)
//! - A `Deserialize` filter struct whose fields are all optional

use harmonia_core::sequence;

pub mod chord;
pub mod chord_quality;
pub mod key;
pub mod pitch;
pub mod scale;

/// Decode a JSON-array text column into an integer sequence.
///
/// Malformed stored data is a hard error naming the offending column.
pub(crate) fn decode_sequence(column: &str, raw: &str) -> Result<Vec<i32>, sqlx::Error> {
    sequence::decode(raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn decode_sequence_names_the_column_on_failure() {
        let err = decode_sequence("interval_pattern", "[2,2,").unwrap_err();
        assert_matches!(err, sqlx::Error::ColumnDecode { ref index, .. } if index == "interval_pattern");
    }
}
