//! Integer sequence codec.
//!
//! Pitch-class sets, interval patterns and reflection axes are stored as
//! `TEXT` columns holding a JSON integer array such as `[0,4,7]`.

/// Decode a stored sequence. Order is preserved.
pub fn decode(raw: &str) -> Result<Vec<i32>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_in_stored_order() {
        assert_eq!(decode("[0, 4, 7, 10]").unwrap(), vec![0, 4, 7, 10]);
        assert_eq!(decode("[7,0,4]").unwrap(), vec![7, 0, 4]);
    }

    #[test]
    fn decodes_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(decode("0,4,7").is_err());
        assert!(decode("[0, \"four\"]").is_err());
        assert!(decode("").is_err());
    }
}
