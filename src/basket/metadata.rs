//! Scalar metadata values
//!
//! Basket metadata is a string-keyed map of loosely-typed scalars.
//! Bundle references store the bundle ID under a `bundle_<n>` key,
//! either as an integer or as a digit string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar metadata value
///
/// Untagged: variant order matters for deserialization. Integers must
/// be tried before floats so `3` stays an `Int`, and `Text` is the
/// catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl MetadataValue {
    /// Interprets the value as a bundle ID
    ///
    /// Accepts non-negative integers and strings of ASCII digits.
    /// Everything else, including floats, booleans, negative numbers
    /// and digit strings too large for a bundle ID, is rejected.
    pub fn as_bundle_id(&self) -> Option<u32> {
        match self {
            MetadataValue::Int(n) => u32::try_from(*n).ok(),
            MetadataValue::Text(s) => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                s.parse().ok()
            }
            MetadataValue::Float(_) | MetadataValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Int(n) => write!(f, "{n}"),
            MetadataValue::Float(x) => write!(f, "{x}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_as_bundle_id() {
        assert_eq!(MetadataValue::Int(3).as_bundle_id(), Some(3));
        assert_eq!(MetadataValue::Int(0).as_bundle_id(), Some(0));
        assert_eq!(MetadataValue::Int(-1).as_bundle_id(), None);
        assert_eq!(MetadataValue::Int(i64::from(u32::MAX)).as_bundle_id(), Some(u32::MAX));
        assert_eq!(MetadataValue::Int(i64::from(u32::MAX) + 1).as_bundle_id(), None);
    }

    #[test]
    fn test_text_as_bundle_id() {
        assert_eq!(MetadataValue::Text("42".to_string()).as_bundle_id(), Some(42));
        assert_eq!(MetadataValue::Text("007".to_string()).as_bundle_id(), Some(7));
        assert_eq!(MetadataValue::Text("".to_string()).as_bundle_id(), None);
        assert_eq!(MetadataValue::Text("4x2".to_string()).as_bundle_id(), None);
        assert_eq!(MetadataValue::Text("-3".to_string()).as_bundle_id(), None);
        assert_eq!(MetadataValue::Text(" 3".to_string()).as_bundle_id(), None);
        // Digits alone are not enough if the number overflows.
        assert_eq!(
            MetadataValue::Text("99999999999".to_string()).as_bundle_id(),
            None
        );
    }

    #[test]
    fn test_float_and_bool_are_never_ids() {
        assert_eq!(MetadataValue::Float(3.0).as_bundle_id(), None);
        assert_eq!(MetadataValue::Bool(true).as_bundle_id(), None);
    }

    #[test]
    fn test_untagged_deserialization_keeps_types() {
        let v: MetadataValue = serde_yaml::from_str("3").unwrap();
        assert_eq!(v, MetadataValue::Int(3));

        let v: MetadataValue = serde_yaml::from_str("3.5").unwrap();
        assert_eq!(v, MetadataValue::Float(3.5));

        let v: MetadataValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(v, MetadataValue::Bool(true));

        let v: MetadataValue = serde_yaml::from_str("\"3\"").unwrap();
        assert_eq!(v, MetadataValue::Text("3".to_string()));

        let v: MetadataValue = serde_yaml::from_str("gift wrap").unwrap();
        assert_eq!(v, MetadataValue::Text("gift wrap".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(MetadataValue::Int(5).to_string(), "5");
        assert_eq!(MetadataValue::Bool(false).to_string(), "false");
        assert_eq!(MetadataValue::Text("note".to_string()).to_string(), "note");
    }
}
