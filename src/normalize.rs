// src/normalize.rs
//! Turns nested values into documents that can be saved to the db.

use crate::error::Result;
use bson::{Bson, Document};
use serde::Serialize;

/// Converts `value` into a document.
///
/// Absence (`None` or `Bson::Null`) yields an empty document. A document is
/// copied key by key in order, an array is keyed by its indices (`"0"`,
/// `"1"`, ...), and every nested value goes through [`normalize_value`].
/// A top-level scalar has no fields to iterate and also yields an empty
/// document.
pub fn normalize(value: Option<&Bson>) -> Document {
    let mut doc = Document::new();
    match value {
        Some(Bson::Document(src)) => {
            for (key, value) in src {
                doc.insert(key.clone(), normalize_value(value));
            }
        }
        Some(Bson::Array(items)) => {
            for (i, value) in items.iter().enumerate() {
                doc.insert(i.to_string(), normalize_value(value));
            }
        }
        _ => {}
    }
    doc
}

/// Recursive step: composites are rebuilt, leaves are copied as-is.
pub fn normalize_value(value: &Bson) -> Bson {
    match value {
        Bson::Document(_) => Bson::Document(normalize(Some(value))),
        Bson::Array(items) => Bson::Array(items.iter().map(normalize_value).collect()),
        leaf => leaf.clone(),
    }
}

/// Serializes a structured value to BSON first, then normalizes it.
pub fn normalize_object<T: Serialize + ?Sized>(obj: &T) -> Result<Document> {
    let bson = bson::to_bson(obj)?;
    Ok(normalize(Some(&bson)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_null_is_empty() {
        assert_eq!(normalize(None), Document::new());
        assert_eq!(normalize(Some(&Bson::Null)), Document::new());
    }

    #[test]
    fn test_top_level_scalar_is_empty() {
        assert!(normalize(Some(&Bson::Int32(7))).is_empty());
        assert!(normalize(Some(&Bson::String("abc".into()))).is_empty());
    }

    #[test]
    fn test_nested_copy_keeps_order() {
        let src = doc! {
            "z": 1,
            "a": { "y": [1, { "k": "v" }, Bson::Null], "b": true },
            "m": "text",
        };
        let out = normalize(Some(&Bson::Document(src.clone())));
        assert_eq!(out, src);
        let keys: Vec<&String> = out.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_top_level_array_keyed_by_index() {
        let src = Bson::Array(vec![Bson::from("a"), Bson::from(2)]);
        assert_eq!(normalize(Some(&src)), doc! { "0": "a", "1": 2 });
    }
}
