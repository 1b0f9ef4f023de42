// src/index.rs
//! Index names derived from a field or an ordered set of fields.

use crate::constants::ASC;
use crate::error::{Error, Result};
use bson::{doc, Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

/// A single field name or an ordered field -> direction map.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexSpec {
    Field(String),
    Keys(Document),
}

impl IndexSpec {
    /// Key document for the driver; a lone field is indexed ascending.
    pub fn keys(&self) -> Document {
        match self {
            IndexSpec::Field(field) => doc! { field: ASC },
            IndexSpec::Keys(keys) => keys.clone(),
        }
    }
}

impl From<&str> for IndexSpec {
    fn from(field: &str) -> Self {
        IndexSpec::Field(field.to_string())
    }
}

impl From<String> for IndexSpec {
    fn from(field: String) -> Self {
        IndexSpec::Field(field)
    }
}

impl From<Document> for IndexSpec {
    fn from(keys: Document) -> Self {
        IndexSpec::Keys(keys)
    }
}

impl TryFrom<&Bson> for IndexSpec {
    type Error = Error;

    fn try_from(value: &Bson) -> Result<Self> {
        match value {
            Bson::String(field) => Ok(IndexSpec::Field(field.clone())),
            Bson::Document(keys) => Ok(IndexSpec::Keys(keys.clone())),
            other => Err(Error::InvalidIndexSpec(format!(
                "expected a field name or key document, got {:?}",
                other.element_type()
            ))),
        }
    }
}

fn field_part(field: &str) -> String {
    format!("{}_1", field.replace('.', "_"))
}

/// Underscore-separated name for `spec`, e.g. `"a.b"` -> `"a_b_1"` and
/// `{x: 1, y: -1}` -> `"x_1_y_1"`. Directions do not affect the name.
pub fn index_name(spec: &IndexSpec) -> String {
    match spec {
        IndexSpec::Field(field) => field_part(field),
        IndexSpec::Keys(keys) => keys
            .keys()
            .map(|k| field_part(k))
            .collect::<Vec<_>>()
            .join("_"),
    }
}

pub fn index_name_for(value: &Bson) -> Result<String> {
    IndexSpec::try_from(value).map(|spec| index_name(&spec))
}

/// Index model carrying the derived name.
pub fn index_model(spec: &IndexSpec) -> IndexModel {
    let options = IndexOptions::builder().name(index_name(spec)).build();
    IndexModel::builder()
        .keys(spec.keys())
        .options(options)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_name() {
        assert_eq!(index_name(&"a.b.c".into()), "a_b_c_1");
        assert_eq!(index_name(&"name".into()), "name_1");
    }

    #[test]
    fn test_compound_name_ignores_direction() {
        let spec = IndexSpec::from(doc! { "x": 1, "y": -1 });
        assert_eq!(index_name(&spec), "x_1_y_1");

        let spec = IndexSpec::from(doc! { "user.id": 1, "ts": -1 });
        assert_eq!(index_name(&spec), "user_id_1_ts_1");
    }

    #[test]
    fn test_empty_keys() {
        assert_eq!(index_name(&IndexSpec::Keys(Document::new())), "");
    }

    #[test]
    fn test_from_bson() {
        assert_eq!(index_name_for(&Bson::from("a.b")).unwrap(), "a_b_1");
        let keys = Bson::Document(doc! { "a": 1, "b.c": -1 });
        assert_eq!(index_name_for(&keys).unwrap(), "a_1_b_c_1");
        assert!(matches!(
            index_name_for(&Bson::Int32(3)),
            Err(Error::InvalidIndexSpec(_))
        ));
    }

    #[test]
    fn test_array_spec_rejected() {
        let arr = Bson::Array(vec!["a".into(), "b".into()]);
        assert!(matches!(
            index_name_for(&arr),
            Err(Error::InvalidIndexSpec(_))
        ));
        assert!(index_name_for(&Bson::Array(Vec::new())).is_err());
    }

    #[test]
    fn test_index_model_named() {
        let model = index_model(&"tags.name".into());
        assert_eq!(model.keys, doc! { "tags.name": 1 });
        let name = model.options.and_then(|o| o.name);
        assert_eq!(name.as_deref(), Some("tags_name_1"));
    }
}
