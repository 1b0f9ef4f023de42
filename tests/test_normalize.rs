use bson::{doc, Bson};
use mongoutil::normalize::{normalize, normalize_object};
use serde::Serialize;

#[derive(Serialize)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Serialize)]
struct Person {
    name: String,
    age: i32,
    tags: Vec<String>,
    address: Address,
}

#[test]
fn test_normalize_struct() {
    let person = Person {
        name: "ada".to_string(),
        age: 36,
        tags: vec!["math".to_string(), "engines".to_string()],
        address: Address {
            city: "London".to_string(),
            zip: None,
        },
    };

    let doc = normalize_object(&person).unwrap();
    assert_eq!(
        doc,
        doc! {
            "name": "ada",
            "age": 36,
            "tags": ["math", "engines"],
            "address": { "city": "London", "zip": Bson::Null },
        }
    );
    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, ["name", "age", "tags", "address"]);
}

#[test]
fn test_normalize_unit_is_empty() {
    assert!(normalize_object(&()).unwrap().is_empty());
}

#[test]
fn test_normalize_preserves_deep_leaves() {
    let src = doc! {
        "a": { "b": { "c": [[1, 2], { "d": 3.5 }] } },
        "when": bson::DateTime::from_millis(1_000),
    };
    assert_eq!(normalize(Some(&Bson::Document(src.clone()))), src);
}
