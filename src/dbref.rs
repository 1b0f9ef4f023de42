// src/dbref.rs
//! Lightweight links between documents in different collections.
//!
//! A reference is a document holding the target collection under `$ref` and
//! the target's `_id` under `$id`.

use crate::error::Result;
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use mongodb::{Collection, Database};

pub const REF_KEY: &str = "$ref";
pub const ID_KEY: &str = "$id";

#[derive(Debug, Clone, PartialEq)]
pub struct DbRef {
    pub collection: String,
    pub id: Bson,
}

impl DbRef {
    pub fn new(collection: impl Into<String>, id: impl Into<Bson>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn to_document(&self) -> Document {
        doc! {
            REF_KEY: self.collection.as_str(),
            ID_KEY: self.id.clone(),
        }
    }

    /// `None` unless both keys are present and `$ref` names a collection.
    pub fn from_document(doc: &Document) -> Option<Self> {
        let collection = collection_name(doc.get(REF_KEY)?)?;
        let id = doc.get(ID_KEY)?;
        Some(Self::new(collection, id.clone()))
    }
}

impl From<DbRef> for Document {
    fn from(r: DbRef) -> Self {
        r.to_document()
    }
}

impl From<DbRef> for Bson {
    fn from(r: DbRef) -> Self {
        Bson::Document(r.to_document())
    }
}

/// Strings are used as-is and integers are rendered in decimal; any other
/// `$ref` value names no collection.
fn collection_name(ns: &Bson) -> Option<String> {
    match ns {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn make_ref(collection: &str, id: impl Into<Bson>) -> Document {
    DbRef::new(collection, id).to_document()
}

pub fn is_ref(value: &Bson) -> bool {
    match value {
        Bson::Document(doc) => doc.contains_key(REF_KEY) && doc.contains_key(ID_KEY),
        _ => false,
    }
}

/// Collection handle able to look a document up by `_id`.
#[async_trait]
pub trait RefCollection: Send + Sync {
    async fn find_by_id(&self, id: &Bson) -> mongodb::error::Result<Option<Document>>;
}

/// Database handle able to select a collection by name.
pub trait RefDatabase: Send + Sync {
    type Collection: RefCollection;

    fn select_collection(&self, name: &str) -> Self::Collection;
}

#[async_trait]
impl RefCollection for Collection<Document> {
    async fn find_by_id(&self, id: &Bson) -> mongodb::error::Result<Option<Document>> {
        self.find_one(doc! { "_id": id.clone() }).await
    }
}

impl RefDatabase for Database {
    type Collection = Collection<Document>;

    fn select_collection(&self, name: &str) -> Self::Collection {
        self.collection::<Document>(name)
    }
}

/// Fetches the document `reference` points to.
///
/// Returns `Ok(None)` when `reference` is missing `$ref` or `$id`, when `$ref`
/// names no collection, or when no document matches.
pub async fn resolve_ref<D>(db: &D, reference: &Document) -> Result<Option<Document>>
where
    D: RefDatabase + ?Sized,
{
    let Some(DbRef { collection, id }) = DbRef::from_document(reference) else {
        return Ok(None);
    };

    let found = db.select_collection(&collection).find_by_id(&id).await?;
    if found.is_none() {
        tracing::debug!(%collection, %id, "dbref points to nothing");
    }
    Ok(found)
}
