// src/command.rs
//! Database commands sent through the `$cmd` pseudo-collection.

use crate::constants::{ADMIN, CMD_COLLECTION};
use crate::error::{Error, Result};
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::Client;
use std::io;

/// Connection capable of a single-document find in a `db.collection`
/// namespace.
#[async_trait]
pub trait CommandConnection: Send + Sync {
    async fn find_one(
        &self,
        namespace: &str,
        filter: Document,
    ) -> mongodb::error::Result<Option<Document>>;
}

#[async_trait]
impl CommandConnection for Client {
    /// Servers no longer answer finds on `$cmd`, so those namespaces go
    /// through `run_command`.
    async fn find_one(
        &self,
        namespace: &str,
        filter: Document,
    ) -> mongodb::error::Result<Option<Document>> {
        let (db, coll) = split_namespace(namespace)?;
        let database = self.database(db);
        if coll == CMD_COLLECTION {
            database.run_command(filter).await.map(Some)
        } else {
            database
                .collection::<Document>(coll)
                .find_one(filter)
                .await
        }
    }
}

/// Splits `db.collection` at the first dot. Both parts must be non-empty.
pub fn split_namespace(namespace: &str) -> mongodb::error::Result<(&str, &str)> {
    match namespace.split_once('.') {
        Some((db, coll)) if !db.is_empty() && !coll.is_empty() => Ok((db, coll)),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("namespace '{}' is not of the form <db>.<collection>", namespace),
        )
        .into()),
    }
}

pub fn command_namespace(database: &str) -> String {
    format!("{}.{}", database, CMD_COLLECTION)
}

/// `{ name: 1 }`, the usual shape of an argument-less command.
pub fn command(name: &str) -> Document {
    doc! { name: 1 }
}

/// Runs `cmd` against `database` and returns the server's response.
///
/// An empty response is logged at warn level and reported as
/// [`Error::CommandFailed`]; driver failures come back as [`Error::Driver`].
pub async fn run_command<C>(conn: &C, cmd: Document, database: &str) -> Result<Document>
where
    C: CommandConnection + ?Sized,
{
    let namespace = command_namespace(database);
    tracing::debug!(%namespace, ?cmd, "running db command");

    match conn.find_one(&namespace, cmd).await? {
        Some(response) => Ok(response),
        None => {
            tracing::warn!(database, "no db response");
            Err(Error::CommandFailed {
                database: database.to_string(),
            })
        }
    }
}

pub async fn run_admin_command<C>(conn: &C, cmd: Document) -> Result<Document>
where
    C: CommandConnection + ?Sized,
{
    run_command(conn, cmd, ADMIN).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LIST_DATABASES;

    #[test]
    fn test_command_namespace() {
        assert_eq!(command_namespace("test"), "test.$cmd");
        assert_eq!(command_namespace(ADMIN), "admin.$cmd");
    }

    #[test]
    fn test_split_namespace() {
        assert_eq!(split_namespace("app.$cmd").unwrap(), ("app", "$cmd"));
        assert_eq!(
            split_namespace("app.users.archive").unwrap(),
            ("app", "users.archive")
        );
        for bad in ["app", "app.", ".users", ""] {
            let err = split_namespace(bad).unwrap_err();
            assert!(err.to_string().contains("is not of the form"), "{}", err);
        }
    }

    #[test]
    fn test_command_doc() {
        assert_eq!(command(LIST_DATABASES), doc! { "listDatabases": 1 });
    }
}
