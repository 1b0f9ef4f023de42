// src/mongo.rs
use crate::error::Result;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

pub async fn connect(uri: &str) -> Result<Client> {
    let client_options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(client_options)?;
    tracing::debug!("mongodb client created");
    Ok(client)
}

pub async fn connect_database(uri: &str, db: &str) -> Result<Database> {
    let client = connect(uri).await?;
    Ok(client.database(db))
}
