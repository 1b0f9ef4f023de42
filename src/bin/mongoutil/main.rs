mod cli;

use crate::cli::{Cli, Command};

use anyhow::{anyhow, Result};
use bson::{Bson, Document};
use clap::Parser;
use mongoutil::command::{command, run_command};
use mongoutil::config::{read_bool_config, EnvSource, Settings};
use mongoutil::constants::ADMIN;
use mongoutil::dbref::{resolve_ref, DbRef};
use mongoutil::index::index_name_for;
use mongoutil::mongo::{connect, connect_database};
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses relaxed extended JSON, e.g. `{"$oid": "..."}`.
fn parse_json(text: &str) -> Result<Bson> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Bson::try_from(json)?)
}

fn print_document(doc: Document) -> Result<()> {
    let json = Bson::Document(doc).into_relaxed_extjson();
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    match args.command {
        Command::IndexName { spec } => {
            let value = if spec.trim_start().starts_with(['{', '[']) {
                parse_json(&spec)?
            } else {
                Bson::String(spec)
            };
            println!("{}", index_name_for(&value)?);
        }
        Command::Command {
            mongo_uri,
            db,
            command: cmd,
        } => {
            let cmd_doc = match parse_json(&cmd) {
                Ok(Bson::Document(doc)) => doc,
                Ok(_) => return Err(anyhow!("Command must be a JSON object or a command name")),
                Err(_) => command(&cmd),
            };
            let client = connect(&mongo_uri).await?;
            let db = db.as_deref().unwrap_or(ADMIN);
            let response = run_command(&client, cmd_doc, db).await?;
            print_document(response)?;
        }
        Command::ResolveRef {
            mongo_uri,
            db,
            collection,
            id,
        } => {
            let database = connect_database(&mongo_uri, &db).await?;
            let reference = DbRef::new(collection, parse_json(&id)?);
            match resolve_ref(&database, &reference.to_document()).await? {
                Some(doc) => print_document(doc)?,
                None => println!("null"),
            }
        }
        Command::Flag { name, settings } => {
            let on = match settings {
                Some(path) => read_bool_config(&Settings::load(path)?, &name),
                None => read_bool_config(&EnvSource, &name),
            };
            println!("{}", on);
        }
    }

    Ok(())
}
