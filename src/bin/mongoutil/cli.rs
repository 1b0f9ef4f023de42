use clap::{Parser, Subcommand};

/// CLI arguments for mongoutil
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the index name for a field or a JSON key document/array
    IndexName {
        /// e.g. `a.b` or `{"x": 1, "y": -1}`
        spec: String,
    },

    /// Run a database command and print the response
    Command {
        #[arg(long)]
        mongo_uri: String,

        /// Database to run against (defaults to admin)
        #[arg(long)]
        db: Option<String>,

        /// Command name (e.g. `listDatabases`) or a JSON command document
        command: String,
    },

    /// Fetch the document a DBRef points to
    ResolveRef {
        #[arg(long)]
        mongo_uri: String,

        #[arg(long)]
        db: String,

        #[arg(long)]
        collection: String,

        /// Target _id as JSON, e.g. `42` or `{"$oid": "..."}`
        #[arg(long)]
        id: String,
    },

    /// Print whether a boolean configuration flag is on
    Flag {
        name: String,

        /// YAML settings file; the environment is used when omitted
        #[arg(long)]
        settings: Option<String>,
    },
}
