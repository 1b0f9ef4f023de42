//! Helpers for working with MongoDB: document normalization, index names,
//! administrative commands, configuration flags and database references.

pub mod command;
pub mod config;
pub mod constants;
pub mod dbref;
pub mod error;
pub mod index;
pub mod mongo;
pub mod normalize;
pub mod types;

pub use command::{run_admin_command, run_command, CommandConnection};
pub use config::{read_bool_config, ConfigSource, EnvSource, Settings};
pub use dbref::{is_ref, make_ref, resolve_ref, DbRef};
pub use error::{Error, Result};
pub use index::{index_name, IndexSpec};
pub use normalize::normalize;
