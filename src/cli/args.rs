//! CLI argument parsing
//!
//! Options: --store, --port, --host, --version, --help

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use fscrud_api::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT};

use crate::cli::store_root::resolve_store_root_from;
use crate::cli::{resolve_store_root, Error, Result};

/// Parsed CLI arguments
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fscrud")]
#[command(version, about = "Serve a directory of text files over HTTP", long_about = None)]
pub struct Args {
    /// Path to the file storage directory
    /// (falls back to $FSCRUD_STORE, then /tmp/fscrud)
    #[arg(long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Port to serve the API on; `:1234` is accepted too
    #[arg(long, default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
}

impl Args {
    /// Server configuration, with the storage root resolved from the environment
    pub fn into_config(self) -> ApiConfig {
        let store = resolve_store_root(self.store.clone());
        self.with_store(store)
    }

    /// Server configuration, with an explicit stand-in for $FSCRUD_STORE
    pub fn into_config_with_env(self, env_store: Option<String>) -> ApiConfig {
        let store = resolve_store_root_from(self.store.clone(), env_store);
        self.with_store(store)
    }

    fn with_store(self, store: PathBuf) -> ApiConfig {
        ApiConfig {
            host: self.host,
            port: self.port,
            store,
        }
    }
}

/// Parse CLI arguments (first item is the program name)
pub fn parse_args<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?)
}

/// Parse a port given either as `1234` or `:1234`
pub fn parse_port(value: &str) -> std::result::Result<u16, Error> {
    let digits = value.strip_prefix(':').unwrap_or(value);
    digits
        .parse::<u16>()
        .map_err(|_| Error::InvalidPort(value.to_string()))
}
