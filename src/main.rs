//! fscrud CLI
//!
//! Serves CRUD routes for the files in one storage directory:
//! POST/GET/PUT/DELETE on `/{name}`.

use fscrud::cli::{logging, parse_args, Error, EXIT_FAILURE};
use fscrud::ApiServer;

#[tokio::main]
async fn main() {
    let parsed = match parse_args(std::env::args_os()) {
        Ok(p) => p,
        // clap prints help/version/usage itself and picks the exit code
        Err(Error::Args(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
    }

    let server = ApiServer::new(parsed.into_config());
    if let Err(e) = server.start().await {
        tracing::error!("{:#}", e);
        std::process::exit(EXIT_FAILURE);
    }
}
