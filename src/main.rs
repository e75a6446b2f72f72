//! doclink CLI entry point
//!
//! Parses the command line, runs the command and reports errors:
//! - `options` - Write the javadoc options file
//! - `offline-links` - Write the offline link options file
//! - `map` - Write the javadoc map
//! - `check` - Show what every rule matches

use anyhow::Result;
use clap::Parser;
use doclink_cli::cli;
use doclink_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
