//! Walk-through of the `jstruct` model lifecycle.
//!
//! Writes a valid user to disk, reads it back with validation, then shows
//! that constructing an invalid user is rejected.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use jstruct::example::ExampleUser;
use jstruct::io::config::load_config;
use jstruct::{Model, ModelError};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "jstruct-demo",
    version,
    about = "Serialize, reload, and validate a sample model"
)]
struct Cli {
    /// Where to write the sample user.
    #[arg(long, default_value = "user.json")]
    file: PathBuf,
    /// Spaces per indent level (0 or less for compact output).
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    indent: i32,
    /// Optional TOML config (`extension`, `trailing_newline`).
    #[arg(long, default_value = "jstruct.toml")]
    config: PathBuf,
}

fn main() {
    jstruct::logging::init("info");
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config).context("load config")?;

    let user = ExampleUser::new("Arthur", 1863, "Bear").context("construct Arthur")?;
    if !user.write_json_with(&cli.file, cli.indent, &config) {
        bail!("failed to write {}", cli.file.display());
    }
    info!(json = %user.to_json(cli.indent)?, "serialized");

    let loaded = ExampleUser::read_json_with(&cli.file, &config)
        .with_context(|| format!("read {}", cli.file.display()))?;
    if loaded != user {
        bail!("reloaded user differs from the original");
    }
    info!(json = %loaded.to_json(cli.indent)?, "deserialized");

    match ExampleUser::new("Micah", 1860, "Revenge") {
        Ok(micah) => bail!("{} passed validation", micah.describe()),
        Err(err @ ModelError::Validation { .. }) => {
            info!(err = %err, "Micah has been stopped in his tracks");
        }
        Err(err) => return Err(err).context("construct Micah"),
    }
    Ok(())
}
