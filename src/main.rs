//! CMake attribute check generator CLI
//!
//! Usage:
//!   cmake-attribute-gen --lang <LANG>
//!
//! Options:
//!   --lang <LANG>  Language to generate the module for [possible values: c, c++]
//!   -h, --help     Print help
//!
//! The module is written to stdout. Diagnostics go to stderr and are
//! controlled by `RUST_LOG` (default `warn`).

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cmake_attribute_gen::{write_check_attribute_module, Language};

#[derive(Parser)]
#[command(name = "cmake-attribute-gen")]
#[command(version)]
#[command(about = "Generate a CMake module that checks compiler attribute support")]
struct Cli {
    /// Language to generate the module for
    #[arg(long, value_enum)]
    lang: Language,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already initialized is fine
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!(lang = %cli.lang, "generating check-attribute module");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_check_attribute_module(cli.lang, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
