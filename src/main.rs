// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command line front end for inspecting agent configuration files.

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uacfg::catalog::lib_metadata_by_name;
use uacfg::prelude::*;
use uacfg::util::break_filename;

#[derive(Parser)]
#[command(name = "uacfg")]
#[command(version, about = "Inspect Unified Agent configuration files", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized fields of a configuration file
    Show {
        /// Path to the agent configuration file
        file: PathBuf,
    },
    /// Print the environment the agent would be launched with
    Env {
        /// Path to the agent configuration file
        file: PathBuf,
        /// Print only the WS_* variables derived from the file
        #[arg(long)]
        only_derived: bool,
    },
    /// Print the package managers and file suffixes of a language
    Lang {
        /// Language name, case-insensitive
        language: String,
    },
    /// Split a library file name into name, version and suffix
    Split {
        /// File name such as commons-lang3-3.12.0.jar
        filename: String,
    },
}

fn show(file: &Path, out: &mut impl Write) -> Result<()> {
    let config = UaConfFileAdapter::from_file(file)?.to_config();
    for (name, value) in config.fields() {
        writeln!(out, "{}={}", name, value.map(|v| v.to_string()).unwrap_or_default())?;
    }
    Ok(())
}

fn env(file: &Path, only_derived: bool, out: &mut impl Write) -> Result<()> {
    let config = UaConfFileAdapter::from_file(file)?.to_config();
    let env = EnvVarMaterializer::new()
        .inherit_env(!only_derived)
        .to_env_map(&config);
    for (name, value) in env.into_iter().collect::<BTreeMap<_, _>>() {
        writeln!(out, "{}={}", name, value)?;
    }
    Ok(())
}

fn lang(language: &str, out: &mut impl Write) -> Result<()> {
    let metadata =
        lib_metadata_by_name(language).ok_or_else(|| ConfigError::UnsupportedLanguage {
            language: language.to_string(),
        })?;
    writeln!(out, "package managers: {}", metadata.package_managers.join(", "))?;
    writeln!(out, "file suffixes: {}", metadata.file_suffixes.join(", "))?;
    Ok(())
}

fn split(filename: &str, out: &mut impl Write) -> Result<()> {
    let parts = break_filename(filename)?;
    writeln!(out, "name: {}", parts.name)?;
    writeln!(out, "version: {}", parts.version)?;
    writeln!(out, "suffix: {}", parts.suffix)?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Show { file } => show(&file, out),
        Commands::Env { file, only_derived } => env(&file, only_derived, out),
        Commands::Lang { language } => lang(&language, out),
        Commands::Split { filename } => split(&filename, out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
