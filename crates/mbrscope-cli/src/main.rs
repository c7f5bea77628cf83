//! mbrscope CLI - MBR sector dump inspection
//!
//! Reads the first 512 bytes of a disk image or raw sector dump, runs the
//! analysis core, and renders the result as text, JSON, or YAML.

mod loader;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mbrscope_render as render;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mbrscope")]
#[command(about = "Forensic analyzer for MBR sectors and boot records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze the MBR of a sector dump or disk image
    Analyze {
        /// Path to the dump file (at least 512 bytes)
        file: PathBuf,

        /// Report format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print an annotated hex dump of the first sector
    Hexdump {
        /// Path to the dump file (at least 512 bytes)
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .with_target(false)
        .init();

    match cli.command {
        Command::Analyze {
            file,
            format,
            output,
        } => cmd_analyze(&file, format, output.as_deref()),
        Command::Hexdump { file } => cmd_hexdump(&file),
    }
}

fn cmd_analyze(
    file: &std::path::Path,
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let (data, metadata) = loader::load_sector(file)?;
    let result = mbrscope_core::analyze(&data, metadata)?;

    let rendered = match format {
        OutputFormat::Text => render::render_text(&result),
        OutputFormat::Json => render::render_json(&result)?,
        OutputFormat::Yaml => render::render_yaml(&result)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn cmd_hexdump(file: &std::path::Path) -> Result<()> {
    let (data, metadata) = loader::load_sector(file)?;
    let result = mbrscope_core::analyze(&data, metadata)?;

    println!("{}", render::render_hex_dump(&result));

    Ok(())
}
