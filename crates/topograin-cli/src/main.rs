//! Topograin CLI - Command-line interface for procedural texture generation
//!
//! Validates specs, renders topography maps and grain overlays, and manages
//! spec files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use topograin_cli::commands;
use topograin_cli::commands::template::TemplateKind;

/// Topograin - Deterministic topography and grain textures
#[derive(Parser)]
#[command(name = "topograin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spec file without generating images
    Validate {
        /// Path to the spec file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate images from a spec file
    Generate {
        /// Path to the spec file
        #[arg(short, long)]
        spec: String,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate images from every spec under a directory
    GenerateAll {
        /// Directory to scan for spec files
        #[arg(long)]
        spec_dir: String,

        /// Output root directory (default: ./topograin-out)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Print one line per spec
        #[arg(short, long)]
        verbose: bool,
    },

    /// Format a spec file with sorted keys
    Fmt {
        /// Path to the spec file
        #[arg(short, long)]
        spec: String,

        /// Output file path (default: overwrite input)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print or write a reference spec
    Template {
        /// Which preset to emit
        #[arg(value_enum)]
        kind: TemplateKind,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Generate {
            spec,
            out_root,
            json,
        } => commands::generate::run(&spec, out_root.as_deref(), json),
        Commands::GenerateAll {
            spec_dir,
            out_root,
            verbose,
        } => commands::generate_all::run(&spec_dir, out_root.as_deref(), verbose),
        Commands::Fmt { spec, output } => commands::fmt::run(&spec, output.as_deref()),
        Commands::Template { kind, output } => commands::template::run(kind, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
