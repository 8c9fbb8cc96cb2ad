//! # webook CLI
//!
//! Command-line interface for compiling webook documents into standalone
//! interactive HTML.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "webook.yml", env = "WEBOOK_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new webook project with a starter document
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Compile the document into a standalone HTML artifact
    Build {
        /// Write the artifact here instead of the configured output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the export seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check the document and print diagnostics
    Verify {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the registered block variants by category
    Blocks {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Append a block with default content to a chapter
    NewBlock {
        /// Variant tag, e.g. `quiz` or `highlight_box`
        variant: String,

        /// Chapter number, starting at 1 (defaults to the last chapter)
        #[arg(long)]
        chapter: Option<usize>,

        /// Print the new block as JSON without touching the document
        #[arg(long)]
        print: bool,
    },

    /// Print a plain-text outline of the document
    Outline,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Build { output, seed } => {
            commands::build_artifact(&cli.config, output.as_deref(), seed)
        }
        Commands::Verify { json } => commands::verify_document(&cli.config, json),
        Commands::Blocks { json } => commands::list_blocks(json),
        Commands::NewBlock {
            variant,
            chapter,
            print,
        } => commands::new_block(&cli.config, &variant, chapter, print),
        Commands::Outline => commands::print_outline(&cli.config),
    }
}
