//! stamp CLI - renders declarative stories to AMP story HTML.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "stamp")]
#[command(about = "Render declarative stories to AMP story HTML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to stamp.toml config file
    #[arg(short, long, default_value = "stamp.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a stamp project in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Render a single story file
    Render {
        /// Story file (.json, .yaml or .yml)
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip pretty-printing
        #[arg(long)]
        no_pretty: bool,

        /// Minify the default stylesheet
        #[arg(long)]
        minify_css: bool,
    },

    /// Render every story in the stories directory
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate story files without writing output
    Check {
        /// Story files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered HTML on stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(Path::new("."), yes)?;
        }
        Commands::Render {
            file,
            output,
            no_pretty,
            minify_css,
        } => {
            let overrides = commands::render::Overrides {
                pretty: if no_pretty { Some(false) } else { None },
                minify_css: if minify_css { Some(true) } else { None },
            };
            commands::render::run(&cli.config, &file, output.as_deref(), overrides)?;
        }
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
        Commands::Check { files } => {
            commands::check::run(&cli.config, &files)?;
        }
    }

    Ok(())
}
