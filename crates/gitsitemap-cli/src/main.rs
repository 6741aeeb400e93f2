//! gitsitemap CLI
//!
//! Generates sitemap.xml from a JSON site manifest, stamping each URL with
//! the last commit time of its source file.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gitsitemap_core::config::{DEFAULT_OUTPUT, DEFAULT_SOURCE_TEMPLATE};
use gitsitemap_git::Backend;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "gitsitemap")]
#[command(author, version, about = "Generate sitemaps with git-based lastmod dates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sitemap from a JSON manifest
    Generate {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Output XML file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Source file template; {src} is replaced by each entry's srcFile
        #[arg(short, long, default_value = DEFAULT_SOURCE_TEMPLATE)]
        source_template: String,

        /// How commit history is read
        #[arg(short, long, value_enum, default_value_t = BackendArg::Cli)]
        backend: BackendArg,

        /// Indent the XML output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the last commit time of a file
    Lastmod {
        /// File to look up
        file: PathBuf,

        /// How commit history is read
        #[arg(short, long, value_enum, default_value_t = BackendArg::Cli)]
        backend: BackendArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    /// Run the git executable
    Cli,
    /// Use libgit2 in-process
    Libgit2,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Cli => Backend::Cli,
            BackendArg::Libgit2 => Backend::LibGit2,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gitsitemap=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("gitsitemap=info")
            .init();
    }

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            source_template,
            backend,
            pretty,
        } => {
            commands::generate::run(manifest, output, source_template, backend.into(), pretty)?;
        }
        Commands::Lastmod { file, backend } => {
            commands::lastmod::run(file, backend.into())?;
        }
    }

    Ok(())
}
