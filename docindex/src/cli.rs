//! This module implements the CLI interface for docindex: command parsing,
//! config resolution and the user-visible summary.
//!
//! All pipeline logic (templates, link rewriting, running the documentation
//! tool) lives in the [`docindex-core`] crate. This module is strictly glue.
//!
//! ## How To Use
//! - From a Go checkout containing `LICENSE` and `doc/`: `docindex build`.
//! - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
//!
//! [`docindex-core`]: ../../docindex-core/

use crate::load_config::resolve_config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docindex_core::build::build_index;
use docindex_core::generate::CommandDocGenerator;
use docindex_core::index_file::IndexFile;
use docindex_core::rewrite::Rewriter;
use std::path::PathBuf;

/// CLI for docindex: build a standalone documentation index page.
#[derive(Parser)]
#[clap(
    name = "docindex",
    version,
    about = "Build doc/index.html from godoc output with links pointing at the public repository"
)]
pub struct Cli {
    /// Log debug output, including the documentation tool's streams
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the documentation tool and write the index page
    Build {
        /// Path to a YAML config file; Goga defaults are used when omitted
        #[clap(long)]
        config: Option<PathBuf>,
        /// Fail when the documentation tool does not exit cleanly
        #[clap(long)]
        strict: bool,
        /// Print the build report as JSON instead of a summary
        #[clap(long)]
        json: bool,
    },
    /// Apply the configured link rewrites to an existing HTML file in place
    Rewrite {
        /// HTML file to rewrite
        #[clap(long)]
        file: PathBuf,
        /// Path to a YAML config file; Goga defaults are used when omitted
        #[clap(long)]
        config: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Build {
            config,
            strict,
            json,
        } => {
            let mut config = resolve_config(config.as_deref())?;
            config.strict |= strict;
            tracing::info!(command = "build", "Starting index build");

            let generator = CommandDocGenerator::from_config(&config.generator, &config.package);
            match build_index(&config, &generator).await {
                Ok(report) => {
                    tracing::info!(command = "build", ?report, "Index build complete");
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!(
                            "Wrote {} ({} bytes, {} links rewritten)",
                            report.index_path.display(),
                            report.bytes,
                            report.total_replacements()
                        );
                        if !report.generator.success() {
                            println!("Warning: documentation tool {}", report.generator.status);
                        }
                    }
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "build", error = %e, "Index build failed");
                    Err(anyhow::Error::new(e).context("index build failed"))
                }
            }
        }
        Commands::Rewrite { file, config } => {
            let config = resolve_config(config.as_deref())?;
            tracing::info!(command = "rewrite", file = %file.display(), "Rewriting links");

            let rewriter = Rewriter::compile(&config.rewrite_rules())?;
            let mut index = IndexFile::open(&file)
                .with_context(|| format!("cannot open {}", file.display()))?;
            let counts = index
                .rewrite(&rewriter)
                .with_context(|| format!("cannot rewrite {}", file.display()))?;

            for count in &counts {
                println!("{:>4}  {}", count.replacements, count.find);
            }
            Ok(())
        }
    }
}
