//! High-level pipeline: documentation tool → index page → public links.
//!
//! This module provides the orchestration that turns one package's godoc HTML
//! into a self-contained index page. It:
//!   - Reads the license text that goes into the footer
//!   - Writes a fresh header, title and index-section opening to the target file
//!   - Appends whatever the documentation tool printed, verbatim
//!   - Rewrites internal source and subdirectory links into repository links, in place
//!   - Closes the index section and appends the footer
//!
//! # Major Types
//! - [`BuildReport`]: what was written, what the tool reported and how many links changed
//!
//! # Responsibilities
//! - Strictly sequential: every step finishes before the next one starts
//! - Fail-fast on anything that would produce a page without a footer license
//!   (unreadable license, bad rewrite rule) before the target is touched
//! - A failing documentation tool is logged and recorded, not fatal, unless
//!   [`IndexConfig::strict`] is set
//!
//! # Error Handling
//! There is no rollback. An I/O error or a strict-mode tool failure midway
//! leaves the target file partially written.
//!
//! # Navigation
//! - Main entrypoint: [`build_index`]

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::config::IndexConfig;
use crate::contract::{BuildError, CommandOutcome, DocGenerator};
use crate::index_file::IndexFile;
use crate::rewrite::{RewriteCount, Rewriter};
use crate::template;

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub index_path: PathBuf,
    /// Size of the finished file in bytes.
    pub bytes: u64,
    pub generator: CommandOutcome,
    pub rewrites: Vec<RewriteCount>,
}

impl BuildReport {
    pub fn total_replacements(&self) -> usize {
        self.rewrites.iter().map(|r| r.replacements).sum()
    }
}

/// Entrypoint: build the index page described by `config`, taking the
/// documentation HTML from `generator`.
pub async fn build_index<G>(config: &IndexConfig, generator: &G) -> Result<BuildReport, BuildError>
where
    G: DocGenerator + ?Sized,
{
    info!(
        package = %config.package,
        output = %config.output_path.display(),
        "[BUILD] Starting documentation index build"
    );

    // --- Inputs that must be valid before the target is touched ---
    let license = std::fs::read_to_string(&config.license_path).map_err(|e| {
        error!(
            error = ?e,
            path = %config.license_path.display(),
            "[BUILD][ERROR] Cannot read license file"
        );
        BuildError::License {
            path: config.license_path.clone(),
            source: e,
        }
    })?;
    let rewriter = Rewriter::compile(&config.rewrite_rules())?;
    debug!(rules = rewriter.len(), "[BUILD] Rewrite rules compiled");

    // --- Header, title and index opening (truncates any previous run) ---
    let mut index = IndexFile::create(&config.output_path, &template::header(&config.title))?;
    index.append(&template::title_heading(&config.title))?;
    index.append(&template::index_open())?;
    info!(path = %index.path().display(), "[BUILD] Wrote header");

    // --- Documentation tool output, appended as is ---
    let outcome = generator.generate().await;
    index.append(&outcome.stdout)?;
    if !outcome.success() {
        if config.strict {
            error!(status = %outcome.status, "[BUILD][ERROR] Documentation tool failed in strict mode");
            return Err(BuildError::Generator(outcome));
        }
        warn!(
            status = %outcome.status,
            stdout_bytes = outcome.stdout.len(),
            "[BUILD] Documentation tool failed; continuing with whatever it printed"
        );
    }

    // --- Link fixes over everything written so far ---
    let rewrites = index.rewrite(&rewriter)?;

    // --- Closing markup and footer ---
    index.append(&template::index_close())?;
    index.append(&template::footer(&license))?;

    let report = BuildReport {
        index_path: index.path().to_path_buf(),
        bytes: index.size()?,
        generator: outcome,
        rewrites,
    };

    info!(
        path = %report.index_path.display(),
        bytes = report.bytes,
        replacements = report.total_replacements(),
        "[BUILD] Documentation index complete"
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "[BUILD][DEBUG] Build report as JSON"),
        Err(e) => error!(error = ?e, "[BUILD][DEBUG] Failed to serialize build report as JSON"),
    }

    Ok(report)
}
