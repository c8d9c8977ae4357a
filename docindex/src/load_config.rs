//! `load_config` module: Loads a YAML build config and applies environment overrides on top.
//!
//! This module is the only place where user-supplied YAML is parsed into the
//! core [`IndexConfig`].
//!
//! # Responsibilities
//! - Parse the optional YAML file; keys that are absent keep the Goga defaults
//! - Apply environment overrides (`DOCINDEX_DOC_TOOL`, `DOCINDEX_OUTPUT`)
//! - Produce clear diagnostics: read failures mention "read", YAML failures mention "parse"
//!
//! # Errors
//! All errors in this module use `anyhow::Error` and are surfaced at the CLI boundary.

use anyhow::Result;
use docindex_core::config::IndexConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Overrides the documentation tool program (e.g. a `godoc` outside `PATH`).
pub const DOC_TOOL_ENV: &str = "DOCINDEX_DOC_TOOL";
/// Overrides the index file location.
pub const OUTPUT_ENV: &str = "DOCINDEX_OUTPUT";

/// Loads a YAML config file into an [`IndexConfig`]. Environment overrides are not applied here.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<IndexConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is a valid "all defaults" config.
    if config_content.trim().is_empty() {
        info!(config_path = ?path_ref, "Config file is empty, using defaults");
        return Ok(IndexConfig::default());
    }

    match serde_yaml::from_str::<IndexConfig>(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            Ok(conf)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}

/// Applies environment overrides in place.
pub fn apply_env_overrides(config: &mut IndexConfig) {
    if let Ok(program) = std::env::var(DOC_TOOL_ENV) {
        if !program.trim().is_empty() {
            info!(program = %program, "{DOC_TOOL_ENV} overrides documentation tool");
            config.generator.program = program;
        }
    }
    if let Ok(output) = std::env::var(OUTPUT_ENV) {
        if !output.trim().is_empty() {
            info!(output = %output, "{OUTPUT_ENV} overrides output path");
            config.output_path = PathBuf::from(output);
        }
    }
}

/// Resolves the effective config for a CLI invocation: file (or defaults) plus environment.
pub fn resolve_config(path: Option<&Path>) -> Result<IndexConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => {
            info!("No config file given, using defaults");
            IndexConfig::default()
        }
    };
    apply_env_overrides(&mut config);
    config.trace_loaded();
    Ok(config)
}
