use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything a single index build needs. Missing keys in a config file fall
/// back to the Goga defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Page title. Inserted as markup, so entities like `&ndash;` are kept.
    pub title: String,
    /// Package identifier handed to the documentation tool.
    pub package: String,
    pub license_path: PathBuf,
    /// Target file. Its parent directory must already exist.
    pub output_path: PathBuf,
    pub generator: GeneratorConfig,
    pub links: LinkConfig,
    /// Abort when the documentation tool fails instead of carrying on.
    pub strict: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Goga &ndash; Documentation".to_string(),
            package: "github.com/cpmech/goga".to_string(),
            license_path: PathBuf::from("LICENSE"),
            output_path: PathBuf::from("doc/index.html"),
            generator: GeneratorConfig::default(),
            links: LinkConfig::default(),
            strict: false,
        }
    }
}

impl IndexConfig {
    pub fn trace_loaded(&self) {
        info!(
            package = %self.package,
            output_path = %self.output_path.display(),
            license_path = %self.license_path.display(),
            program = %self.generator.program,
            strict = self.strict,
            "Loaded IndexConfig"
        );
        debug!(?self, "IndexConfig loaded (full debug)");
    }

    /// Expands the link settings into the ordered list of substitutions:
    /// source prefixes first, then subdirectory anchors, then any extra rules.
    pub fn rewrite_rules(&self) -> Vec<RewriteRule> {
        let links = &self.links;
        let blob = format!("{}/blob/{}/", links.repository_url, links.branch);

        let mut rules: Vec<RewriteRule> = links
            .source_prefixes
            .iter()
            .map(|prefix| RewriteRule::literal(prefix, &blob))
            .collect();

        for subdir in &links.subdirs {
            rules.push(RewriteRule::literal(
                format!("<a href=\"{subdir}/\">"),
                format!(
                    "<a href=\"{}/tree/{}/{subdir}\">",
                    links.repository_url, links.branch
                ),
            ));
        }

        rules.extend(links.extra_rules.iter().cloned());
        rules
    }
}

/// The external documentation tool. `{package}` in any argument is replaced
/// by [`IndexConfig::package`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "godoc".to_string(),
            args: vec!["-html".to_string(), "{package}".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Public repository the rewritten links point at.
    pub repository_url: String,
    pub branch: String,
    /// Internal path prefixes godoc emits for source files.
    pub source_prefixes: Vec<String>,
    /// Subdirectories whose relative listing links become tree links.
    pub subdirs: Vec<String>,
    pub extra_rules: Vec<RewriteRule>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            repository_url: "https://github.com/cpmech/goga".to_string(),
            branch: "master".to_string(),
            source_prefixes: vec![
                "/src/target".to_string(),
                "/src/github.com/cpmech/goga/".to_string(),
            ],
            subdirs: vec!["data".to_string(), "doc".to_string(), "examples".to_string()],
            extra_rules: Vec::new(),
        }
    }
}

/// A find/replace pair applied across the whole target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub find: String,
    pub replace: String,
    /// Treat `find` as a regular expression; plain substring otherwise.
    #[serde(default)]
    pub regex: bool,
}

impl RewriteRule {
    pub fn literal(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            regex: false,
        }
    }

    pub fn pattern(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            regex: true,
        }
    }
}
