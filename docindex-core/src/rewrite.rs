//! Ordered find/replace over a whole document.
//!
//! Documents are treated as bytes, not text: whatever the documentation tool
//! printed survives a rewrite unchanged apart from the matched spans, even if
//! it is not valid UTF-8.
//!
//! Literal rules are plain substring matches: every occurrence anywhere in the
//! document is replaced, with no notion of where in the markup it sits. Pattern
//! rules use `regex::bytes` and may reference capture groups (`$1`, `${name}`)
//! in the replacement.

use regex::bytes::{NoExpand, Regex};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::RewriteRule;
use crate::contract::BuildError;

/// How many replacements one rule made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteCount {
    pub find: String,
    pub replacements: usize,
}

#[derive(Debug)]
struct CompiledRule {
    find: String,
    matcher: Regex,
    /// Literal rules insert the replacement as is; pattern rules expand `$` groups.
    expand: bool,
    replace: String,
}

/// A validated, ready-to-apply list of rules.
#[derive(Debug)]
pub struct Rewriter {
    rules: Vec<CompiledRule>,
}

impl Rewriter {
    /// Validates every rule up front so a bad rule is reported before any
    /// file is touched.
    pub fn compile(rules: &[RewriteRule]) -> Result<Self, BuildError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.find.is_empty() {
                error!(replace = %rule.replace, "Rewrite rule has an empty pattern");
                return Err(BuildError::InvalidRule {
                    find: rule.find.clone(),
                    message: "pattern must not be empty".to_string(),
                });
            }
            let source = if rule.regex {
                rule.find.clone()
            } else {
                regex::escape(&rule.find)
            };
            let matcher = Regex::new(&source).map_err(|e| {
                error!(find = %rule.find, error = %e, "Rewrite pattern does not compile");
                BuildError::InvalidRule {
                    find: rule.find.clone(),
                    message: e.to_string(),
                }
            })?;
            compiled.push(CompiledRule {
                find: rule.find.clone(),
                matcher,
                expand: rule.regex,
                replace: rule.replace.clone(),
            });
        }
        Ok(Self { rules: compiled })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the rules in order; each rule sees the output of the previous one.
    pub fn apply(&self, document: &[u8]) -> (Vec<u8>, Vec<RewriteCount>) {
        let mut current = document.to_vec();
        let mut counts = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let replacements = rule.matcher.find_iter(&current).count();
            if replacements > 0 {
                let replace = rule.replace.as_bytes();
                current = if rule.expand {
                    rule.matcher.replace_all(&current, replace).into_owned()
                } else {
                    rule.matcher.replace_all(&current, NoExpand(replace)).into_owned()
                };
            }
            debug!(find = %rule.find, replacements, "Applied rewrite rule");
            counts.push(RewriteCount {
                find: rule.find.clone(),
                replacements,
            });
        }

        (current, counts)
    }
}
