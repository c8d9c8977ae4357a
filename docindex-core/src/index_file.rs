use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::rewrite::{RewriteCount, Rewriter};

/// The generated index page. Created fresh, then only ever appended to or
/// rewritten as a whole, by a single writer in program order.
#[derive(Debug)]
pub struct IndexFile {
    path: PathBuf,
}

impl IndexFile {
    /// Creates (or truncates) the file and writes the first fragment.
    /// The parent directory is not created.
    pub fn create(path: impl Into<PathBuf>, fragment: &str) -> std::io::Result<Self> {
        let path = path.into();
        let mut file = File::create(&path).map_err(|e| {
            error!(error = ?e, path = %path.display(), "Failed to create index file");
            e
        })?;
        file.write_all(fragment.as_bytes())?;
        debug!(path = %path.display(), bytes = fragment.len(), "Created index file");
        Ok(Self { path })
    }

    /// Opens an existing file for in-place rewriting or further appends.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a file", path.display()),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends bytes exactly as given; no encoding is assumed.
    pub fn append(&mut self, fragment: impl AsRef<[u8]>) -> std::io::Result<()> {
        let fragment = fragment.as_ref();
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(fragment)?;
        debug!(path = %self.path.display(), bytes = fragment.len(), "Appended fragment");
        Ok(())
    }

    /// Rewrites the whole file through `rewriter`. The new content goes to a
    /// temporary file next to the target which then replaces it, so a crash
    /// mid-write leaves the previous content intact.
    pub fn rewrite(&mut self, rewriter: &Rewriter) -> std::io::Result<Vec<RewriteCount>> {
        let content = fs::read(&self.path)?;
        let (rewritten, counts) = rewriter.apply(&content);

        if rewritten == content {
            debug!(path = %self.path.display(), "No rewrite rule matched; file left as is");
            return Ok(counts);
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&rewritten)?;
        fs::set_permissions(tmp.path(), fs::metadata(&self.path)?.permissions())?;
        tmp.persist(&self.path).map_err(|e| {
            error!(error = ?e.error, path = %self.path.display(), "Failed to replace index file");
            e.error
        })?;

        let total: usize = counts.iter().map(|c| c.replacements).sum();
        info!(path = %self.path.display(), replacements = total, "Rewrote links in place");
        Ok(counts)
    }

    pub fn size(&self) -> std::io::Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}
