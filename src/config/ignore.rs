//! Ignore-list loading.
//!
//! An ignore file holds one relative-path prefix per line.  Blank lines and
//! lines starting with `#` (after trimming) are dropped; nothing else is
//! normalised.  Matching is plain string-prefix matching, so `dir1` also
//! excludes `dir10/x`.
use std::io;
use std::path::Path;

use crate::error::IgnoreError;
use crate::logging::Log;

/// Ordered set of relative-path prefixes excluded from stowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    /// Create an empty ignore list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    /// Return this list with `prefix` appended.
    #[must_use]
    pub fn with_entry(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Return `true` if `relative` starts with any configured prefix.
    #[must_use]
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.prefixes.iter().any(|p| relative.starts_with(p.as_str()))
    }

    /// The configured prefixes, in file order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.prefixes
    }

    /// Number of configured prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Return `true` if no prefixes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            prefixes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse ignore-file contents into an [`IgnoreList`].
#[must_use]
pub fn parse(contents: &str) -> IgnoreList {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Load the ignore list at `path`.
///
/// A missing file yields an empty list and a warning on `log`.
///
/// # Errors
///
/// Returns [`IgnoreError::Read`] if the file exists but cannot be read.
pub fn load(path: &Path, log: &dyn Log) -> Result<IgnoreList, IgnoreError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let list = parse(&contents);
            log.debug(&format!(
                "loaded {} ignore entries from {}",
                list.len(),
                path.display()
            ));
            Ok(list)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log.warn(&format!(
                "Ignore file '{}' not found. Proceeding without it.",
                path.display()
            ));
            Ok(IgnoreList::new())
        }
        Err(source) => Err(IgnoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
