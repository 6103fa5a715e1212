//! Context types for rule execution.

use crate::token::Token;
use std::path::{Path, PathBuf};

/// File extensions treated as JavaScript sources by default.
const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx"];

/// Metadata about the file being linted.
///
/// The core performs no I/O; the caller supplies the path alongside the
/// source text so rules can make extension-aware decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// Path of the file, as supplied by the caller.
    pub path: PathBuf,
    /// Lowercased file extension, empty if none.
    pub extension: String,
}

impl FileMeta {
    /// Creates metadata from a path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        Self { path, extension }
    }

    /// Returns `true` for recognized JavaScript extensions.
    #[must_use]
    pub fn is_javascript(&self) -> bool {
        JS_EXTENSIONS.contains(&self.extension.as_str())
    }
}

/// Context provided to rules during evaluation.
///
/// Borrowed by every rule for one lint run; rules never mutate it.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Metadata about the file.
    pub meta: &'a FileMeta,
    /// Full source text.
    pub source: &'a str,
    /// Token sequence produced by the tokenizer, EOF-terminated.
    pub tokens: &'a [Token],
}

impl<'a> FileContext<'a> {
    /// Creates a new context.
    #[must_use]
    pub fn new(meta: &'a FileMeta, source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            meta,
            source,
            tokens,
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.meta.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection() {
        assert!(FileMeta::new("src/app.js").is_javascript());
        assert!(FileMeta::new("src/App.JSX").is_javascript());
        assert!(FileMeta::new("lib/util.mjs").is_javascript());
        assert!(!FileMeta::new("style.css").is_javascript());
        assert!(!FileMeta::new("Makefile").is_javascript());
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(FileMeta::new("a.JS").extension, "js");
        assert_eq!(FileMeta::new("noext").extension, "");
    }
}
