//! Source file discovery.
//!
//! Walks the lint root with gitignore awareness, keeps JavaScript
//! sources, and filters user-supplied exclude globs. The core engine
//! never touches the filesystem; everything here stays in the CLI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extensions picked up by the walk.
const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx"];

/// Discovers JavaScript files under `root`, honoring `.gitignore` and the
/// given exclude globs. Results are sorted for deterministic output.
pub fn discover(root: &Path, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = compile_patterns(excludes)?;

    let mut files = Vec::new();
    for entry in ignore::WalkBuilder::new(root).build() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if !is_javascript(&path) {
            continue;
        }
        if is_excluded(&path, &patterns) {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

fn compile_patterns(excludes: &[String]) -> Result<Vec<glob::Pattern>> {
    excludes
        .iter()
        .map(|p| {
            glob::Pattern::new(p).with_context(|| format!("invalid exclude pattern: {p}"))
        })
        .collect()
}

fn is_javascript(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| JS_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}

fn is_excluded(path: &Path, patterns: &[glob::Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| {
        p.matches(&path_str)
            || path
                .components()
                .any(|c| p.matches(&c.as_os_str().to_string_lossy()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "var a = 1;\n").unwrap();
    }

    #[test]
    fn finds_javascript_files_recursively() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("app.js"));
        touch(&tmp.path().join("src/util.mjs"));
        touch(&tmp.path().join("src/ui/App.jsx"));
        touch(&tmp.path().join("README.md"));

        let files = discover(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| is_javascript(f)));
    }

    #[test]
    fn results_are_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("z.js"));
        touch(&tmp.path().join("a.js"));

        let files = discover(tmp.path(), &[]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.js", "z.js"]);
    }

    #[test]
    fn exclude_pattern_drops_directory() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("src/app.js"));
        touch(&tmp.path().join("vendor/lib.js"));

        let files = discover(tmp.path(), &["vendor".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/app.js"));
    }

    #[test]
    fn invalid_exclude_pattern_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(discover(tmp.path(), &["[".to_string()]).is_err());
    }

    #[test]
    fn gitignored_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        // A .git directory makes the walker treat this as a repository root.
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".gitignore"), "dist/\n").unwrap();
        touch(&tmp.path().join("src/app.js"));
        touch(&tmp.path().join("dist/bundle.js"));

        let files = discover(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/app.js"));
    }
}
