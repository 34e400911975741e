//! Source-tree scanning helpers for the layering tests.

use std::fs;
use std::path::{Path, PathBuf};

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();

        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().map(|ext| ext == "rs").unwrap_or(false) {
            out.push(path);
        }
    }
}

/// Lines under `relative_dir` containing any of `patterns`, rendered as
/// `path:line: text` so assertion failures point at the offender.
pub fn forbidden_lines(relative_dir: &str, patterns: &[&str]) -> Vec<String> {
    let root = crate_root();
    let mut files = Vec::new();
    rust_sources(&root.join(relative_dir), &mut files);
    files.sort();

    let mut hits = Vec::new();
    for file in &files {
        let source = fs::read_to_string(file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));

        for (index, line) in source.lines().enumerate() {
            if patterns.iter().any(|needle| line.contains(needle)) {
                let shown = file.strip_prefix(&root).unwrap_or(file);
                hits.push(format!("{}:{}: {}", shown.display(), index + 1, line.trim()));
            }
        }
    }

    hits
}

pub fn read_source(relative_path: &str) -> String {
    let path = crate_root().join(relative_path);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}
