use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning one root directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Compile ignore patterns, dropping (and in verbose mode reporting) the
/// invalid ones.
pub fn compile_ignores(patterns: &[String], verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

/// Collect every regular file below `dir` in file-name order.
///
/// Entries matching one of `ignores` are left out. Entries that cannot be
/// accessed are skipped and counted.
pub fn scan_files(dir: &Path, ignores: &[Pattern], verbose: bool) -> ScanResult {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(dir).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|e| !is_ignored(e.path(), ignores)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() {
            result.files.push(entry.into_path());
        }
    }

    result
}

fn is_ignored(path: &Path, ignores: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    ignores.iter().any(|p| p.matches(&path_str))
}
