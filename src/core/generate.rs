//! The generate pipeline: scan → extract → aggregate → reconcile → write.
//!
//! Roots are scanned one after another, then every configured locale is
//! reconciled and written in turn. Nothing runs concurrently and no state is
//! shared between locales.

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;

use super::{
    error::{GenerateError, GenerateResult},
    extract::extract_keys,
    file_scanner::{compile_ignores, scan_files},
    format::{FileType, json, php},
    key_path::{build_tree, key_space},
    key_set::{ExtractedKeySet, ScanStats, SourceCategory},
    reconcile::{MergeStrategy, merge, sync},
    tree::DictionaryTree,
};

/// Fully resolved settings of one generate run.
///
/// Relative directories are resolved against `root_dir`.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub root_dir: PathBuf,
    pub languages: Vec<String>,
    pub file_type: FileType,
    pub file_name: String,
    pub short_keys: bool,
    pub strategy: MergeStrategy,
    pub sync: bool,
    pub lang_root: PathBuf,
    pub views_root: PathBuf,
    pub app_root: PathBuf,
    /// Scan only this directory instead of the views and app roots.
    pub custom_path: Option<PathBuf>,
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// Callbacks fired while the pipeline runs. All of them default to no-ops.
pub trait Progress {
    fn root_started(&mut self, _category: SourceCategory, _dir: &Path) {}

    fn root_finished(&mut self, _category: SourceCategory, _stats: &ScanStats) {}

    fn keys_collected(&mut self, _total: usize) {}

    fn locale_written(&mut self, _file: &GeneratedFile) {}
}

impl Progress for () {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub locale: String,
    pub path: PathBuf,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct GenerateOutput {
    pub keys: ExtractedKeySet,
    pub stats: ScanStats,
    pub skipped_count: usize,
    pub files: Vec<GeneratedFile>,
}

/// Keys collected from all scanned roots.
#[derive(Debug, Default)]
pub struct KeyScan {
    pub keys: ExtractedKeySet,
    pub stats: ScanStats,
    pub skipped_count: usize,
}

pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom path is missing, a custom scan finds no
    /// keys, an existing dictionary cannot be parsed, or a file cannot be
    /// read or written.
    pub fn run(&self, progress: &mut impl Progress) -> GenerateResult<GenerateOutput> {
        let scan = self.collect_keys(progress)?;
        progress.keys_collected(scan.keys.len());

        if scan.keys.is_empty()
            && let Some(custom) = &self.options.custom_path
        {
            return Err(GenerateError::EmptyResult {
                path: self.resolve(custom),
            });
        }

        let mut files = Vec::with_capacity(self.options.languages.len());
        for locale in &self.options.languages {
            let file = self.generate_locale(&scan.keys, locale)?;
            progress.locale_written(&file);
            files.push(file);
        }

        Ok(GenerateOutput {
            keys: scan.keys,
            stats: scan.stats,
            skipped_count: scan.skipped_count,
            files,
        })
    }

    /// Roots to scan, in order.
    ///
    /// A custom path replaces the default views and app roots entirely.
    pub fn scan_roots(&self) -> GenerateResult<Vec<(SourceCategory, PathBuf)>> {
        match &self.options.custom_path {
            Some(custom) => {
                let dir = self.resolve(custom);
                if !dir.is_dir() {
                    return Err(GenerateError::ScanInput { path: dir });
                }
                Ok(vec![(SourceCategory::Custom, dir)])
            }
            None => Ok(vec![
                (SourceCategory::Views, self.resolve(&self.options.views_root)),
                (SourceCategory::App, self.resolve(&self.options.app_root)),
            ]),
        }
    }

    /// Scan every root and aggregate the keys found.
    pub fn collect_keys(&self, progress: &mut impl Progress) -> GenerateResult<KeyScan> {
        let roots = self.scan_roots()?;
        let ignores = compile_ignores(&self.options.ignores, self.options.verbose);
        let mut scan = KeyScan::default();

        for (category, dir) in roots {
            progress.root_started(category, &dir);

            if !dir.is_dir() {
                if self.options.verbose {
                    eprintln!(
                        "{} Scan root does not exist: {}",
                        "warning:".bold().yellow(),
                        dir.display()
                    );
                }
                progress.root_finished(category, &scan.stats);
                continue;
            }

            let result = scan_files(&dir, &ignores, self.options.verbose);
            scan.skipped_count += result.skipped_count;

            for file in &result.files {
                self.scan_file(category, file, &mut scan);
            }

            progress.root_finished(category, &scan.stats);
        }

        Ok(scan)
    }

    /// Extract the keys of one file into `scan`.
    ///
    /// A file that cannot be read is skipped and counted like any other
    /// inaccessible entry.
    fn scan_file(&self, category: SourceCategory, file: &Path, scan: &mut KeyScan) {
        let bytes = match fs::read(file) {
            Ok(bytes) => bytes,
            Err(e) => {
                scan.skipped_count += 1;
                if self.options.verbose {
                    eprintln!(
                        "{} Cannot read file {}: {}",
                        "warning:".bold().yellow(),
                        file.display(),
                        e
                    );
                }
                return;
            }
        };

        let found = extract_keys(&String::from_utf8_lossy(&bytes));
        scan.stats.record(category, found.len());
        scan.keys.union(found);
    }

    /// Reconcile and write the dictionary of one locale.
    pub fn generate_locale(
        &self,
        keys: &ExtractedKeySet,
        locale: &str,
    ) -> GenerateResult<GeneratedFile> {
        let options = &self.options;
        let file_type = options.file_type;
        let path = file_type.dictionary_path(
            &self.resolve(&options.lang_root),
            locale,
            &options.file_name,
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let expand = file_type.supports_nesting() && options.short_keys;
        let incoming = build_tree(keys, expand);
        let existing = if options.strategy.reads_existing() {
            load_existing(file_type, &path)?
        } else {
            DictionaryTree::new()
        };

        let mut tree = merge(options.strategy, incoming, existing);
        if options.sync {
            tree = sync(tree, &key_space(keys));
        }

        write_dictionary(file_type, &path, &tree)?;

        Ok(GeneratedFile {
            locale: locale.to_string(),
            path,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.options.root_dir.join(path)
    }
}

/// Load the dictionary at `path`; a missing file is an empty dictionary.
pub fn load_existing(file_type: FileType, path: &Path) -> GenerateResult<DictionaryTree> {
    if !path.is_file() {
        return Ok(DictionaryTree::new());
    }

    let bytes = fs::read(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    file_type
        .parse(&String::from_utf8_lossy(&bytes))
        .map_err(|source| GenerateError::ParseDecode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `tree` to `path` in the given encoding.
///
/// PHP dictionaries are first replaced by an empty document, so the file
/// stays loadable if the second write fails.
pub fn write_dictionary(
    file_type: FileType,
    path: &Path,
    tree: &DictionaryTree,
) -> GenerateResult<()> {
    let write = |content: &str| {
        fs::write(path, content).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })
    };

    match file_type {
        FileType::Array => {
            write(php::EMPTY_DOCUMENT)?;
            write(&php::render(tree))
        }
        FileType::Json => {
            let content = json::render(tree).map_err(|source| GenerateError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
            write(&content)
        }
    }
}
