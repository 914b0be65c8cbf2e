//! On-disk encodings of translation dictionaries.
//!
//! - `php`: hierarchical PHP array literal (`lang/en/lang.php`)
//! - `json`: flat JSON object keyed by the full key (`lang/en.json`)

pub mod json;
pub mod php;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{error::DecodeError, tree::DictionaryTree};

/// Output encoding of generated dictionaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Nested PHP arrays, one file per locale directory.
    #[default]
    Array,
    /// One flat JSON object per locale.
    Json,
}

impl FileType {
    /// Location of the dictionary for `locale`.
    ///
    /// `file_name` is only used by the array encoding.
    pub fn dictionary_path(&self, lang_root: &Path, locale: &str, file_name: &str) -> PathBuf {
        match self {
            FileType::Array => lang_root.join(locale).join(format!("{}.php", file_name)),
            FileType::Json => lang_root.join(format!("{}.json", locale)),
        }
    }

    /// Whether dotted keys may be stored as nested levels.
    pub fn supports_nesting(&self) -> bool {
        matches!(self, FileType::Array)
    }

    pub fn parse(&self, content: &str) -> Result<DictionaryTree, DecodeError> {
        match self {
            FileType::Array => php::parse(content),
            FileType::Json => json::parse(content),
        }
    }
}
