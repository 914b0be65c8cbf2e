//! Key extraction and dictionary reconciliation engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner`: walk the scan roots
//! 2. `extract`: find translation keys in each file
//! 3. `key_set`: aggregate keys and per-category counts
//! 4. `key_path` + `tree`: fold keys into a dictionary
//! 5. `reconcile`: merge with the dictionary already on disk
//! 6. `format`: render and parse the on-disk encodings
//!
//! `generate` ties the steps together.

pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod format;
pub mod generate;
pub mod key_path;
pub mod key_set;
pub mod reconcile;
pub mod tree;

pub use error::{DecodeError, GenerateError, GenerateResult};
pub use format::FileType;
pub use generate::{GenerateOptions, GenerateOutput, GeneratedFile, Generator, Progress};
pub use key_set::{CategoryStats, ExtractedKeySet, ScanStats, SourceCategory};
pub use reconcile::MergeStrategy;
pub use tree::{DictionaryNode, DictionaryTree};
