//! Langgen - translation dictionary generator for Laravel projects
//!
//! Langgen scans Blade views and PHP sources for translation calls
//! (`__('key')`, `trans('key')`, `@lang('key')`) and writes one dictionary per
//! locale, either as a PHP array file or as a JSON object. Existing
//! dictionaries are reconciled instead of overwritten, so translated values
//! survive a rerun.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, status output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, reconciliation and dictionary encodings

pub mod cli;
pub mod config;
pub mod core;
