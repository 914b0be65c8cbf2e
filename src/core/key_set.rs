//! Aggregation of keys discovered across many source files.

use std::fmt;

use indexmap::IndexMap;

/// The global, duplicate-collapsing set of keys found during one run.
///
/// Each key maps to a value that starts out empty. A key that is already
/// present keeps its value when it is discovered again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedKeySet {
    entries: IndexMap<String, String>,
}

impl ExtractedKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every discovered key that is not present yet.
    ///
    /// Returns the number of keys that were new.
    pub fn union<I>(&mut self, discovered: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.entries.len();
        for key in discovered {
            self.entries.entry(key).or_default();
        }
        self.entries.len() - before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<String> for ExtractedKeySet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = Self::new();
        set.union(iter);
        set
    }
}

/// Root directory a scanned file was discovered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCategory {
    Views,
    App,
    Custom,
}

impl SourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::Views => "views",
            SourceCategory::App => "app",
            SourceCategory::Custom => "custom path",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Files scanned and keys found for one category.
///
/// `keys` sums the distinct keys of every file, so a key used in two files
/// counts twice here while appearing once in the [`ExtractedKeySet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub files: usize,
    pub keys: usize,
}

/// Per-category counters accumulated during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub views: CategoryStats,
    pub app: CategoryStats,
    pub custom: CategoryStats,
}

impl ScanStats {
    pub fn record(&mut self, category: SourceCategory, key_count: usize) {
        let stats = self.get_mut(category);
        stats.files += 1;
        stats.keys += key_count;
    }

    pub fn get(&self, category: SourceCategory) -> CategoryStats {
        match category {
            SourceCategory::Views => self.views,
            SourceCategory::App => self.app,
            SourceCategory::Custom => self.custom,
        }
    }

    fn get_mut(&mut self, category: SourceCategory) -> &mut CategoryStats {
        match category {
            SourceCategory::Views => &mut self.views,
            SourceCategory::App => &mut self.app,
            SourceCategory::Custom => &mut self.custom,
        }
    }
}
