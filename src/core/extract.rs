//! Lexical extraction of translation keys.
//!
//! Keys are found by pattern, not by parsing: any `__('key')`, `trans('key')`
//! or `@lang('key')` substring counts, optionally followed by an array of
//! replacements (`trans('key', ['name' => $name])`). Matches inside comments
//! or unrelated strings are reported too.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

static TRANSLATION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:@lang|trans|__)\('([^']*)'(?:,\s*\[.*?\])?\)").unwrap()
});

/// Extract the distinct translation keys referenced in `content`, in
/// first-seen order.
pub fn extract_keys(content: &str) -> IndexSet<String> {
    TRANSLATION_CALL_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
