//! Whitelist file loading: plain UTF-8 text, one category name per line,
//! blank lines ignored, entries trimmed, matched case-insensitively.

use crate::core::filter::CategoryFilter;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Load an explicitly requested whitelist. A missing file is a fatal
/// configuration error for this caller.
pub fn load_whitelist(path: &Path) -> AppResult<CategoryFilter> {
    if !path.exists() {
        return Err(AppError::Whitelist(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    Ok(CategoryFilter::from_names(content.lines()))
}

/// Load a config-mapped whitelist. A missing or unreadable file degrades
/// to no filter; the caller decides whether to warn.
pub fn load_optional(path: &Path) -> Option<CategoryFilter> {
    let content = fs::read_to_string(path).ok()?;
    let filter = CategoryFilter::from_names(content.lines());
    if filter.is_pass_all() {
        // an empty list file also means pass-all
        Some(CategoryFilter::pass_all())
    } else {
        Some(filter)
    }
}
