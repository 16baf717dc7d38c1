//! Bounded Text Extraction
//!
//! Pulls the region between two markers out of a larger document,
//! e.g. the body of a Project Gutenberg text without its license boilerplate.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Bound, TextError, TextResult};

/// Slice `content` from the first `start` marker through the end of the
/// first `end` marker (inclusive).
///
/// Both markers are searched from the beginning of `content`. If the end
/// marker occurs before the start marker the region is empty.
pub fn extract_within_bounds<'a>(content: &'a str, start: &str, end: &str) -> TextResult<&'a str> {
    let start_idx = content.find(start).ok_or_else(|| TextError::BoundNotFound {
        which: Bound::Start,
        marker: start.to_string(),
    })?;
    let end_idx = content.find(end).ok_or_else(|| TextError::BoundNotFound {
        which: Bound::End,
        marker: end.to_string(),
    })?;

    let stop = (end_idx + end.len()).max(start_idx);
    Ok(&content[start_idx..stop])
}

/// Read `path` and extract the region between `start` and `end`
pub fn extract_file_within_bounds(
    path: impl AsRef<Path>,
    start: &str,
    end: &str,
) -> TextResult<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let region = extract_within_bounds(&content, start, end)?;
    debug!(
        path = %path.display(),
        total = content.len(),
        extracted = region.len(),
        "Extracted bounded region"
    );
    Ok(region.to_string())
}
