//! Regular-expression filters.
//!
//! Patterns compile exactly once, when the filter is built; an invalid
//! pattern is a construction error, never an evaluation one. Matching is an
//! unanchored search, so a pattern matches anywhere in the value unless it
//! carries its own `^`/`$` anchors. Compiled patterns hold no per-match
//! state, and one filter tree may evaluate on many threads at once.

use regex::Regex;

use super::fields::{str_selector, StrSelector};
use super::Filter;
use crate::error::Result;
use crate::record::{RecordRead, TagName};

/// Matches a pattern against a fixed string field of the record.
#[derive(Debug, Clone)]
pub struct RegexFieldFilter<R: RecordRead> {
    select: StrSelector<R>,
    pattern: Regex,
}

impl<R: RecordRead> RegexFieldFilter<R> {
    /// Compile `pattern` and bind `field`.
    ///
    /// Both failure modes, an unknown field name and invalid pattern
    /// syntax, surface here rather than mid-scan.
    pub fn new(field: &str, pattern: &str) -> Result<Self> {
        Ok(Self {
            select: str_selector(field)?,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl<R: RecordRead> Filter<R> for RegexFieldFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.pattern.is_match((self.select)(record))
    }
}

/// Matches a pattern against a string-valued tag.
///
/// A tag that is absent or not string-typed rejects.
#[derive(Debug, Clone)]
pub struct RegexTagFilter {
    tag: TagName,
    pattern: Regex,
}

impl RegexTagFilter {
    /// Compile `pattern` and bind `tag`.
    pub fn new(tag: &str, pattern: &str) -> Result<Self> {
        Ok(Self {
            tag: tag.parse()?,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl<R: RecordRead> Filter<R> for RegexTagFilter {
    fn accepts(&self, record: &R) -> bool {
        match record.tag(self.tag).as_str() {
            Some(value) => self.pattern.is_match(value),
            None => false,
        }
    }
}
