//! Comparison filters over fixed fields and optional tags.
//!
//! All four filter kinds share one shape: a selector bound at construction
//! extracts the comparable quantity, and a [`CompareOp`] bound at the same
//! time decides acceptance. Field filters resolve the field name up front
//! and reject unknown names when the filter is built. Tag filters cannot
//! know up front whether a record carries the tag, so an absent or mistyped
//! tag value is a soft miss: the record is rejected, the scan continues.

use std::fmt;
use std::str::FromStr;

use super::fields::{int_selector, str_selector, IntSelector, StrSelector};
use super::Filter;
use crate::error::{FilterError, Result};
use crate::record::{RecordRead, TagName, TagValue};

/// Comparison operator bound into a filter at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Apply the operator to two values of an ordered type.
    pub fn compare<T: PartialOrd>(self, left: T, right: T) -> bool {
        match self {
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Lt => left < right,
            Self::Le => left <= right,
            Self::Gt => left > right,
            Self::Ge => left >= right,
        }
    }

    /// Token used for this operator in textual filter specifications.
    pub fn token(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "==" => Self::Eq,
            "!=" => Self::Ne,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            other => return Err(FilterError::UnknownOperator(other.to_string())),
        })
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Compares a fixed integer field of the record against a constant.
#[derive(Debug, Clone, Copy)]
pub struct IntFieldFilter<R: RecordRead> {
    select: IntSelector<R>,
    op: CompareOp,
    value: i64,
}

impl<R: RecordRead> IntFieldFilter<R> {
    /// Bind `field` and `op`; an unknown field name fails here, never
    /// during a scan.
    pub fn new(field: &str, op: CompareOp, value: i64) -> Result<Self> {
        Ok(Self {
            select: int_selector(field)?,
            op,
            value,
        })
    }
}

impl<R: RecordRead> Filter<R> for IntFieldFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.op.compare((self.select)(record), self.value)
    }
}

/// Compares a fixed string field of the record against a constant.
#[derive(Debug, Clone)]
pub struct StrFieldFilter<R: RecordRead> {
    select: StrSelector<R>,
    op: CompareOp,
    value: String,
}

impl<R: RecordRead> StrFieldFilter<R> {
    /// Bind `field` and `op`; an unknown field name fails here.
    pub fn new(field: &str, op: CompareOp, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            select: str_selector(field)?,
            op,
            value: value.into(),
        })
    }
}

impl<R: RecordRead> Filter<R> for StrFieldFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.op.compare((self.select)(record), self.value.as_str())
    }
}

/// Compares an integer-valued tag against a constant.
///
/// An absent or string-typed tag rejects. An integer-typed tag compares in
/// the `i64` domain; a float-typed tag compares in `f64` with the filter
/// value cast, so exact equality of integers beyond 2^53 can be lost on the
/// float path.
#[derive(Debug, Clone, Copy)]
pub struct IntTagFilter {
    tag: TagName,
    op: CompareOp,
    value: i64,
}

impl IntTagFilter {
    /// Bind `tag` and `op`; a malformed tag name fails here.
    pub fn new(tag: &str, op: CompareOp, value: i64) -> Result<Self> {
        Ok(Self {
            tag: tag.parse()?,
            op,
            value,
        })
    }
}

impl<R: RecordRead> Filter<R> for IntTagFilter {
    fn accepts(&self, record: &R) -> bool {
        match record.tag(self.tag) {
            TagValue::Int(actual) => self.op.compare(*actual, self.value),
            TagValue::Float(actual) => self.op.compare(*actual, self.value as f64),
            TagValue::Absent | TagValue::Text(_) => false,
        }
    }
}

/// Compares a string-valued tag against a constant.
///
/// A tag that is absent or not string-typed rejects; otherwise the
/// comparison is lexical.
#[derive(Debug, Clone)]
pub struct StrTagFilter {
    tag: TagName,
    op: CompareOp,
    value: String,
}

impl StrTagFilter {
    /// Bind `tag` and `op`; a malformed tag name fails here.
    pub fn new(tag: &str, op: CompareOp, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            tag: tag.parse()?,
            op,
            value: value.into(),
        })
    }
}

impl<R: RecordRead> Filter<R> for StrTagFilter {
    fn accepts(&self, record: &R) -> bool {
        match record.tag(self.tag).as_str() {
            Some(actual) => self.op.compare(actual, self.value.as_str()),
            None => false,
        }
    }
}
