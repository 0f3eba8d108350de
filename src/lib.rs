//! bamsieve: composable predicate engine for alignment records
//!
//! # Overview
//!
//! bamsieve accepts or rejects alignment records during a scan. A filter
//! tree is built once from leaves (quality thresholds, flag checks, field
//! and tag comparisons, regular expressions) and boolean combinators, then
//! applied to millions of records in a hot loop.
//!
//! Two rules shape the design:
//!
//! - **Fail at build time, not mid-scan.** Field names, flag names,
//!   operators, and patterns are resolved and compiled when the filter is
//!   constructed. An unknown name or invalid pattern is a
//!   [`FilterError`]; a constructed filter can never fail.
//! - **Missing data rejects, it does not error.** Tags are optional and
//!   dynamically typed. A filter that expects an integer `NM` tag simply
//!   rejects a record where `NM` is absent or a string.
//!
//! ## Quick Start
//!
//! ```
//! use bamsieve::{
//!     AndFilter, CompareOp, Filter, FlagFilter, IntTagFilter, MappingQualityFilter, NotFilter,
//!     Record, TagValue,
//! };
//!
//! # fn main() -> bamsieve::Result<()> {
//! // mapq >= 30 AND NM <= 2 AND NOT duplicate
//! let filter = AndFilter::new(
//!     AndFilter::new(
//!         MappingQualityFilter::new(30),
//!         IntTagFilter::new("NM", CompareOp::Le, 2)?,
//!     ),
//!     NotFilter::new(FlagFilter::new("duplicate")?),
//! );
//!
//! let mut record = Record::new();
//! record.mapping_quality = 45;
//! record.tags.insert("NM".parse()?, TagValue::Int(1));
//! assert!(filter.accepts(&record));
//!
//! record.tags.insert("NM".parse()?, TagValue::Int(5));
//! assert!(!filter.accepts(&record));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`filter`]: the [`Filter`] trait, combinators, and all leaf filters
//! - [`record`]: the record accessor contract, flags, and tag values
//! - [`error`]: construction-time configuration errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod filter;
pub mod record;

pub use error::{FilterError, Result};
pub use filter::{
    AndFilter, BoxedFilter, CompareOp, Filter, FlagFilter, IntFieldFilter, IntTagFilter,
    MappingQualityFilter, NotFilter, NullFilter, OrFilter, ReadGroupFilter, RegexFieldFilter,
    RegexTagFilter, StrFieldFilter, StrTagFilter, ValidFilter,
};
pub use record::{Flag, Flags, Record, RecordRead, TagName, TagValue, Tags};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
