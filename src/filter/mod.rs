//! Composable record predicates.
//!
//! A filter tree is built once, up front; construction is the only place a
//! [`FilterError`](crate::FilterError) can surface. Evaluation then runs in
//! the hot loop of a scan: [`Filter::accepts`] is pure, synchronous, and
//! total, so a shared tree may be evaluated concurrently from many workers.
//!
//! Leaves read the record through [`RecordRead`]; combinators apply
//! short-circuiting boolean algebra over their children.
//!
//! # Examples
//!
//! ```
//! use bamsieve::{AndFilter, Filter, FlagFilter, MappingQualityFilter, Record};
//!
//! # fn main() -> bamsieve::Result<()> {
//! // Keep confidently mapped, paired reads.
//! let filter = AndFilter::new(MappingQualityFilter::new(30), FlagFilter::new("paired")?);
//!
//! let mut record = Record::new();
//! record.mapping_quality = 42;
//! record.flags.set(bamsieve::Flag::Paired);
//! assert!(filter.accepts(&record));
//!
//! record.mapping_quality = 7;
//! assert!(!filter.accepts(&record));
//! # Ok(())
//! # }
//! ```

pub mod compare;
mod fields;
pub mod regex;

pub use compare::{CompareOp, IntFieldFilter, IntTagFilter, StrFieldFilter, StrTagFilter};
pub use self::regex::{RegexFieldFilter, RegexTagFilter};

use crate::error::Result;
use crate::record::{Flag, RecordRead, TagName};

/// A pure predicate over alignment records.
///
/// Implementations hold no per-call state and perform no I/O, so one filter
/// value can serve any number of threads at once.
pub trait Filter<R: RecordRead>: Send + Sync {
    /// Decide whether `record` passes this filter.
    fn accepts(&self, record: &R) -> bool;
}

/// Owned, type-erased filter; the unit combinators compose.
pub type BoxedFilter<R> = Box<dyn Filter<R>>;

impl<R: RecordRead> Filter<R> for BoxedFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.as_ref().accepts(record)
    }
}

/// Logical conjunction of two filters.
///
/// The right child is not evaluated when the left one rejects.
pub struct AndFilter<R: RecordRead> {
    left: BoxedFilter<R>,
    right: BoxedFilter<R>,
}

impl<R: RecordRead> AndFilter<R> {
    /// Combine two filters; a record must pass both.
    pub fn new(left: impl Filter<R> + 'static, right: impl Filter<R> + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl<R: RecordRead> Filter<R> for AndFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.left.accepts(record) && self.right.accepts(record)
    }
}

/// Logical disjunction of two filters.
///
/// The right child is not evaluated when the left one accepts.
pub struct OrFilter<R: RecordRead> {
    left: BoxedFilter<R>,
    right: BoxedFilter<R>,
}

impl<R: RecordRead> OrFilter<R> {
    /// Combine two filters; a record must pass at least one.
    pub fn new(left: impl Filter<R> + 'static, right: impl Filter<R> + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl<R: RecordRead> Filter<R> for OrFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        self.left.accepts(record) || self.right.accepts(record)
    }
}

/// Logical negation of a filter.
pub struct NotFilter<R: RecordRead> {
    inner: BoxedFilter<R>,
}

impl<R: RecordRead> NotFilter<R> {
    /// Invert a filter's decision.
    pub fn new(inner: impl Filter<R> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<R: RecordRead> Filter<R> for NotFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        !self.inner.accepts(record)
    }
}

/// Accepts every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFilter;

impl<R: RecordRead> Filter<R> for NullFilter {
    fn accepts(&self, _record: &R) -> bool {
        true
    }
}

/// Accepts records whose mapping quality reaches a minimum.
#[derive(Debug, Clone, Copy)]
pub struct MappingQualityFilter {
    min: u8,
}

impl MappingQualityFilter {
    /// Accept records with `mapping_quality >= min`.
    pub fn new(min: u8) -> Self {
        Self { min }
    }
}

impl<R: RecordRead> Filter<R> for MappingQualityFilter {
    fn accepts(&self, record: &R) -> bool {
        record.mapping_quality() >= self.min
    }
}

/// Accepts records belonging to a read group.
///
/// The `RG` tag must be string-typed and equal the configured name exactly
/// (case-sensitive, no trimming). A missing or non-string `RG` tag rejects.
#[derive(Debug, Clone)]
pub struct ReadGroupFilter {
    name: String,
}

/// Tag under which the read group is stored.
const READ_GROUP_TAG: TagName = TagName::new(*b"RG");

impl ReadGroupFilter {
    /// Accept records whose `RG` tag equals `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: RecordRead> Filter<R> for ReadGroupFilter {
    fn accepts(&self, record: &R) -> bool {
        match record.tag(READ_GROUP_TAG).as_str() {
            Some(group) => group == self.name,
            None => false,
        }
    }
}

/// Accepts records a validity checker reports as valid.
///
/// The checker is supplied at construction and called verbatim; no validity
/// logic lives in the filter itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidFilter<R> {
    check: fn(&R) -> bool,
}

impl<R: RecordRead> ValidFilter<R> {
    /// Delegate acceptance to `check`.
    pub fn new(check: fn(&R) -> bool) -> Self {
        Self { check }
    }
}

impl<R: RecordRead> Filter<R> for ValidFilter<R> {
    fn accepts(&self, record: &R) -> bool {
        (self.check)(record)
    }
}

/// Accepts records with a named flag set.
#[derive(Debug, Clone, Copy)]
pub struct FlagFilter {
    flag: Flag,
}

impl FlagFilter {
    /// Resolve `name` against the fixed flag set.
    ///
    /// An unrecognized name fails here, never during a scan.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            flag: name.parse()?,
        })
    }

    /// Build from an already resolved flag.
    pub fn from_flag(flag: Flag) -> Self {
        Self { flag }
    }
}

impl<R: RecordRead> Filter<R> for FlagFilter {
    fn accepts(&self, record: &R) -> bool {
        record.flags().is_set(self.flag)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::FilterError;
    use crate::record::{validate, Record, TagValue};

    /// Test double with a fixed verdict that counts evaluations.
    struct Probe {
        verdict: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Probe {
        fn new(verdict: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    verdict,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl Filter<Record> for Probe {
        fn accepts(&self, _record: &Record) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.verdict
        }
    }

    #[test]
    fn test_null_accepts_everything() {
        assert!(NullFilter.accepts(&Record::new()));
    }

    #[test]
    fn test_combinator_truth_tables() {
        let record = Record::new();
        for a in [false, true] {
            for b in [false, true] {
                let (fa, _) = Probe::new(a);
                let (fb, _) = Probe::new(b);
                assert_eq!(AndFilter::new(fa, fb).accepts(&record), a && b);

                let (fa, _) = Probe::new(a);
                let (fb, _) = Probe::new(b);
                assert_eq!(OrFilter::new(fa, fb).accepts(&record), a || b);
            }
            let (fa, _) = Probe::new(a);
            assert_eq!(NotFilter::new(fa).accepts(&record), !a);
        }
    }

    #[test]
    fn test_and_short_circuits_on_reject() {
        let (left, _) = Probe::new(false);
        let (right, right_calls) = Probe::new(true);
        let filter = AndFilter::new(left, right);

        assert!(!filter.accepts(&Record::new()));
        assert_eq!(right_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_or_short_circuits_on_accept() {
        let (left, _) = Probe::new(true);
        let (right, right_calls) = Probe::new(false);
        let filter = OrFilter::new(left, right);

        assert!(filter.accepts(&Record::new()));
        assert_eq!(right_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_mapping_quality_boundary() {
        let filter = MappingQualityFilter::new(30);
        let mut record = Record::new();

        record.mapping_quality = 30;
        assert!(filter.accepts(&record));
        record.mapping_quality = 29;
        assert!(!filter.accepts(&record));
        record.mapping_quality = 255;
        assert!(filter.accepts(&record));
    }

    #[test]
    fn test_read_group_exact_match() {
        let filter = ReadGroupFilter::new("GroupA");
        let mut record = Record::new();

        record
            .tags
            .insert("RG".parse().unwrap(), TagValue::Text("GroupA".to_string()));
        assert!(filter.accepts(&record));

        record
            .tags
            .insert("RG".parse().unwrap(), TagValue::Text("groupa".to_string()));
        assert!(!filter.accepts(&record));

        record
            .tags
            .insert("RG".parse().unwrap(), TagValue::Text("GroupA ".to_string()));
        assert!(!filter.accepts(&record));
    }

    #[test]
    fn test_read_group_soft_misses() {
        let filter = ReadGroupFilter::new("GroupA");

        // No RG tag at all.
        assert!(!filter.accepts(&Record::new()));

        // RG tag of the wrong type.
        let mut record = Record::new();
        record.tags.insert("RG".parse().unwrap(), TagValue::Int(7));
        assert!(!filter.accepts(&record));
    }

    #[test]
    fn test_flag_filter_resolves_at_construction() {
        let filter = FlagFilter::new("duplicate").unwrap();
        let mut record = Record::new();

        assert!(!filter.accepts(&record));
        record.flags.set(Flag::Duplicate);
        assert!(filter.accepts(&record));
    }

    #[test]
    fn test_unknown_flag_name_fails_construction() {
        let err = FlagFilter::new("nonexistent_flag").unwrap_err();
        assert!(matches!(err, FilterError::UnknownFlag(_)));
    }

    #[test]
    fn test_valid_filter_delegates() {
        let filter = ValidFilter::new(validate::is_valid);
        let mut record = Record::new();
        record.name = "read1".to_string();
        record.ref_id = 0;
        record.position = 50;

        assert!(filter.accepts(&record));
        record.name.clear();
        assert!(!filter.accepts(&record));

        // The checker is used verbatim, whatever it is.
        let reject_all = ValidFilter::new(|_: &Record| false);
        assert!(!reject_all.accepts(&Record::new()));
    }

    #[test]
    fn test_nested_tree_evaluates_root_to_leaf() {
        let mut record = Record::new();
        record.mapping_quality = 40;
        record.flags.set(Flag::Paired);

        // (mapq >= 30 AND paired) AND NOT duplicate
        let tree = AndFilter::new(
            AndFilter::new(
                MappingQualityFilter::new(30),
                FlagFilter::from_flag(Flag::Paired),
            ),
            NotFilter::new(FlagFilter::from_flag(Flag::Duplicate)),
        );
        assert!(tree.accepts(&record));

        record.flags.set(Flag::Duplicate);
        assert!(!tree.accepts(&record));
    }
}
