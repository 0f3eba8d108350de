//! Construction-time resolution of field names.
//!
//! A field name is resolved exactly once, when the filter is built, into a
//! bound accessor over the record type. Evaluation is then a single indirect
//! call with no name dispatch, and an unrecognized name fails the build
//! instead of a running scan.

use crate::error::{FilterError, Result};
use crate::record::RecordRead;

/// Bound accessor for a fixed integer field.
pub(crate) type IntSelector<R> = fn(&R) -> i64;

/// Bound accessor for a fixed string field.
pub(crate) type StrSelector<R> = for<'a> fn(&'a R) -> &'a str;

/// Resolve an integer field name into a bound accessor.
pub(crate) fn int_selector<R: RecordRead>(name: &str) -> Result<IntSelector<R>> {
    Ok(match name {
        "ref_id" => |r: &R| r.ref_id(),
        "position" => |r: &R| r.position(),
        "mapping_quality" => |r: &R| i64::from(r.mapping_quality()),
        "sequence_length" => |r: &R| r.sequence_length(),
        "mate_ref_id" => |r: &R| r.mate_ref_id(),
        "mate_position" => |r: &R| r.mate_position(),
        "template_length" => |r: &R| r.template_length(),
        other => return Err(FilterError::UnknownIntegerField(other.to_string())),
    })
}

/// Resolve a string field name into a bound accessor.
pub(crate) fn str_selector<R: RecordRead>(name: &str) -> Result<StrSelector<R>> {
    Ok(match name {
        "read_name" => |r: &R| r.read_name(),
        other => return Err(FilterError::UnknownStringField(other.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_every_integer_field_resolves() {
        let mut record = Record::new();
        record.ref_id = 1;
        record.position = 2;
        record.mapping_quality = 3;
        record.sequence_length = 4;
        record.mate_ref_id = 5;
        record.mate_position = 6;
        record.template_length = 7;

        for (name, expected) in [
            ("ref_id", 1),
            ("position", 2),
            ("mapping_quality", 3),
            ("sequence_length", 4),
            ("mate_ref_id", 5),
            ("mate_position", 6),
            ("template_length", 7),
        ] {
            let select = int_selector::<Record>(name).unwrap();
            assert_eq!(select(&record), expected, "field {name}");
        }
    }

    #[test]
    fn test_read_name_resolves() {
        let mut record = Record::new();
        record.name = "read1".to_string();

        let select = str_selector::<Record>("read_name").unwrap();
        assert_eq!(select(&record), "read1");
    }

    #[test]
    fn test_unknown_names_fail_resolution() {
        assert!(matches!(
            int_selector::<Record>("nonexistent_field").unwrap_err(),
            FilterError::UnknownIntegerField(name) if name == "nonexistent_field"
        ));
        assert!(matches!(
            str_selector::<Record>("position").unwrap_err(),
            FilterError::UnknownStringField(_)
        ));
    }
}
