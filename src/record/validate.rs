//! Structural record validation.
//!
//! [`is_valid`] is the checker consumed by `ValidFilter`. It enforces the
//! structural constraints a decoder would reject a record for: sentinel
//! fields no lower than `-1`, a real reference id and position on mapped
//! records, and a read name within the encoding limit.

use crate::record::{Flag, Record};

/// Longest read name the BAM encoding can carry (255 bytes with the NUL).
const MAX_NAME_LEN: usize = 254;

/// Check a record for structural validity.
///
/// Pure and total: returns a boolean for every record, never panics.
pub fn is_valid(record: &Record) -> bool {
    if record.name.is_empty() || record.name.len() > MAX_NAME_LEN {
        return false;
    }
    if record.ref_id < -1
        || record.position < -1
        || record.mate_ref_id < -1
        || record.mate_position < -1
    {
        return false;
    }
    if record.sequence_length < 0 {
        return false;
    }
    // A mapped record must point at a real reference coordinate.
    if !record.flags.is_set(Flag::Unmapped) && (record.ref_id < 0 || record.position < 0) {
        return false;
    }
    true
}
