//! Alignment records and the read-only surface filters consume.
//!
//! Filters never depend on a concrete record layout. They see a record
//! through [`RecordRead`]: fixed integer fields, one string field, the flag
//! word, and tag lookup by two-character name. [`Record`] is the in-memory
//! implementation used throughout the crate; parsing a record out of a BAM
//! or SAM stream is a producer concern and lives elsewhere.

pub mod flags;
pub mod tags;
pub mod validate;

pub use flags::{Flag, Flags};
pub use tags::{TagName, TagValue, Tags};

/// Read-only record surface required by the filter engine.
///
/// Integer fields use `i64`, preserving BAM's `-1` sentinel for unmapped or
/// unavailable reference ids and positions. Tag lookup returns
/// [`TagValue::Absent`] for a tag the record does not carry, so evaluation
/// is total over any record content.
pub trait RecordRead {
    /// Reference sequence id (`-1` if unmapped).
    fn ref_id(&self) -> i64;

    /// 0-based leftmost mapping position (`-1` if unmapped).
    fn position(&self) -> i64;

    /// Mapping quality (255 = unavailable).
    fn mapping_quality(&self) -> u8;

    /// Length of the read sequence.
    fn sequence_length(&self) -> i64;

    /// Reference sequence id of the mate (`-1` if unavailable).
    fn mate_ref_id(&self) -> i64;

    /// 0-based position of the mate (`-1` if unavailable).
    fn mate_position(&self) -> i64;

    /// Signed observed template length.
    fn template_length(&self) -> i64;

    /// Read (query) name.
    fn read_name(&self) -> &str;

    /// The 16-bit flag word.
    fn flags(&self) -> Flags;

    /// Look up an optional tag by name.
    fn tag(&self, name: TagName) -> &TagValue;
}

/// An in-memory alignment record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Read name/query name
    pub name: String,
    /// Reference sequence id (`-1` if unmapped)
    pub ref_id: i64,
    /// 0-based leftmost mapping position (`-1` if unmapped)
    pub position: i64,
    /// Mapping quality (255 = unavailable)
    pub mapping_quality: u8,
    /// Bitwise flags (see SAM spec for flag meanings)
    pub flags: Flags,
    /// Reference sequence id of the mate (`-1` if unavailable)
    pub mate_ref_id: i64,
    /// 0-based position of the mate (`-1` if unavailable)
    pub mate_position: i64,
    /// Signed observed template length
    pub template_length: i64,
    /// Length of the read sequence
    pub sequence_length: i64,
    /// Optional tags
    pub tags: Tags,
}

impl Record {
    /// Create a new empty, unmapped record.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            ref_id: -1,
            position: -1,
            mapping_quality: 0,
            flags: Flags::default(),
            mate_ref_id: -1,
            mate_position: -1,
            template_length: 0,
            sequence_length: 0,
            tags: Tags::new(),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRead for Record {
    fn ref_id(&self) -> i64 {
        self.ref_id
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn mapping_quality(&self) -> u8 {
        self.mapping_quality
    }

    fn sequence_length(&self) -> i64 {
        self.sequence_length
    }

    fn mate_ref_id(&self) -> i64 {
        self.mate_ref_id
    }

    fn mate_position(&self) -> i64 {
        self.mate_position
    }

    fn template_length(&self) -> i64 {
        self.template_length
    }

    fn read_name(&self) -> &str {
        &self.name
    }

    fn flags(&self) -> Flags {
        self.flags
    }

    fn tag(&self, name: TagName) -> &TagValue {
        self.tags.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unmapped() {
        let record = Record::new();
        assert_eq!(record.ref_id, -1);
        assert_eq!(record.position, -1);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_accessor_surface() {
        let mut record = Record::new();
        record.name = "read1".to_string();
        record.ref_id = 2;
        record.position = 1000;
        record.mapping_quality = 37;
        record.sequence_length = 150;
        record.template_length = -320;
        record.flags.set(Flag::Paired);
        record
            .tags
            .insert("NM".parse().unwrap(), TagValue::Int(1));

        let r: &dyn RecordRead = &record;
        assert_eq!(r.read_name(), "read1");
        assert_eq!(r.ref_id(), 2);
        assert_eq!(r.position(), 1000);
        assert_eq!(r.mapping_quality(), 37);
        assert_eq!(r.sequence_length(), 150);
        assert_eq!(r.template_length(), -320);
        assert!(r.flags().is_paired());
        assert_eq!(r.tag("NM".parse().unwrap()).as_i64(), Some(1));
        assert!(matches!(r.tag("RG".parse().unwrap()), TagValue::Absent));
    }
}
