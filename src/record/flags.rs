//! SAM flag bits.
//!
//! Every alignment record carries a 16-bit flag word. Filters select flags
//! by name exactly once, at construction time; per-record evaluation is a
//! single mask test against the resolved bit.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// A single named flag bit of the SAM flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Flag {
    /// Template has multiple segments (0x1)
    Paired = 0x1,
    /// Each segment properly aligned (0x2)
    ProperPair = 0x2,
    /// Segment unmapped (0x4)
    Unmapped = 0x4,
    /// Next segment in the template unmapped (0x8)
    MateUnmapped = 0x8,
    /// Sequence reverse complemented (0x10)
    Reverse = 0x10,
    /// Next segment reverse complemented (0x20)
    MateReverse = 0x20,
    /// First segment in the template (0x40)
    FirstInTemplate = 0x40,
    /// Last segment in the template (0x80)
    LastInTemplate = 0x80,
    /// Secondary alignment (0x100)
    Secondary = 0x100,
    /// Failed platform or vendor quality checks (0x200)
    QcFail = 0x200,
    /// PCR or optical duplicate (0x400)
    Duplicate = 0x400,
    /// Supplementary alignment (0x800)
    Supplementary = 0x800,
}

impl Flag {
    /// Bit mask of this flag within the flag word.
    pub fn mask(self) -> u16 {
        self as u16
    }

    /// Name that selects this flag when building a `FlagFilter`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Paired => "paired",
            Self::ProperPair => "proper_pair",
            Self::Unmapped => "unmapped",
            Self::MateUnmapped => "mate_unmapped",
            Self::Reverse => "reverse",
            Self::MateReverse => "mate_reverse",
            Self::FirstInTemplate => "first_in_template",
            Self::LastInTemplate => "last_in_template",
            Self::Secondary => "secondary",
            Self::QcFail => "qc_fail",
            Self::Duplicate => "duplicate",
            Self::Supplementary => "supplementary",
        }
    }
}

impl FromStr for Flag {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "paired" => Self::Paired,
            "proper_pair" => Self::ProperPair,
            "unmapped" => Self::Unmapped,
            "mate_unmapped" => Self::MateUnmapped,
            "reverse" => Self::Reverse,
            "mate_reverse" => Self::MateReverse,
            "first_in_template" => Self::FirstInTemplate,
            "last_in_template" => Self::LastInTemplate,
            "secondary" => Self::Secondary,
            "qc_fail" => Self::QcFail,
            "duplicate" => Self::Duplicate,
            "supplementary" => Self::Supplementary,
            other => return Err(FilterError::UnknownFlag(other.to_string())),
        })
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The 16-bit flag word of an alignment record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u16);

impl Flags {
    /// Wrap a raw flag word.
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw flag word.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Check whether a flag bit is set.
    pub fn is_set(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Set a flag bit.
    pub fn set(&mut self, flag: Flag) {
        self.0 |= flag.mask();
    }

    /// Clear a flag bit.
    pub fn clear(&mut self, flag: Flag) {
        self.0 &= !flag.mask();
    }

    /// Check if the read is paired.
    pub fn is_paired(self) -> bool {
        self.is_set(Flag::Paired)
    }

    /// Check if the read is unmapped.
    pub fn is_unmapped(self) -> bool {
        self.is_set(Flag::Unmapped)
    }

    /// Check if the read is a reverse complement.
    pub fn is_reverse(self) -> bool {
        self.is_set(Flag::Reverse)
    }

    /// Check if the alignment is secondary.
    pub fn is_secondary(self) -> bool {
        self.is_set(Flag::Secondary)
    }

    /// Check if the read failed quality checks.
    pub fn is_qc_fail(self) -> bool {
        self.is_set(Flag::QcFail)
    }

    /// Check if the read is a PCR or optical duplicate.
    pub fn is_duplicate(self) -> bool {
        self.is_set(Flag::Duplicate)
    }

    /// Check if the alignment is supplementary.
    pub fn is_supplementary(self) -> bool {
        self.is_set(Flag::Supplementary)
    }

    /// Check if the mate is unmapped.
    pub fn is_mate_unmapped(self) -> bool {
        self.is_set(Flag::MateUnmapped)
    }
}

impl From<u16> for Flags {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
