// src/error.rs

use core::fmt;

/// Identifies which configuration period an [`EncodeError`] refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeriodField {
    Record,
    Report,
}

impl fmt::Display for PeriodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodField::Record => write!(f, "record"),
            PeriodField::Report => write!(f, "report"),
        }
    }
}

/// Validation failure raised when building or encoding a device configuration.
///
/// These are reported to the caller with the offending values so a host can
/// render a user-facing message. The encoder never clamps or silently adjusts
/// a value to make it fit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// A period (or its seconds-normalized value) does not fit in
    /// the device's 16-bit field. Valid input range is 1..=65535.
    #[error("{field} period value {value} is out of range (1-65535)")]
    OutOfRange { field: PeriodField, value: u32 },

    /// Raw-value mode: the device cannot report more often than it records.
    #[error("report period {report} cannot be shorter than record period {record}")]
    InvalidRatio { record: u16, report: u16 },

    /// Raw-value mode: the report period must be a whole multiple of the
    /// record period.
    #[error("report period {report} must be a multiple of record period {record}")]
    NotMultiple { record: u16, report: u16 },
}
