//! Custom error types for the postcode-bundler crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal: the pipeline either produces a complete bundle or
/// nothing. There is no retry and no partial-output recovery.
#[derive(Debug, Error)]
pub enum BundleError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A row could not be scanned within the bytes it was given.
    #[error("Malformed row at input offset {offset}: {reason}")]
    MalformedRow { offset: usize, reason: &'static str },

    /// A latitude/longitude field did not parse as decimal text.
    #[error("Invalid coordinate at input offset {offset}: {text:?}")]
    InvalidCoordinate { offset: usize, text: String },

    /// A quantized grid index fell outside the compile-time known bounds.
    /// Downstream bit-widths are sized against those bounds, so the fixed
    /// quantization assumption no longer holds for this input.
    #[error("Grid {axis} {value} quantizes to index {index}, outside 0..={max}")]
    GridBounds {
        axis: &'static str,
        value: f64,
        index: i64,
        max: u32,
    },

    /// More distinct districts than the packed sector id can address.
    #[error("District count {count} exceeds the {max} addressable by the packed sector id")]
    DistrictOverflow { count: usize, max: usize },

    /// A sector holds more units than the 16-bit unit count field can record.
    #[error("Sector {packed_id:#06x} has {count} units, exceeding the u16 unit count field")]
    SectorOverflow { packed_id: u16, count: usize },
}

/// A convenience `Result` type alias using the crate's `BundleError` type.
pub type Result<T> = std::result::Result<T, BundleError>;
