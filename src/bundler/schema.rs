//! Versioned row-schema descriptors for the fixed-offset extract layout.
//!
//! The byte offsets inside a row come from an external data release, not from
//! anything this crate controls. Modelling them as a named descriptor means a
//! future release with shifted columns fails fast with a diagnostic that
//! names the schema, instead of silently misparsing.

use super::models::DISTRICT_LEN;

/// Fixed-offset layout of one extract row.
///
/// Row structure:
/// - 1 byte:  leading field delimiter (opening quote of the postcode field)
/// - 4 bytes: district code (space-padded ASCII)
/// - 1 byte:  sector digit
/// - 2 bytes: unit letters
/// - then `filler_separators` separator bytes to reach the latitude column
/// - latitude and longitude as separator-delimited decimal text
/// - line break
#[derive(Debug, Clone, Copy)]
pub struct RowSchema {
    /// Name of the data release this layout was calibrated against.
    pub name: &'static str,
    /// Byte that opens every row (quote of the postcode field).
    pub leading_delimiter: u8,
    /// Field separator byte.
    pub separator: u8,
    /// Separators between the unit letters and the latitude column.
    pub filler_separators: usize,
    /// Fewer remaining bytes than this at a row boundary means end of input.
    pub min_row_len: usize,
}

/// Layout of the ONS postcode directory extract this bundler was built for.
pub const ONS_EXTRACT_V1: RowSchema = RowSchema {
    name: "ons-extract-v1",
    leading_delimiter: b'"',
    separator: b',',
    filler_separators: 41,
    min_row_len: 400,
};

impl RowSchema {
    /// Offset of the sector digit: past the delimiter and the district code.
    pub fn sector_offset(&self) -> usize {
        1 + DISTRICT_LEN
    }

    /// Offset of the two unit letters.
    pub fn unit_offset(&self) -> usize {
        self.sector_offset() + 1
    }

    /// Offset where the separator scan towards the latitude column starts.
    pub fn scan_offset(&self) -> usize {
        self.unit_offset() + 2
    }
}
