//! Fixed-offset row parsing for the postcode extract.

use log::trace;

use super::error::{BundleError, Result};
use super::models::{PostcodeRecord, DISTRICT_LEN};
use super::registry::DistrictRegistry;
use super::schema::RowSchema;

/// Parse one row starting at `offset`, or signal end of input.
///
/// Row structure (see [`RowSchema`]):
/// - 1 byte:  leading delimiter
/// - 4 bytes: district code, interned through the registry
/// - 1 byte:  sector digit
/// - 2 bytes: unit letters; the product of their alphabet offsets is the
///   unit code
/// - `filler_separators` separators to reach the latitude column
/// - latitude `,` longitude as decimal text, then a line break
///
/// Returns `Ok(None)` when fewer than the schema's minimum row length
/// remain: that is the benign end-of-stream condition, and any trailing
/// bytes below the threshold are deliberately left unread. Running out of
/// bytes after a row has started is a malformed-row error. The scan never
/// reads past `input`.
pub fn parse_row(
    input: &[u8],
    offset: usize,
    schema: &RowSchema,
    registry: &mut DistrictRegistry,
) -> Result<Option<PostcodeRecord>> {
    let row = &input[offset..];
    if row.len() < schema.min_row_len {
        return Ok(None);
    }

    if row[0] != schema.leading_delimiter {
        return Err(BundleError::MalformedRow {
            offset,
            reason: "leading delimiter does not match the row schema",
        });
    }

    let mut district = [0u8; DISTRICT_LEN];
    district.copy_from_slice(&row[1..1 + DISTRICT_LEN]);
    let district = registry.code_for(district);

    let sector = row[schema.sector_offset()].wrapping_sub(b'0');

    let unit = schema.unit_offset();
    let unit_code =
        (row[unit].wrapping_sub(b'A') as u16) * (row[unit + 1].wrapping_sub(b'A') as u16);

    // Skip the filler fields between the unit letters and the latitude column.
    let mut pos = schema.scan_offset();
    let mut separators = 0;
    while separators < schema.filler_separators {
        if pos >= row.len() {
            return Err(BundleError::MalformedRow {
                offset,
                reason: "row ended before the latitude column",
            });
        }
        if row[pos] == schema.separator {
            separators += 1;
        }
        pos += 1;
    }

    let (latitude, next) = scan_coordinate(row, pos, offset, schema.separator)?;
    let (longitude, mut pos) = scan_coordinate(row, next, offset, b'\n')?;

    // scan_coordinate leaves `pos` on the line break; consume it, tolerating
    // a CR before the LF.
    if row[pos] == b'\r' {
        pos += 1;
    }
    if pos < row.len() && row[pos] == b'\n' {
        pos += 1;
    }

    trace!(
        "row at {offset}: district={district} sector={sector} unit={unit_code} ({latitude}, {longitude})"
    );

    Ok(Some(PostcodeRecord {
        district,
        sector,
        unit_code,
        latitude,
        longitude,
        row_len: pos,
    }))
}

/// Scan a decimal coordinate field ending at `terminator`.
///
/// For a comma terminator the returned position is past the comma; for a
/// line-break terminator it is left on the `\r`/`\n` byte. Non-numeric text
/// is a fatal parse error, never a silent default.
fn scan_coordinate(
    row: &[u8],
    start: usize,
    row_offset: usize,
    terminator: u8,
) -> Result<(f64, usize)> {
    let mut end = start;
    loop {
        if end >= row.len() {
            return Err(BundleError::MalformedRow {
                offset: row_offset,
                reason: "row ended inside a coordinate field",
            });
        }
        let byte = row[end];
        if byte == terminator || (terminator == b'\n' && byte == b'\r') {
            break;
        }
        end += 1;
    }

    let text = &row[start..end];
    let value = std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| BundleError::InvalidCoordinate {
            offset: row_offset + start,
            text: String::from_utf8_lossy(text).into_owned(),
        })?;

    let next = if terminator == b',' { end + 1 } else { end };
    Ok((value, next))
}
