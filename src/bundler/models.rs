//! Data structures flowing through the encoding pipeline.

/// Small integer code assigned to a district string in first-seen order.
pub type DistrictCode = u16;

/// Width of a district code string, in the extract and in the bundle header.
pub const DISTRICT_LEN: usize = 4;

/// One parsed extract row. Ephemeral: consumed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostcodeRecord {
    pub district: DistrictCode,
    /// Sector digit, 0-9.
    pub sector: u8,
    /// Unit code derived from the two unit letters.
    pub unit_code: u16,
    pub latitude: f64,
    pub longitude: f64,
    /// Bytes this row consumed from the input, including the line break.
    pub row_len: usize,
}

/// A postcode unit quantized onto the grid. Owned by exactly one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub code: u16,
    pub lat_index: u32,
    pub lon_index: u32,
}

/// One (district, sector) group in input order.
///
/// Created by the aggregator when it observes a new (district, sector) pair;
/// its unit list is reordered in place by the sequencer, then immutable.
#[derive(Debug)]
pub struct Sector {
    pub district: DistrictCode,
    pub sector: u8,
    pub units: Vec<Unit>,
}

/// Summary counters for one encoding run.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodeStats {
    pub rows: u64,
    pub districts: usize,
    pub sectors: usize,
    pub units: u64,
    /// Units emitted as variable-length delta spans.
    pub delta_spans: u64,
    /// Units emitted as absolute spans.
    pub absolute_spans: u64,
    pub output_len: usize,
}
