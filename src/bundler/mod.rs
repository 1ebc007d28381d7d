//! Core encoding pipeline.

pub mod delta;
pub mod error;
pub mod grid;
pub mod models;
pub mod schema;

mod aggregate;
mod parser;
mod registry;
mod sequence;
mod serializer;

use log::info;

use aggregate::SectorAggregator;
use grid::GridQuantizer;
use models::{EncodeStats, Unit};
use registry::DistrictRegistry;
use schema::{RowSchema, ONS_EXTRACT_V1};

pub use error::{BundleError, Result};
pub use serializer::{packed_id, MAX_DISTRICTS, SECTOR_BITS};

/// A finished encoding run: the bundle bytes and the run's counters.
#[derive(Debug)]
pub struct EncodedBundle {
    pub bytes: Vec<u8>,
    pub stats: EncodeStats,
}

/// The encoding engine: one whole-buffer pass from extract to bundle.
///
/// Parse and aggregate in a single linear sweep, reorder each sector's
/// units, then serialize. The district registry, the quantizer, and the
/// sector list are owned here for the duration of the run and dropped (or
/// handed back) at the end; nothing is shared or static. Any error aborts
/// the run: a bundle is either complete or not produced.
#[derive(Debug)]
pub struct BundleEncoder {
    schema: RowSchema,
}

impl Default for BundleEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleEncoder {
    /// An encoder for the current extract release layout.
    pub fn new() -> Self {
        Self::with_schema(ONS_EXTRACT_V1)
    }

    /// An encoder for an explicit row schema.
    pub fn with_schema(schema: RowSchema) -> Self {
        Self { schema }
    }

    /// Encode one extract into a bundle.
    pub fn encode(&self, input: &[u8]) -> Result<EncodedBundle> {
        info!(
            "encoding {} bytes against row schema {}",
            input.len(),
            self.schema.name
        );

        let mut registry = DistrictRegistry::new();
        let mut quantizer = GridQuantizer::new();
        let mut aggregator = SectorAggregator::new();
        let mut stats = EncodeStats::default();

        let mut offset = 0;
        while let Some(record) = parser::parse_row(input, offset, &self.schema, &mut registry)? {
            let (lat_index, lon_index) = quantizer.quantize(record.latitude, record.longitude)?;
            aggregator.push(
                record.district,
                record.sector,
                Unit {
                    code: record.unit_code,
                    lat_index,
                    lon_index,
                },
            );
            offset += record.row_len;
            stats.rows += 1;
        }

        let mut sectors = aggregator.finish();
        let (max_lat, max_lon) = quantizer.max_seen();
        info!(
            "parsed {} rows into {} sectors ({} districts, max grid index {}/{})",
            stats.rows,
            sectors.len(),
            registry.len(),
            max_lat,
            max_lon
        );

        for sector in &mut sectors {
            sequence::reorder_units(&mut sector.units);
        }

        stats.districts = registry.len();
        stats.sectors = sectors.len();
        stats.units = sectors.iter().map(|s| s.units.len() as u64).sum();

        let table = registry.into_table();
        let bytes = serializer::write_bundle(&table, &sectors, &mut stats)?;
        stats.output_len = bytes.len();

        info!(
            "bundle serialized: {} bytes, {} delta / {} absolute spans",
            stats.output_len, stats.delta_spans, stats.absolute_spans
        );
        Ok(EncodedBundle { bytes, stats })
    }
}
