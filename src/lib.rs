//! # postcode-bundler
//!
//! Encodes a flat-file extract of UK postcode records into the smallest
//! possible binary bundle for client-side geographic lookup: fixed-layout
//! rows are parsed into a district → sector → unit model, coordinates are
//! quantized onto a fixed integer grid, each sector's units are greedily
//! reordered to favour delta compression, and the result is serialized as
//! an adaptive varint / absolute-record hybrid stream.
pub mod bundler;

// Re-export the main types for convenience
pub use bundler::{
    error::{BundleError, Result},
    grid::{MAX_LAT_INDEX, MAX_LON_INDEX},
    models::{EncodeStats, PostcodeRecord, Sector, Unit},
    schema::{RowSchema, ONS_EXTRACT_V1},
    BundleEncoder, EncodedBundle,
};
