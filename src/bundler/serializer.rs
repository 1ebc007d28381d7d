//! Bundle serialization.

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, info};

use super::delta::{self, SpanKind};
use super::error::{BundleError, Result};
use super::models::{DistrictCode, EncodeStats, Sector, Unit, DISTRICT_LEN};

/// Bits of the packed sector id taken by the sector digit; the district
/// code fills the remaining high 12.
pub const SECTOR_BITS: u32 = 4;

/// Districts addressable by the packed sector id.
pub const MAX_DISTRICTS: usize = 1 << (16 - SECTOR_BITS);

/// Pack a (district, sector) pair into the 16-bit sector record id.
pub fn packed_id(district: DistrictCode, sector: u8) -> u16 {
    district << SECTOR_BITS | sector as u16
}

/// Serialize the bundle.
///
/// Layout:
/// - 2 bytes: district count (big-endian)
/// - district count × 4 bytes: district code strings, sorted by code
/// - per sector, in first-seen order:
///   - 2 bytes: packed id, district code over sector digit
///   - 2 bytes: unit count
///   - one tagged varint span per unit
///
/// The delta "previous unit" persists across sector boundaries, so only the
/// very first unit of the stream is forced absolute. No separators, no
/// version tag, no checksum: the spans are self-delimiting and the district
/// count bounds the header.
pub fn write_bundle(
    table: &[[u8; DISTRICT_LEN]],
    sectors: &[Sector],
    stats: &mut EncodeStats,
) -> Result<Vec<u8>> {
    if table.len() > MAX_DISTRICTS {
        return Err(BundleError::DistrictOverflow {
            count: table.len(),
            max: MAX_DISTRICTS,
        });
    }

    let mut out = Vec::new();
    out.write_u16::<BigEndian>(table.len() as u16)?;
    for district in table {
        out.extend_from_slice(district);
    }
    info!("district table written: {} entries", table.len());

    let mut prev: Option<Unit> = None;
    for sector in sectors {
        let id = packed_id(sector.district, sector.sector);
        if sector.units.len() > u16::MAX as usize {
            return Err(BundleError::SectorOverflow {
                packed_id: id,
                count: sector.units.len(),
            });
        }

        out.write_u16::<BigEndian>(id)?;
        out.write_u16::<BigEndian>(sector.units.len() as u16)?;

        let sector_start = out.len();
        for unit in &sector.units {
            match delta::encode_unit(prev.as_ref(), unit, &mut out) {
                SpanKind::Delta => stats.delta_spans += 1,
                SpanKind::Absolute => stats.absolute_spans += 1,
            }
            prev = Some(*unit);
        }
        debug!(
            "sector {:#06x}: {} units in {} bytes",
            id,
            sector.units.len(),
            out.len() - sector_start
        );
    }

    Ok(out)
}
