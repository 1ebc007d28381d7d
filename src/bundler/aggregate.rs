//! Single-pass grouping of records into sectors.

use log::debug;

use super::models::{DistrictCode, Sector, Unit};

/// Streams records already grouped by (district, sector) into `Sector`s.
///
/// Maintains exactly one open group; a district or sector change closes it.
/// The input ordering is a precondition of the extract, not something this
/// pass validates or repairs.
#[derive(Debug, Default)]
pub struct SectorAggregator {
    open: Option<Sector>,
    closed: Vec<Sector>,
}

impl SectorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, district: DistrictCode, sector: u8, unit: Unit) {
        match &mut self.open {
            Some(open) if open.district == district && open.sector == sector => {
                open.units.push(unit);
            }
            _ => {
                self.close_open();
                self.open = Some(Sector {
                    district,
                    sector,
                    units: vec![unit],
                });
            }
        }
    }

    /// Close the last open group and hand back all sectors in first-seen order.
    pub fn finish(mut self) -> Vec<Sector> {
        self.close_open();
        self.closed
    }

    fn close_open(&mut self) {
        if let Some(sector) = self.open.take() {
            debug!(
                "closed sector: district={} sector={} units={}",
                sector.district,
                sector.sector,
                sector.units.len()
            );
            self.closed.push(sector);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(code: u16) -> Unit {
        Unit {
            code,
            lat_index: 100,
            lon_index: 200,
        }
    }

    #[test]
    fn groups_contiguous_runs() {
        let mut agg = SectorAggregator::new();
        agg.push(0, 2, unit(1));
        agg.push(0, 2, unit(2));
        agg.push(0, 3, unit(3));
        agg.push(1, 3, unit(4));

        let sectors = agg.finish();
        assert_eq!(sectors.len(), 3);
        assert_eq!((sectors[0].district, sectors[0].sector), (0, 2));
        assert_eq!(sectors[0].units.len(), 2);
        assert_eq!((sectors[1].district, sectors[1].sector), (0, 3));
        assert_eq!((sectors[2].district, sectors[2].sector), (1, 3));
    }

    #[test]
    fn same_sector_digit_in_a_new_district_opens_a_new_group() {
        let mut agg = SectorAggregator::new();
        agg.push(0, 5, unit(1));
        agg.push(1, 5, unit(2));
        let sectors = agg.finish();
        assert_eq!(sectors.len(), 2);
    }

    #[test]
    fn finish_flushes_the_open_group() {
        let mut agg = SectorAggregator::new();
        agg.push(7, 9, unit(1));
        let sectors = agg.finish();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].units, vec![unit(1)]);
    }

    #[test]
    fn empty_input_yields_no_sectors() {
        let agg = SectorAggregator::new();
        assert!(agg.finish().is_empty());
    }
}
