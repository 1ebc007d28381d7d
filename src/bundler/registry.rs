//! District string interning.

use std::collections::HashMap;

use super::models::{DistrictCode, DISTRICT_LEN};

/// Assigns a stable small integer code to each distinct district string.
///
/// Codes are allocated sequentially from 0 in first-seen order, so the
/// registry is a bijection between the districts observed and `[0, n)`.
/// Owned by the pipeline for the run; there is no shared or static state.
#[derive(Debug, Default)]
pub struct DistrictRegistry {
    codes: HashMap<[u8; DISTRICT_LEN], DistrictCode>,
}

impl DistrictRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `district`, allocating the next one if unseen.
    pub fn code_for(&mut self, district: [u8; DISTRICT_LEN]) -> DistrictCode {
        let next = self.codes.len() as DistrictCode;
        *self.codes.entry(district).or_insert(next)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Export the code→string table, sorted ascending by code, so that
    /// code `i` maps to the table's `i`-th entry.
    pub fn into_table(self) -> Vec<[u8; DISTRICT_LEN]> {
        let mut pairs: Vec<_> = self.codes.into_iter().collect();
        pairs.sort_by_key(|&(_, code)| code);
        pairs.into_iter().map(|(district, _)| district).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_contiguous_in_first_seen_order() {
        let mut registry = DistrictRegistry::new();
        assert_eq!(registry.code_for(*b"SW1A"), 0);
        assert_eq!(registry.code_for(*b"AB1 "), 1);
        assert_eq!(registry.code_for(*b"EH2 "), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn code_for_is_idempotent() {
        let mut registry = DistrictRegistry::new();
        assert_eq!(registry.code_for(*b"AB1 "), 0);
        assert_eq!(registry.code_for(*b"SW1A"), 1);
        assert_eq!(registry.code_for(*b"AB1 "), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn table_reproduces_strings_indexed_by_code() {
        let mut registry = DistrictRegistry::new();
        let districts = [*b"ZE1 ", *b"AB1 ", *b"SW1A", *b"EH2 "];
        for d in districts {
            registry.code_for(d);
        }
        let table = registry.into_table();
        assert_eq!(table, districts);
    }
}
