//! Greedy reordering of a sector's units for delta compression.

use std::mem;

use super::delta::transition_cost;
use super::models::Unit;

/// Permute `units` so consecutive pairs favour small merged deltas.
///
/// Greedy nearest-neighbour walk: the original first unit stays first; each
/// step scans the not-yet-placed units in their original relative order,
/// scores each against the last placed unit, and takes the cheapest. The
/// first occurrence wins ties, which also makes the all-unencodable case
/// degenerate to the first remaining unit, so the walk always terminates
/// and the encoder records that transition as an absolute span.
///
/// O(n²) per sector. Not a globally optimal tour; the precise visit order
/// is part of the bundle's observable behaviour, so keep the tie-break and
/// fallback exactly as they are.
pub fn reorder_units(units: &mut Vec<Unit>) {
    if units.len() < 2 {
        return;
    }

    let mut remaining = mem::take(units);
    units.push(remaining.remove(0));

    while !remaining.is_empty() {
        let current = units[units.len() - 1];
        let mut best = 0;
        let mut best_cost = u64::MAX;
        for (index, candidate) in remaining.iter().enumerate() {
            let cost = transition_cost(&current, candidate);
            if cost < best_cost {
                best = index;
                best_cost = cost;
            }
        }
        units.push(remaining.remove(best));
    }
}
