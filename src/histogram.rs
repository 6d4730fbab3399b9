//! Symbol-frequency counting over a residual plane.
//!
//! See: 4.4. Histogram

use crate::constants::NUM_SYMBOLS;

/// 256 32-bit symbol counters.
pub type Histogram = [u32; NUM_SYMBOLS];

/// Counts occurrences of every byte value in `residual` (`width * height`
/// tightly packed samples) into `counts`.
///
/// Invariant: `counts.iter().sum::<u32>() == (width * height) as u32`.
pub fn count_usage(residual: &[u8], width: usize, height: usize, counts: &mut Histogram) {
    debug_assert!(residual.len() >= width * height);
    for &v in &residual[..width * height] {
        counts[v as usize] += 1;
    }
}

/// If exactly one symbol accounts for every sample, returns it.
///
/// See: 4.6.1. Degenerate single-symbol fast path
pub fn degenerate_symbol(counts: &Histogram, total: u32) -> Option<u8> {
    let mut found = None;
    for (sym, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if count != total || found.is_some() {
            return None;
        }
        found = Some(sym as u8);
    }
    found
}
