//! Package-merge-free canonical Huffman table construction.
//!
//! See: 4.5. HuffmanBuilder

use crate::constants::{HEAP_CAPACITY, NUM_SYMBOLS};
use crate::histogram::Histogram;
use crate::huffman::entry::{assign_canonical_codes, combine, leaf_weight, HuffEntry};
use crate::huffman::heap::Heap;

/// Maximum node count: 256 leaves plus up to 255 internal nodes.
const MAX_NODES: usize = 2 * NUM_SYMBOLS - 1;

/// Builds a 256-entry canonical Huffman table from a histogram.
///
/// See: * 4.5.1. Weight encoding
///      * 4.5.4. Tree construction
///      * 4.5.5. Code lengths
///      * 4.5.6. Canonical codes
pub fn build(counts: &Histogram) -> [HuffEntry; NUM_SYMBOLS] {
    // parent[0] is the sentinel; leaves live at node indices 1..=256.
    let mut parent: Vec<i32> = vec![-1; MAX_NODES + 1];
    let mut heap = Heap::with_capacity(HEAP_CAPACITY);

    for sym in 0..NUM_SYMBOLS {
        let node = (sym + 1) as u32;
        heap.push(leaf_weight(counts[sym]), node);
    }

    let mut nr_nodes = NUM_SYMBOLS;
    while heap.len() > 1 {
        let (w1, min1) = heap.pop_min();
        let (w2, min2) = heap.pop_min();
        nr_nodes += 1;
        let node = nr_nodes as u32;
        parent[min1 as usize] = node as i32;
        parent[min2 as usize] = node as i32;
        heap.push(combine(w1, w2), node);
    }

    let mut entries: [HuffEntry; NUM_SYMBOLS] = [HuffEntry {
        sym: 0,
        len: 0,
        code: 0,
    }; NUM_SYMBOLS];

    for (sym, entry) in entries.iter_mut().enumerate() {
        let mut node = sym + 1;
        let mut len: u8 = 0;
        while parent[node] != -1 {
            len += 1;
            node = parent[node] as usize;
        }
        *entry = HuffEntry {
            sym: sym as u8,
            len,
            code: 0,
        };
    }

    assign_canonical_codes(&mut entries);
    entries
}
