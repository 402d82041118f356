//! Pairwise overlap computation between item member sets

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{EmapError, Result};
use crate::table::EnrichmentTable;

/// An undirected edge between two items that share members
///
/// `source < target` always holds; each unordered pair appears at most
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapEdge {
    /// Node index of the earlier item
    pub source: u32,

    /// Node index of the later item
    pub target: u32,

    /// Number of members shared by the two items
    pub weight: u32,
}

/// Compute overlap edges for every unordered pair of items
///
/// An edge qualifies when the shared-member count is at least
/// `min_overlap`. Pair enumeration is O(n²), which is fine for the
/// tens-to-hundreds of rows an enrichment table holds.
pub fn compute_overlap_edges(table: &EnrichmentTable, min_overlap: u32) -> Result<Vec<OverlapEdge>> {
    if min_overlap < 1 {
        return Err(EmapError::InvalidMinOverlap { value: min_overlap });
    }

    log::info!(
        "Computing pairwise overlaps for {} items (min_overlap {})",
        table.len(),
        min_overlap
    );

    let items = table.items();
    let mut edges = Vec::new();

    for (i, j) in (0..items.len()).tuple_combinations() {
        let overlap = items[i].members.intersection(&items[j].members).count() as u32;
        if overlap >= min_overlap {
            edges.push(OverlapEdge {
                source: i as u32,
                target: j as u32,
                weight: overlap,
            });
        }
    }

    log::info!("Found {} overlap edges", edges.len());

    Ok(edges)
}
