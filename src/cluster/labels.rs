//! Representative label selection
//!
//! Each cluster carries exactly one primary label. The member with the
//! largest size wins; everything else in the cluster becomes a minor
//! label for the rendering layer to de-emphasize.

use std::collections::HashMap;

use crate::cluster::Cluster;
use crate::graph::OverlapGraph;
use crate::table::EnrichmentTable;

/// Pick the representative of a cluster: the member with the largest size
///
/// Ties go to the earliest input row. `members` is ascending by node
/// index (input order), so keeping the current best on equal sizes is
/// enough to make the choice stable.
pub fn select_representative(members: &[u32], table: &EnrichmentTable) -> u32 {
    debug_assert!(!members.is_empty());

    let mut best = members[0];
    for &node in &members[1..] {
        if table.item(node).size > table.item(best).size {
            best = node;
        }
    }

    best
}

/// Map every member id to the id of its cluster's representative
pub fn representative_map(clusters: &[Cluster], graph: &OverlapGraph) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(graph.node_count);

    for cluster in clusters {
        let representative = &graph.node_ids[cluster.representative as usize];
        for &member in &cluster.members {
            map.insert(graph.node_ids[member as usize].clone(), representative.clone());
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Item;

    fn table(sizes: &[f64]) -> EnrichmentTable {
        let items = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                Item::with_delimited_members(format!("n{}", i), format!("N{}", i), "g1", size, 0.5)
            })
            .collect();
        EnrichmentTable::new(items).unwrap()
    }

    #[test]
    fn test_largest_size_wins() {
        let table = table(&[10.0, 5.0, 25.0]);
        assert_eq!(select_representative(&[0, 1, 2], &table), 2);
    }

    #[test]
    fn test_ties_keep_earliest_row() {
        let table = table(&[5.0, 7.0, 7.0]);
        assert_eq!(select_representative(&[0, 1, 2], &table), 1);
        assert_eq!(select_representative(&[1, 2], &table), 1);
    }

    #[test]
    fn test_representative_is_a_member() {
        let table = table(&[3.0, 9.0, 6.0]);
        let members = vec![0, 2];
        let representative = select_representative(&members, &table);
        assert!(members.contains(&representative));
    }
}
