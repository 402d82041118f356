//! Cluster detection algorithms

use std::collections::HashMap;

use crate::cluster::{labels, Cluster};
use crate::graph::OverlapGraph;
use crate::table::EnrichmentTable;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Rank/size of each set (for union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        let mut parent = Vec::with_capacity(size);
        let mut rank = Vec::with_capacity(size);

        // Initialize each node as its own set
        for i in 0..size {
            parent.push(i as u32);
            rank.push(1);
        }

        Self { parent, rank }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            // Path compression: set parent to root
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return; // Already in the same set
        }

        // Union by rank: attach smaller tree under root of larger tree
        let rank_x = self.rank[root_x as usize];
        let rank_y = self.rank[root_y as usize];

        if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }

    /// Get the size of the set containing x
    pub fn size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.rank[root as usize]
    }
}

/// Calculate cluster density (actual edges / potential edges)
pub fn calculate_cluster_density(graph: &OverlapGraph, members: &[u32]) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    // Each undirected edge shows up twice in the adjacency, which cancels
    // against potential pairs counted both ways
    let potential_entries = n * (n - 1);

    let members_set: std::collections::HashSet<u32> = members.iter().copied().collect();

    let mut actual_entries = 0;
    for &src_idx in members {
        for &dst_idx in graph.neighbors(src_idx as usize) {
            if members_set.contains(&dst_idx) {
                actual_entries += 1;
            }
        }
    }

    actual_entries as f32 / potential_entries as f32
}

/// Find connected components in the overlap graph
///
/// Returns a partition of the node set: every node lands in exactly one
/// cluster and isolated nodes form singletons. Clusters are ordered
/// largest first; equal sizes keep their first-encountered order, so the
/// result is deterministic for a given input.
pub fn find_clusters(graph: &OverlapGraph, table: &EnrichmentTable) -> Vec<Cluster> {
    log::info!("Finding connected components across {} nodes", graph.node_count);

    let node_count = graph.node_count;
    let mut sets = DisjointSets::new(node_count);

    for node in 0..node_count {
        for &dst in graph.neighbors(node) {
            sets.union(node as u32, dst);
        }
    }

    // Group nodes by component, in first-seen root order
    let mut groups: Vec<Vec<u32>> = Vec::new();
    let mut root_to_group: HashMap<u32, usize> = HashMap::new();

    for node in 0..node_count as u32 {
        let root = sets.find(node);
        let slot = *root_to_group.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(node);
    }

    let mut clusters: Vec<Cluster> = groups
        .into_iter()
        .map(|members| {
            let density = calculate_cluster_density(graph, &members);
            let representative = labels::select_representative(&members, table);
            Cluster {
                id: 0,
                size: members.len(),
                members,
                density,
                representative,
            }
        })
        .collect();

    // Sort clusters by size (largest first); sort_by is stable
    clusters.sort_by(|a, b| b.size.cmp(&a.size));
    for (id, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = id as u32;
    }

    log::info!("Found {} clusters", clusters.len());

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build_graph;
    use crate::graph::overlap::compute_overlap_edges;
    use crate::table::Item;

    fn build(table: &EnrichmentTable, min_overlap: u32) -> OverlapGraph {
        let edges = compute_overlap_edges(table, min_overlap).unwrap();
        build_graph(table, &edges)
    }

    fn table() -> EnrichmentTable {
        EnrichmentTable::new(vec![
            Item::with_delimited_members("a", "A", "g1/g2/g3", 10.0, 0.01),
            Item::with_delimited_members("b", "B", "g2/g3/g4", 5.0, 0.02),
            Item::with_delimited_members("c", "C", "g9", 1.0, 0.03),
        ])
        .unwrap()
    }

    #[test]
    fn test_disjoint_sets_union_find() {
        let mut sets = DisjointSets::new(4);
        sets.union(0, 1);
        sets.union(2, 3);

        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(1), sets.find(2));
        assert_eq!(sets.size(3), 2);

        sets.union(1, 2);
        assert_eq!(sets.find(0), sets.find(3));
        assert_eq!(sets.size(0), 4);
    }

    #[test]
    fn test_clusters_partition_the_node_set() {
        let table = table();
        let graph = build(&table, 2);
        let clusters = find_clusters(&graph, &table);

        let mut seen: Vec<u32> = clusters.iter().flat_map(|c| c.members.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        assert!(clusters.iter().all(|c| !c.members.is_empty()));
        assert!(clusters.iter().all(|c| c.size == c.members.len()));
    }

    #[test]
    fn test_connected_pair_and_singleton() {
        let table = table();
        let graph = build(&table, 2);
        let clusters = find_clusters(&graph, &table);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].members, vec![0, 1]);
        assert_eq!(clusters[1].members, vec![2]);
    }

    #[test]
    fn test_high_threshold_gives_all_singletons() {
        let table = table();
        let graph = build(&table, 3);
        let clusters = find_clusters(&graph, &table);

        assert_eq!(clusters.len(), 3);
        assert!(clusters.iter().all(|c| c.size == 1));
    }

    #[test]
    fn test_density_conventions() {
        let table = table();
        let graph = build(&table, 2);
        let clusters = find_clusters(&graph, &table);

        // A pair with its one edge is fully dense; singletons are 1 by convention
        assert_eq!(clusters[0].density, 1.0);
        assert_eq!(clusters[1].density, 1.0);
    }
}
