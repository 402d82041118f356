//! Graph construction module

use crate::graph::overlap::OverlapEdge;
use crate::graph::OverlapGraph;
use crate::table::EnrichmentTable;

/// Builder for incrementally constructing an OverlapGraph
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Node string IDs
    node_ids: Vec<String>,

    /// Adjacency list per node as (neighbor, weight) pairs
    adjacency_lists: Vec<Vec<(u32, u32)>>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Add a node and return its index
    ///
    /// Nodes are indexed in insertion order, matching the row order of
    /// the table they are built from.
    pub fn add_node(&mut self, id: &str) -> u32 {
        let idx = self.node_count as u32;
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    /// Add an undirected weighted edge between two existing nodes
    pub fn add_edge(&mut self, src: u32, dst: u32, weight: u32) {
        self.adjacency_lists[src as usize].push((dst, weight));
        self.adjacency_lists[dst as usize].push((src, weight));
    }

    /// Build the compressed graph
    pub fn build(mut self) -> OverlapGraph {
        // Count total adjacency entries (two per undirected edge)
        let entry_count: usize = self.adjacency_lists.iter().map(|list| list.len()).sum();

        // Create offsets array
        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        // Create edge and weight arrays
        let mut edges = Vec::with_capacity(entry_count);
        let mut weights = Vec::with_capacity(entry_count);
        for list in &mut self.adjacency_lists {
            // Sort by neighbor for binary search efficiency
            list.sort_unstable();
            for &(neighbor, weight) in list.iter() {
                edges.push(neighbor);
                weights.push(weight);
            }
        }

        OverlapGraph {
            node_count: self.node_count,
            offsets,
            edges,
            weights,
            node_ids: self.node_ids,
        }
    }
}

/// Build the overlap graph for a table
///
/// Creates one node per item, in row order, so items without any
/// qualifying edge still appear as isolated nodes.
pub fn build_graph(table: &EnrichmentTable, edges: &[OverlapEdge]) -> OverlapGraph {
    let mut builder = GraphBuilder::with_capacity(table.len());

    for item in table.items() {
        builder.add_node(&item.id);
    }
    for edge in edges {
        builder.add_edge(edge.source, edge.target, edge.weight);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Item;

    fn table() -> EnrichmentTable {
        EnrichmentTable::new(vec![
            Item::with_delimited_members("a", "A", "g1/g2/g3", 10.0, 0.01),
            Item::with_delimited_members("b", "B", "g2/g3/g4", 5.0, 0.02),
            Item::with_delimited_members("c", "C", "g9", 1.0, 0.03),
        ])
        .unwrap()
    }

    #[test]
    fn test_every_item_becomes_a_node() {
        let table = table();
        let graph = build_graph(&table, &[]);

        assert_eq!(graph.node_count, table.len());
        assert_eq!(graph.node_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_isolated_nodes_survive() {
        let table = table();
        let edge = OverlapEdge {
            source: 0,
            target: 1,
            weight: 2,
        };
        let graph = build_graph(&table, &[edge]);

        assert_eq!(graph.node_count, 3);
        assert_eq!(graph.degree(2), 0);
        assert_eq!(graph.edge_count(), 1);
    }
}
