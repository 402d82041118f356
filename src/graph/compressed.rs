//! Memory-efficient graph representation

use std::mem;

use serde::{Deserialize, Serialize};

/// Compressed sparse representation of the undirected overlap graph
///
/// Every edge is stored in both directions so traversal never needs a
/// reverse lookup; the unique edge list is recoverable via [`edge_list`].
///
/// [`edge_list`]: OverlapGraph::edge_list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated, sorted lists of adjacent nodes
    pub edges: Vec<u32>,

    /// Shared-member count for each entry in `edges`
    pub weights: Vec<u32>,

    /// Item id for each node, in input order
    pub node_ids: Vec<String>,
}

impl OverlapGraph {
    /// Get the neighbors of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Get the edge weights of a node, parallel to [`neighbors`]
    ///
    /// [`neighbors`]: OverlapGraph::neighbors
    pub fn neighbor_weights(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.weights[start..end]
    }

    /// Check if two nodes are connected
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Weight of the edge between two nodes, if one exists
    pub fn edge_weight(&self, src: usize, dst: u32) -> Option<u32> {
        self.neighbors(src)
            .binary_search(&dst)
            .ok()
            .map(|pos| self.neighbor_weights(src)[pos])
    }

    /// Degree of a node
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Unique edges as `(source, target, weight)` triples with source < target
    pub fn edge_list(&self) -> Vec<(u32, u32, u32)> {
        let mut list = Vec::with_capacity(self.edge_count());
        for src in 0..self.node_count {
            let neighbors = self.neighbors(src);
            let weights = self.neighbor_weights(src);
            for (&dst, &weight) in neighbors.iter().zip(weights) {
                if (src as u32) < dst {
                    list.push((src as u32, dst, weight));
                }
            }
        }
        list
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();
        let weights = self.weights.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.iter().map(|id| id.capacity()).sum::<usize>();

        base + offsets + edges + weights + ids
    }
}
