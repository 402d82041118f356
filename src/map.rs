//! End-to-end enrichment map construction

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::cluster::{detection, labels, Cluster};
use crate::config::EmapConfig;
use crate::error::Result;
use crate::graph::builder::build_graph;
use crate::graph::overlap::compute_overlap_edges;
use crate::graph::OverlapGraph;
use crate::table::EnrichmentTable;

/// A fully built enrichment map: the overlap graph, its clusters, and the
/// table the nodes were built from
///
/// This is everything a rendering layer needs; layout, colors and label
/// drawing stay on the renderer's side.
#[derive(Debug, Clone)]
pub struct EnrichmentMap {
    /// Input table, in original row order (sizes possibly rescaled)
    pub table: EnrichmentTable,

    /// Overlap graph with one node per table row
    pub graph: OverlapGraph,

    /// Connected components, largest first
    pub clusters: Vec<Cluster>,
}

impl EnrichmentMap {
    /// Build an enrichment map from a validated table
    ///
    /// Runs the full pipeline: optional size rescaling, pairwise overlap
    /// computation, graph construction, connected-component clustering
    /// and representative selection. Pure function of the table and
    /// configuration; no state survives between calls.
    pub fn build(mut table: EnrichmentTable, config: &EmapConfig) -> Result<Self> {
        log::info!("Building enrichment map for {} items", table.len());

        if config.rescale_sizes {
            table.rescale_sizes(config.size_min, config.size_range);
        }

        let edges = compute_overlap_edges(&table, config.min_overlap)?;
        let graph = build_graph(&table, &edges);
        log::debug!("Overlap graph uses ~{} bytes", graph.memory_usage());

        let clusters = detection::find_clusters(&graph, &table);

        Ok(Self {
            table,
            graph,
            clusters,
        })
    }

    /// Map from every item id to the id of its cluster's representative
    pub fn cluster_representative(&self) -> HashMap<String, String> {
        labels::representative_map(&self.clusters, &self.graph)
    }

    /// Item ids carrying the primary label, one per cluster
    pub fn representative_ids(&self) -> Vec<&str> {
        self.clusters
            .iter()
            .map(|cluster| self.graph.node_ids[cluster.representative as usize].as_str())
            .collect()
    }

    /// Item ids rendered as minor labels
    pub fn minor_ids(&self) -> Vec<&str> {
        self.clusters
            .iter()
            .flat_map(|cluster| {
                cluster
                    .minor_members()
                    .map(|member| self.graph.node_ids[member as usize].as_str())
            })
            .collect()
    }

    /// Summary statistics for the graph and its clusters
    pub fn summary(&self) -> Value {
        json!({
            "graph_stats": {
                "node_count": self.graph.node_count,
                "edge_count": self.graph.edge_count(),
                "avg_degree": self.graph.edges.len() as f64 / self.graph.node_count as f64,
            },
            "cluster_stats": {
                "cluster_count": self.clusters.len(),
                "largest_cluster_size": self.clusters.first().map_or(0, |c| c.size),
                "smallest_cluster_size": self.clusters.last().map_or(0, |c| c.size),
                "singleton_count": self.clusters.iter().filter(|c| c.size == 1).count(),
                "avg_density": self.clusters.iter().map(|c| c.density as f64).sum::<f64>()
                    / self.clusters.len() as f64,
            }
        })
    }
}
