//! Cluster analysis module

pub mod detection;
pub mod labels;

use serde::{Deserialize, Serialize};

/// Represents a cluster (connected component) in the overlap graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Unique identifier for this cluster
    pub id: u32,

    /// Members of this cluster (node indices, ascending)
    pub members: Vec<u32>,

    /// Size of the cluster
    pub size: usize,

    /// Density: actual edges / potential edges
    pub density: f32,

    /// Node index of the member carrying the primary label
    pub representative: u32,
}

impl Cluster {
    /// Node indices of the members rendered with de-emphasized labels
    pub fn minor_members(&self) -> impl Iterator<Item = u32> + '_ {
        let representative = self.representative;
        self.members
            .iter()
            .copied()
            .filter(move |&member| member != representative)
    }
}
