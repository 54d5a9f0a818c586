//! Weighted undirected graph for global minimum cut
//!
//! Vertices are dense ids in `[0, n)`. Every active vertex owns a row mapping
//! its neighbours to the accumulated edge weight. Rows are kept symmetric and
//! zero weights are never stored, so a contraction only touches the rows of
//! the merged pair and their neighbours.
//!
//! - Ordered rows give deterministic iteration (lowest id first)
//! - Contraction removes the absorbed vertex and sums parallel weights
//! - Structural checks run once in [`Graph::validate`]

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{MinCutError, Result};

/// Dense vertex identifier
pub type VertexId = usize;

/// Edge weight type
pub type Weight = i64;

/// An undirected edge with canonical endpoints (`source < target`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Lower endpoint
    pub source: VertexId,
    /// Higher endpoint
    pub target: VertexId,
    /// Weight of the edge
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge, ordering the endpoints
    pub fn new(u: VertexId, v: VertexId, weight: Weight) -> Self {
        let (source, target) = if u <= v { (u, v) } else { (v, u) };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Get the other endpoint of the edge given one endpoint
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.source == v {
            Some(self.target)
        } else if self.target == v {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Statistics about the graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of active vertices
    pub num_vertices: usize,
    /// Number of edges with positive weight
    pub num_edges: usize,
    /// Sum of all edge weights
    pub total_weight: Weight,
    /// Minimum vertex degree
    pub min_degree: usize,
    /// Maximum vertex degree
    pub max_degree: usize,
    /// Average vertex degree
    pub avg_degree: f64,
    /// Vertices without any incident edge
    pub isolated_vertices: usize,
}

/// Weighted undirected graph keyed by stable vertex ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Active vertex -> (neighbour -> weight)
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, Weight>>,
    /// Number of ids allocated at construction
    capacity: usize,
}

impl Graph {
    /// Create a graph with vertices `0..n` and no edges
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: (0..n).map(|v| (v, BTreeMap::new())).collect(),
            capacity: n,
        }
    }

    /// Build from a dense symmetric weight matrix
    ///
    /// The diagonal must be zero and `rows[u][v] == rows[v][u]` must hold.
    pub fn from_matrix(rows: &[Vec<Weight>]) -> Result<Self> {
        let n = rows.len();
        if let Some((u, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(MinCutError::Parse {
                line: u + 1,
                message: format!("matrix row has {} entries, expected {}", row.len(), n),
            });
        }

        let mut graph = Self::new(n);
        for (u, row) in rows.iter().enumerate() {
            for (v, &weight) in row.iter().enumerate() {
                if u == v {
                    if weight != 0 {
                        return Err(MinCutError::SelfLoop(u));
                    }
                    continue;
                }
                if weight < 0 {
                    return Err(MinCutError::NegativeWeight { u, v, weight });
                }
                let backward = rows[v][u];
                if backward != weight {
                    return Err(MinCutError::AsymmetricWeight {
                        u,
                        v,
                        forward: weight,
                        backward,
                    });
                }
                if u < v && weight > 0 {
                    graph.insert_symmetric(u, v, weight);
                }
            }
        }

        graph.check_structure()?;
        Ok(graph)
    }

    /// Number of vertex ids allocated at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add `weight` to the edge between `u` and `v` (returns the new weight)
    ///
    /// Parallel edges accumulate, matching what contraction does.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<Weight> {
        self.check_endpoints(u, v)?;
        if weight < 0 {
            return Err(MinCutError::NegativeWeight { u, v, weight });
        }

        let merged = self
            .weight(u, v)
            .checked_add(weight)
            .ok_or(MinCutError::WeightOverflow)?;
        if merged > 0 {
            self.insert_symmetric(u, v, merged);
        }
        Ok(merged)
    }

    /// Set the weight between `u` and `v`, removing the edge when zero
    pub fn set_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        if weight < 0 {
            return Err(MinCutError::NegativeWeight { u, v, weight });
        }

        if weight == 0 {
            self.remove_symmetric(u, v);
        } else {
            self.insert_symmetric(u, v, weight);
        }
        Ok(())
    }

    /// Weight between two vertices (0 when absent)
    pub fn weight(&self, u: VertexId, v: VertexId) -> Weight {
        self.adjacency
            .get(&u)
            .and_then(|row| row.get(&v))
            .copied()
            .unwrap_or(0)
    }

    /// Check if vertex is active
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Neighbours of `v` with their weights, ascending by id
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency
            .get(&v)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&n, &w)| (n, w)))
    }

    /// Number of neighbours with positive weight
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).filter(|&(_, w)| w > 0).count()
    }

    /// Total weight incident to `v`
    pub fn incident_weight(&self, v: VertexId) -> Weight {
        self.neighbors(v).map(|(_, w)| w).sum()
    }

    /// Active vertices in ascending order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    /// Lowest active vertex id
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.adjacency.keys().next().copied()
    }

    /// Number of active vertices
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges with positive weight
    pub fn num_edges(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(&u, row)| row.iter().filter(|(&v, &w)| u < v && w > 0).count())
            .sum()
    }

    /// All edges with positive weight, ordered by (source, target)
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&u, row)| {
                row.iter()
                    .filter(move |(&v, &w)| u < v && w > 0)
                    .map(move |(&v, &w)| Edge::new(u, v, w))
            })
            .collect()
    }

    /// Sum of all edge weights (saturating)
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .iter()
            .fold(0, |acc: Weight, e| acc.saturating_add(e.weight))
    }

    /// Contract `t` into `s`
    ///
    /// Every weight(v, t) is added to weight(v, s), the edge between `s` and
    /// `t` disappears and `t` stops being active.
    pub fn contract(&mut self, s: VertexId, t: VertexId) -> Result<()> {
        self.check_endpoints(s, t)?;

        let t_row = self
            .adjacency
            .remove(&t)
            .ok_or(MinCutError::InvalidVertex(t))?;

        for (v, w) in t_row {
            if let Some(row) = self.adjacency.get_mut(&v) {
                row.remove(&t);
            }
            if v == s || w == 0 {
                continue;
            }

            let merged = self
                .weight(s, v)
                .checked_add(w)
                .ok_or(MinCutError::WeightOverflow)?;
            self.insert_symmetric(s, v, merged);
        }

        Ok(())
    }

    /// Check the graph is a valid minimum cut input
    ///
    /// Requires at least two active vertices, non-negative symmetric weights,
    /// no self weight and a total weight that fits [`Weight`].
    pub fn validate(&self) -> Result<()> {
        if self.num_vertices() < 2 {
            return Err(MinCutError::TooFewVertices(self.num_vertices()));
        }
        self.check_structure()
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        let num_vertices = self.num_vertices();
        if num_vertices == 0 {
            return GraphStats::default();
        }

        let mut degrees: Vec<usize> = self.adjacency.keys().map(|&v| self.degree(v)).collect();
        degrees.sort_unstable();

        let total_degree: usize = degrees.iter().sum();

        GraphStats {
            num_vertices,
            num_edges: self.num_edges(),
            total_weight: self.total_weight(),
            min_degree: degrees.first().copied().unwrap_or(0),
            max_degree: degrees.last().copied().unwrap_or(0),
            avg_degree: total_degree as f64 / num_vertices as f64,
            isolated_vertices: degrees.iter().filter(|&&d| d == 0).count(),
        }
    }

    /// Check if graph is connected using BFS
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Connected components, each sorted, ordered by their lowest vertex
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited = BTreeSet::new();
        let mut components = Vec::new();

        for &start in self.adjacency.keys() {
            if !visited.insert(start) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);

            while let Some(v) = queue.pop_front() {
                component.push(v);
                for (neighbor, w) in self.neighbors(v) {
                    if w > 0 && visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }

    // ===== Internal methods =====

    fn check_endpoints(&self, u: VertexId, v: VertexId) -> Result<()> {
        if !self.has_vertex(u) {
            return Err(MinCutError::InvalidVertex(u));
        }
        if !self.has_vertex(v) {
            return Err(MinCutError::InvalidVertex(v));
        }
        if u == v {
            return Err(MinCutError::SelfLoop(u));
        }
        Ok(())
    }

    fn insert_symmetric(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
    }

    fn remove_symmetric(&mut self, u: VertexId, v: VertexId) {
        if let Some(row) = self.adjacency.get_mut(&u) {
            row.remove(&v);
        }
        if let Some(row) = self.adjacency.get_mut(&v) {
            row.remove(&u);
        }
    }

    /// Structural checks shared by validation and matrix construction
    fn check_structure(&self) -> Result<()> {
        let mut total: Weight = 0;

        for (&u, row) in &self.adjacency {
            if u >= self.capacity {
                return Err(MinCutError::InvalidVertex(u));
            }
            for (&v, &weight) in row {
                if u == v {
                    if weight != 0 {
                        return Err(MinCutError::SelfLoop(u));
                    }
                    continue;
                }
                if !self.has_vertex(v) {
                    return Err(MinCutError::InvalidVertex(v));
                }
                if weight < 0 {
                    return Err(MinCutError::NegativeWeight { u, v, weight });
                }
                let backward = self.weight(v, u);
                if backward != weight {
                    return Err(MinCutError::AsymmetricWeight {
                        u,
                        v,
                        forward: weight,
                        backward,
                    });
                }
                if u < v {
                    total = total
                        .checked_add(weight)
                        .ok_or(MinCutError::WeightOverflow)?;
                }
            }
        }

        Ok(())
    }
}
