//! Stoer-Wagner Global Minimum Cut
//!
//! Provides the contraction-based global minimum cut with:
//! - Deterministic maximum-adjacency ordering (lowest id starts, lowest id wins ties)
//! - One contraction per phase, so at most `n - 1` phases
//! - The minimum cut-of-the-phase over all phases as the answer
//!
//! Each phase orders the active vertices by how tightly they attach to the
//! vertices already ordered. The last vertex `t` is then separated from the
//! rest by exactly its attachment weight, and by the Stoer-Wagner theorem the
//! cheapest such cut over all phases is a global minimum cut.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MinCutError, Result};
use crate::graph::{Edge, Graph, VertexId, Weight};
use crate::merge::MergeGroups;

/// Configuration for the minimum cut engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCutConfig {
    /// Vertex that seeds every phase; the lowest active id when unset or
    /// no longer active
    pub start_vertex: Option<VertexId>,
    /// Stop after the first zero-weight phase
    pub stop_at_zero: bool,
}

/// Outcome of a single phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCut {
    /// Second-to-last vertex of the ordering (survives the contraction)
    pub s: VertexId,
    /// Last vertex of the ordering (absorbed into `s`)
    pub t: VertexId,
    /// Original vertices `s` stood for before the contraction
    pub s_group: Vec<VertexId>,
    /// Original vertices `t` stood for
    pub t_group: Vec<VertexId>,
    /// Cut-of-the-phase: weight between `t` and every other active vertex
    pub weight: Weight,
}

/// Result of a global minimum cut computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutResult {
    /// The minimum cut value
    pub value: Weight,
    /// (rest, isolated): the winning phase's `t` group and its complement
    pub partition: (Vec<VertexId>, Vec<VertexId>),
    /// The winning phase's (`s` group, `t` group)
    pub phase_sets: (Vec<VertexId>, Vec<VertexId>),
    /// Number of phases that ran
    pub phases: usize,
}

impl CutResult {
    /// Sizes of the two sides
    pub fn side_sizes(&self) -> (usize, usize) {
        (self.partition.0.len(), self.partition.1.len())
    }

    /// Product of the two side sizes
    pub fn size_product(&self) -> usize {
        let (a, b) = self.side_sizes();
        a * b
    }

    /// Check if `u` and `v` lie on different sides
    pub fn separates(&self, u: VertexId, v: VertexId) -> bool {
        let (left, right) = &self.partition;
        let side = |x: VertexId| {
            if left.binary_search(&x).is_ok() {
                Some(false)
            } else if right.binary_search(&x).is_ok() {
                Some(true)
            } else {
                None
            }
        };
        matches!((side(u), side(v)), (Some(a), Some(b)) if a != b)
    }

    /// Edges of `original` crossing the partition
    pub fn cut_edges(&self, original: &Graph) -> Vec<Edge> {
        original
            .edges()
            .into_iter()
            .filter(|e| self.separates(e.source, e.target))
            .collect()
    }
}

/// Global minimum cut engine
#[derive(Debug, Clone, Default)]
pub struct MinCutEngine {
    config: MinCutConfig,
}

impl MinCutEngine {
    /// Create an engine with the given configuration
    pub fn new(config: MinCutConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    pub fn config(&self) -> &MinCutConfig {
        &self.config
    }

    /// Compute a global minimum cut, consuming the graph
    ///
    /// The graph is validated before any phase runs. Clone it first if the
    /// original is still needed, e.g. for [`CutResult::cut_edges`].
    pub fn global_min_cut(&self, mut graph: Graph) -> Result<CutResult> {
        graph.validate()?;

        let start_time = Instant::now();
        let vertices = graph.vertices();
        let mut groups = MergeGroups::new(vertices.iter().copied());

        let mut best: Option<PhaseCut> = None;
        let mut phases = 0;

        while graph.num_vertices() > 1 {
            let phase = self.min_cut_phase(&mut graph, &mut groups)?;
            phases += 1;
            debug!(
                phase = phases,
                s = phase.s,
                t = phase.t,
                weight = phase.weight,
                "cut of the phase"
            );

            let reached_zero = phase.weight == 0;
            if best.as_ref().map_or(true, |b| phase.weight < b.weight) {
                best = Some(phase);
            }
            if reached_zero && self.config.stop_at_zero {
                debug!(phase = phases, "zero-weight cut found, stopping early");
                break;
            }
        }

        let best = best.ok_or(MinCutError::TooFewVertices(vertices.len()))?;

        let isolated: BTreeSet<VertexId> = best.t_group.iter().copied().collect();
        let rest: Vec<VertexId> = vertices
            .iter()
            .copied()
            .filter(|v| !isolated.contains(v))
            .collect();

        info!(
            value = best.weight,
            phases,
            vertices = vertices.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "global minimum cut computed"
        );

        Ok(CutResult {
            value: best.weight,
            partition: (rest, best.t_group.clone()),
            phase_sets: (best.s_group, best.t_group),
            phases,
        })
    }

    /// Run one phase: order by maximum adjacency, then contract `t` into `s`
    ///
    /// `groups` must hold a group for every active vertex of `graph`.
    pub fn min_cut_phase(&self, graph: &mut Graph, groups: &mut MergeGroups) -> Result<PhaseCut> {
        let n = graph.num_vertices();
        if n < 2 {
            return Err(MinCutError::TooFewVertices(n));
        }

        let start = self
            .config
            .start_vertex
            .filter(|&v| graph.has_vertex(v))
            .or_else(|| graph.first_vertex())
            .ok_or(MinCutError::TooFewVertices(n))?;

        // Weight from each vertex outside A to the vertices in A
        let mut attachment: BTreeMap<VertexId, Weight> = graph
            .vertices()
            .into_iter()
            .filter(|&v| v != start)
            .map(|v| (v, 0))
            .collect();
        absorb(graph, &mut attachment, start);

        let mut s = start;
        let mut t = start;
        let mut weight = 0;

        while let Some((next, next_weight)) = most_tightly_connected(&attachment) {
            attachment.remove(&next);
            absorb(graph, &mut attachment, next);
            s = t;
            t = next;
            weight = next_weight;
        }

        let s_group = member_list(groups, s)?;
        let t_group = member_list(groups, t)?;

        graph.contract(s, t)?;
        groups.merge(s, t)?;

        Ok(PhaseCut {
            s,
            t,
            s_group,
            t_group,
            weight,
        })
    }
}

/// Builder for [`MinCutEngine`]
#[derive(Debug, Clone, Default)]
pub struct MinCutBuilder {
    config: MinCutConfig,
}

impl MinCutBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every phase from `v`
    pub fn start_vertex(mut self, v: VertexId) -> Self {
        self.config.start_vertex = Some(v);
        self
    }

    /// Stop after the first zero-weight phase
    pub fn stop_at_zero(mut self, enabled: bool) -> Self {
        self.config.stop_at_zero = enabled;
        self
    }

    /// Build the engine
    pub fn build(self) -> MinCutEngine {
        MinCutEngine::new(self.config)
    }
}

/// Global minimum cut with the default engine
pub fn global_min_cut(graph: Graph) -> Result<CutResult> {
    MinCutEngine::default().global_min_cut(graph)
}

/// One phase with the default engine
pub fn min_cut_phase(graph: &mut Graph, groups: &mut MergeGroups) -> Result<PhaseCut> {
    MinCutEngine::default().min_cut_phase(graph, groups)
}

/// Highest attachment, lowest id on ties
fn most_tightly_connected(attachment: &BTreeMap<VertexId, Weight>) -> Option<(VertexId, Weight)> {
    attachment
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(&v, &w)| (v, w))
}

/// Move `added` into A: credit its edges to the vertices still outside
fn absorb(graph: &Graph, attachment: &mut BTreeMap<VertexId, Weight>, added: VertexId) {
    for (v, w) in graph.neighbors(added) {
        if let Some(total) = attachment.get_mut(&v) {
            *total = total.saturating_add(w);
        }
    }
}

fn member_list(groups: &MergeGroups, v: VertexId) -> Result<Vec<VertexId>> {
    groups
        .group(v)
        .map(|members| members.iter().copied().collect())
        .ok_or(MinCutError::InvalidVertex(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(n: usize, edges: &[(VertexId, VertexId, Weight)]) -> Graph {
        let mut g = Graph::new(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    /// Triangle 0-1-2 with pendant 3 hanging off 2
    fn triangle_with_pendant() -> Graph {
        graph_from(4, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)])
    }

    #[test]
    fn test_triangle_with_pendant() {
        let g = triangle_with_pendant();
        let result = global_min_cut(g.clone()).unwrap();

        assert_eq!(result.value, 1);
        assert_eq!(result.partition, (vec![0, 1, 2], vec![3]));
        assert_eq!(result.phase_sets, (vec![2], vec![3]));
        assert_eq!(result.phases, 3);
        assert_eq!(result.cut_edges(&g), vec![Edge::new(2, 3, 1)]);
        assert_eq!(result.size_product(), 3);
    }

    #[test]
    fn test_two_triangles_joined_by_bridge() {
        let g = graph_from(
            6,
            &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)],
        );
        let result = global_min_cut(g).unwrap();

        assert_eq!(result.value, 1);
        assert_eq!(result.partition, (vec![0, 1, 2], vec![3, 4, 5]));
        assert_eq!(result.phases, 5);
    }

    #[test]
    fn test_phase_contracts_last_two() {
        let mut g = triangle_with_pendant();
        let mut groups = MergeGroups::singletons(4);

        let phase = min_cut_phase(&mut g, &mut groups).unwrap();

        assert_eq!(phase.s, 2);
        assert_eq!(phase.t, 3);
        assert_eq!(phase.weight, 1);
        assert_eq!(phase.s_group, vec![2]);
        assert_eq!(phase.t_group, vec![3]);

        assert_eq!(g.num_vertices(), 3);
        assert!(!g.has_vertex(3));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.total_members(), 4);
        assert_eq!(groups.find(3), Some(2));
    }

    #[test]
    fn test_phase_weight_is_attachment_of_last_vertex() {
        // After the first contraction the second phase isolates {2, 3}
        let mut g = triangle_with_pendant();
        let mut groups = MergeGroups::singletons(4);
        min_cut_phase(&mut g, &mut groups).unwrap();

        let phase = min_cut_phase(&mut g, &mut groups).unwrap();
        assert_eq!((phase.s, phase.t), (1, 2));
        assert_eq!(phase.t_group, vec![2, 3]);
        assert_eq!(phase.weight, 2);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.weight(0, 1), 2);
    }

    #[test]
    fn test_phase_requires_two_vertices() {
        let mut g = Graph::new(1);
        let mut groups = MergeGroups::singletons(1);
        assert_eq!(
            min_cut_phase(&mut g, &mut groups),
            Err(MinCutError::TooFewVertices(1))
        );
    }

    #[test]
    fn test_phase_with_missing_group() {
        let mut g = graph_from(3, &[(0, 1, 1), (1, 2, 1)]);
        let mut groups = MergeGroups::new([0, 1]);
        assert_eq!(
            min_cut_phase(&mut g, &mut groups),
            Err(MinCutError::InvalidVertex(2))
        );
    }

    #[test]
    fn test_ties_break_by_lowest_id() {
        // Star with equal spokes: every spoke ties, so ids decide the order
        let g = graph_from(4, &[(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
        let mut groups = MergeGroups::singletons(4);
        let mut g2 = g.clone();
        let phase = min_cut_phase(&mut g2, &mut groups).unwrap();
        assert_eq!((phase.s, phase.t), (2, 3));

        let result = global_min_cut(g).unwrap();
        assert_eq!(result.value, 1);
        assert_eq!(result.partition, (vec![0, 1, 2], vec![3]));
    }

    #[test]
    fn test_cycle() {
        let n = 7;
        let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, 1)).collect();
        let result = global_min_cut(graph_from(n, &edges)).unwrap();
        assert_eq!(result.value, 2);
    }

    #[test]
    fn test_disconnected() {
        let g = graph_from(4, &[(0, 1, 1), (2, 3, 1)]);
        let result = global_min_cut(g.clone()).unwrap();
        assert_eq!(result.value, 0);
        assert!(result.cut_edges(&g).is_empty());
        assert_eq!(result.partition, (vec![0, 1], vec![2, 3]));
    }

    #[test]
    fn test_isolated_vertex() {
        let g = graph_from(3, &[(0, 1, 5)]);
        let result = global_min_cut(g).unwrap();
        assert_eq!(result.value, 0);
        assert_eq!(result.partition.1, vec![2]);
    }

    #[test]
    fn test_stoer_wagner_paper_graph() {
        let g = graph_from(
            8,
            &[
                (0, 1, 2),
                (0, 4, 3),
                (1, 2, 3),
                (1, 4, 2),
                (1, 5, 2),
                (2, 3, 4),
                (2, 6, 2),
                (3, 6, 2),
                (3, 7, 2),
                (4, 5, 3),
                (5, 6, 1),
                (6, 7, 3),
            ],
        );
        let result = global_min_cut(g.clone()).unwrap();

        assert_eq!(result.value, 4);
        assert_eq!(result.partition, (vec![0, 1, 4, 5], vec![2, 3, 6, 7]));
        assert_eq!(result.phases, 7);
        assert_eq!(
            result.cut_edges(&g),
            vec![Edge::new(1, 2, 3), Edge::new(5, 6, 1)]
        );
    }

    #[test]
    fn test_fixed_start_vertex() {
        let g = triangle_with_pendant();
        let engine = MinCutBuilder::new().start_vertex(1).build();
        let result = engine.global_min_cut(g).unwrap();
        assert_eq!(result.value, 1);
        assert_eq!(result.partition.1, vec![3]);

        // An unknown start falls back to the lowest id
        let engine = MinCutBuilder::new().start_vertex(99).build();
        let result = engine.global_min_cut(triangle_with_pendant()).unwrap();
        assert_eq!(result.phase_sets, (vec![2], vec![3]));
    }

    #[test]
    fn test_stop_at_zero() {
        let g = graph_from(5, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);

        let full = global_min_cut(g.clone()).unwrap();
        let early = MinCutBuilder::new().stop_at_zero(true).build().global_min_cut(g).unwrap();

        assert_eq!(full.value, 0);
        assert_eq!(early.value, 0);
        assert_eq!(full.partition, early.partition);
        assert!(early.phases < full.phases);
        assert_eq!(full.phases, 4);
    }

    #[test]
    fn test_invalid_graph_fails_fast() {
        assert_eq!(global_min_cut(Graph::new(1)), Err(MinCutError::TooFewVertices(1)));

        let json = r#"{"adjacency":{"0":{"1":-1},"1":{"0":-1}},"capacity":2}"#;
        let g: Graph = serde_json::from_str(json).unwrap();
        assert_eq!(
            global_min_cut(g),
            Err(MinCutError::NegativeWeight { u: 0, v: 1, weight: -1 })
        );
    }

    #[test]
    fn test_separates() {
        let result = global_min_cut(triangle_with_pendant()).unwrap();
        assert!(result.separates(0, 3));
        assert!(result.separates(3, 2));
        assert!(!result.separates(0, 1));
        assert!(!result.separates(0, 42));
    }

    #[test]
    fn test_builder_config() {
        let engine = MinCutBuilder::new().start_vertex(4).stop_at_zero(true).build();
        assert_eq!(engine.config().start_vertex, Some(4));
        assert!(engine.config().stop_at_zero);
        assert_eq!(MinCutEngine::default().config(), &MinCutConfig::default());
    }
}
