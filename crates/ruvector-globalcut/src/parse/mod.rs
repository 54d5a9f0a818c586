//! Named adjacency-list input
//!
//! Reads lines of the form `name: neighbor1 neighbor2 ...` into a [`Graph`]
//! whose ids follow the order in which names first appear, and maps cut
//! results back to names.
//!
//! Every listed pair is an undirected edge of weight 1. Listing the same pair
//! twice, from either side, does not raise its weight.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::{CutResult, MinCutEngine};
use crate::error::{MinCutError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// A graph together with its id <-> name mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedGraph {
    graph: Graph,
    names: Vec<String>,
    ids: HashMap<String, VertexId>,
}

/// A minimum cut expressed with vertex names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCut {
    /// Cut weight
    pub value: Weight,
    /// Side holding the rest of the graph, in id order
    pub left: Vec<String>,
    /// Side isolated by the winning phase, in id order
    pub right: Vec<String>,
    /// Original edges crossing the cut, oriented left -> right
    pub crossing_edges: Vec<(String, String, Weight)>,
    /// Number of phases that ran
    pub phases: usize,
}

impl NamedCut {
    /// Product of the two side sizes
    pub fn size_product(&self) -> usize {
        self.left.len() * self.right.len()
    }
}

impl NamedGraph {
    /// Name vertices of a dense weight matrix by their index
    pub fn from_matrix(rows: &[Vec<Weight>]) -> Result<Self> {
        let graph = Graph::from_matrix(rows)?;
        let names: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Ok(Self { graph, names, ids })
    }

    /// Underlying graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Names in id order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of a vertex id
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Id of a vertex name
    pub fn id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Id of a vertex name, or [`MinCutError::UnknownVertexName`]
    pub fn require_id(&self, name: &str) -> Result<VertexId> {
        self.id(name)
            .ok_or_else(|| MinCutError::UnknownVertexName(name.to_string()))
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no vertices
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Run `engine` on a copy of the graph and translate the answer to names
    pub fn solve(&self, engine: &MinCutEngine) -> Result<NamedCut> {
        let result = engine.global_min_cut(self.graph.clone())?;
        Ok(self.name_cut(&result))
    }

    /// Translate a cut over this graph's ids into names
    pub fn name_cut(&self, result: &CutResult) -> NamedCut {
        let (left, right) = &result.partition;

        let crossing_edges = result
            .cut_edges(&self.graph)
            .into_iter()
            .map(|e| {
                let (from, to) = if right.binary_search(&e.source).is_ok() {
                    (e.target, e.source)
                } else {
                    (e.source, e.target)
                };
                (self.label(from), self.label(to), e.weight)
            })
            .collect();

        NamedCut {
            value: result.value,
            left: left.iter().map(|&v| self.label(v)).collect(),
            right: right.iter().map(|&v| self.label(v)).collect(),
            crossing_edges,
            phases: result.phases,
        }
    }

    fn label(&self, id: VertexId) -> String {
        self.name(id)
            .map_or_else(|| id.to_string(), str::to_string)
    }

    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }
}

impl FromStr for NamedGraph {
    type Err = MinCutError;

    fn from_str(s: &str) -> Result<Self> {
        parse_adjacency_list(s)
    }
}

/// Parse `name: neighbor ...` lines into a [`NamedGraph`]
pub fn parse_adjacency_list(input: &str) -> Result<NamedGraph> {
    let mut named = NamedGraph {
        graph: Graph::default(),
        names: Vec::new(),
        ids: HashMap::new(),
    };
    let mut heads: HashSet<&str> = HashSet::new();
    let mut pairs: Vec<(VertexId, VertexId)> = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let (head, rest) = line.split_once(':').ok_or_else(|| MinCutError::Parse {
            line: line_no,
            message: "expected `name: neighbor ...`".to_string(),
        })?;

        let head = head.trim();
        if head.is_empty() || head.contains(char::is_whitespace) {
            return Err(MinCutError::Parse {
                line: line_no,
                message: format!("invalid vertex name `{}`", head),
            });
        }
        if !heads.insert(head) {
            return Err(MinCutError::DuplicateVertexName(head.to_string()));
        }

        let u = named.intern(head);
        for neighbor in rest.split_whitespace() {
            if neighbor == head {
                return Err(MinCutError::Parse {
                    line: line_no,
                    message: format!("vertex `{}` lists itself", head),
                });
            }
            let v = named.intern(neighbor);
            pairs.push((u, v));
        }
    }

    let mut graph = Graph::new(named.names.len());
    for (u, v) in pairs {
        if graph.weight(u, v) == 0 {
            graph.set_edge(u, v, 1)?;
        }
    }
    named.graph = graph;

    Ok(named)
}
