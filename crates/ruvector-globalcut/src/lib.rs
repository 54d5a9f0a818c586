//! # RuVector GlobalCut
//!
//! Deterministic Stoer-Wagner global minimum cut for weighted undirected graphs.
//!
//! The engine repeatedly runs a maximum-adjacency phase, records the
//! cut-of-the-phase and contracts the last two vertices of the ordering. The
//! cheapest phase over the whole run is a global minimum cut.
//!
//! ## Features
//!
//! - **Deterministic**: the lowest active id seeds each phase and wins ties
//! - **Explicit bookkeeping**: [`Graph`] rows plus separate [`MergeGroups`]
//! - **Named input**: `name: neighbor ...` adjacency lists via [`parse_adjacency_list`]
//! - **Fail fast**: invalid graphs are rejected before any phase runs
//!
//! ## Quick Start
//!
//! ```rust
//! use ruvector_globalcut::prelude::*;
//!
//! // Triangle 0-1-2 with a pendant vertex 3
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1).unwrap();
//! graph.add_edge(1, 2, 1).unwrap();
//! graph.add_edge(2, 0, 1).unwrap();
//! graph.add_edge(2, 3, 1).unwrap();
//!
//! let result = global_min_cut(graph.clone()).unwrap();
//! assert_eq!(result.value, 1);
//! assert_eq!(result.partition, (vec![0, 1, 2], vec![3]));
//! assert_eq!(result.cut_edges(&graph), vec![Edge::new(2, 3, 1)]);
//! ```
//!
//! ### Named adjacency lists
//!
//! ```rust
//! use ruvector_globalcut::{parse_adjacency_list, MinCutBuilder};
//!
//! let named = parse_adjacency_list("a: b c\nb: c\nd: e f c\ne: f").unwrap();
//! let cut = named.solve(&MinCutBuilder::new().build()).unwrap();
//!
//! assert_eq!(cut.value, 1);
//! assert_eq!(cut.left, vec!["a", "b", "c"]);
//! assert_eq!(cut.right, vec!["d", "e", "f"]);
//! ```
//!
//! ## Architecture
//!
//! - [`graph`]: adjacency rows keyed by stable vertex ids, contraction
//! - [`merge`]: original vertices behind each surviving vertex
//! - [`algorithm`]: phases, the engine and its configuration
//! - [`parse`]: named adjacency-list input and named results

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod graph;
pub mod merge;
pub mod algorithm;
pub mod parse;

pub use error::{MinCutError, Result};
pub use graph::{Edge, Graph, GraphStats, VertexId, Weight};
pub use merge::MergeGroups;
pub use algorithm::{
    global_min_cut, min_cut_phase, CutResult, MinCutBuilder, MinCutConfig, MinCutEngine,
    PhaseCut,
};
pub use parse::{parse_adjacency_list, NamedCut, NamedGraph};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module with commonly used types

    pub use crate::{
        global_min_cut, min_cut_phase, parse_adjacency_list, CutResult, Edge, Graph, MergeGroups,
        MinCutBuilder, MinCutConfig, MinCutEngine, MinCutError, NamedCut, NamedGraph, PhaseCut,
        Result, VertexId, Weight,
    };
}
