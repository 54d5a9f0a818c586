//! Merge groups: which original vertices each surviving vertex stands for
//!
//! Contraction always folds `t` into `s`, so unlike a rank-balanced
//! union-find the survivor is dictated by the caller. Members are kept as
//! explicit ordered sets (cut partitions are read straight off them) and an
//! owner table answers `find` without walking parent chains.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{MinCutError, Result};
use crate::graph::VertexId;

/// Surviving vertex -> original vertices it represents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeGroups {
    groups: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// Original vertex -> current representative
    owner: BTreeMap<VertexId, VertexId>,
}

impl MergeGroups {
    /// One singleton group per vertex
    pub fn new(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut groups = BTreeMap::new();
        let mut owner = BTreeMap::new();
        for v in vertices {
            groups.insert(v, BTreeSet::from([v]));
            owner.insert(v, v);
        }
        Self { groups, owner }
    }

    /// Singleton groups for `0..n`
    pub fn singletons(n: usize) -> Self {
        Self::new(0..n)
    }

    /// Fold `t`'s group into `s`'s and drop `t`
    pub fn merge(&mut self, s: VertexId, t: VertexId) -> Result<()> {
        if s == t {
            return Err(MinCutError::SelfLoop(s));
        }
        if !self.groups.contains_key(&s) {
            return Err(MinCutError::InvalidVertex(s));
        }
        let absorbed = self
            .groups
            .remove(&t)
            .ok_or(MinCutError::InvalidVertex(t))?;

        for &member in &absorbed {
            self.owner.insert(member, s);
        }
        self.groups.entry(s).or_default().extend(absorbed);
        Ok(())
    }

    /// Original vertices represented by surviving vertex `v`
    pub fn group(&self, v: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.groups.get(&v)
    }

    /// Surviving vertex that currently represents `original`
    pub fn find(&self, original: VertexId) -> Option<VertexId> {
        self.owner.get(&original).copied()
    }

    /// Number of surviving groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of original vertices across all groups
    pub fn total_members(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Iterate (survivor, members) in ascending survivor order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &BTreeSet<VertexId>)> {
        self.groups.iter().map(|(&v, members)| (v, members))
    }
}
