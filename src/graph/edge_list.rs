//! Edge-list graph representation

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;
use std::num::NonZeroI32;

use crate::graph::Graph;

/// A single weighted directed edge
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge<L> {
    source: L,
    target: L,
    weight: NonZeroI32,
}

impl<L: Display> Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// Graph stored as a vertex set plus a flat list of edges.
///
/// Enumerating all edges is a plain slice walk; neighbor queries scan the
/// whole list.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L> {
    vertices: HashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> EdgeListGraph<L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| &e.source == source && &e.target == target)
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut seen = HashSet::with_capacity(self.edges.len());
            for e in &self.edges {
                debug_assert!(
                    seen.insert((&e.source, &e.target)),
                    "duplicate edge in edge list"
                );
                debug_assert!(self.vertices.contains(&e.source), "edge source is not a vertex");
                debug_assert!(self.vertices.contains(&e.target), "edge target is not a vertex");
            }
        }
    }
}

impl<L: Clone + Eq + Hash> Graph<L> for EdgeListGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        self.vertices.insert(vertex)
    }

    fn set(&mut self, source: L, target: L, weight: i32) -> i32 {
        let existing = self.position(&source, &target);

        let previous = match NonZeroI32::new(weight) {
            Some(weight) => match existing {
                Some(idx) => std::mem::replace(&mut self.edges[idx].weight, weight).get(),
                None => {
                    self.vertices.insert(source.clone());
                    self.vertices.insert(target.clone());
                    self.edges.push(Edge { source, target, weight });
                    0
                }
            },
            None => existing
                .map(|idx| self.edges.swap_remove(idx).weight.get())
                .unwrap_or(0),
        };

        self.check_rep();
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }

        self.edges
            .retain(|e| &e.source != vertex && &e.target != vertex);

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> HashMap<L, i32> {
        self.edges
            .iter()
            .filter(|e| &e.target == target)
            .map(|e| (e.source.clone(), e.weight.get()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, i32> {
        self.edges
            .iter()
            .filter(|e| &e.source == source)
            .map(|e| (e.target.clone(), e.weight.get()))
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: Display> Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:")?;
        for v in &self.vertices {
            writeln!(f, "{}", v)?;
        }

        writeln!(f)?;
        writeln!(f, "edges:")?;
        for e in &self.edges {
            writeln!(f, "{}", e)?;
        }

        Ok(())
    }
}
