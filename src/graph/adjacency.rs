//! Adjacency-map graph representation

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use crate::graph::Graph;

/// A vertex together with its outgoing edges
#[derive(Debug, Clone)]
struct Vertex<L> {
    label: L,

    /// Outgoing edges keyed by target label; weights are never zero
    targets: HashMap<L, i32>,
}

impl<L> Vertex<L> {
    fn new(label: L) -> Self {
        Self {
            label,
            targets: HashMap::new(),
        }
    }
}

/// Graph stored as a list of vertices, each owning a map of its neighbors.
///
/// Outgoing lookups are a hash probe; incoming lookups visit every vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    /// Mapping from labels to slots in `vertices`
    index: HashMap<L, usize>,

    vertices: Vec<Vertex<L>>,
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> AdjacencyGraph<L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the slot for the given label
    fn get_or_create_vertex(&mut self, label: &L) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }

        let idx = self.vertices.len();
        self.index.insert(label.clone(), idx);
        self.vertices.push(Vertex::new(label.clone()));
        idx
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            debug_assert_eq!(self.index.len(), self.vertices.len());
            for (slot, vertex) in self.vertices.iter().enumerate() {
                debug_assert_eq!(self.index.get(&vertex.label), Some(&slot));
                for (target, &weight) in &vertex.targets {
                    debug_assert!(weight != 0, "zero weight stored in adjacency map");
                    debug_assert!(self.index.contains_key(target), "edge target is not a vertex");
                }
            }
        }
    }
}

impl<L: Clone + Eq + Hash> Graph<L> for AdjacencyGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }

        self.get_or_create_vertex(&vertex);
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: i32) -> i32 {
        let previous = if weight == 0 {
            self.index
                .get(&source)
                .and_then(|&idx| self.vertices[idx].targets.remove(&target))
                .unwrap_or(0)
        } else {
            self.get_or_create_vertex(&target);
            let idx = self.get_or_create_vertex(&source);
            self.vertices[idx]
                .targets
                .insert(target, weight)
                .unwrap_or(0)
        };

        self.check_rep();
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(idx) = self.index.remove(vertex) else {
            return false;
        };

        self.vertices.swap_remove(idx);
        if let Some(moved) = self.vertices.get(idx) {
            self.index.insert(moved.label.clone(), idx);
        }

        for v in &mut self.vertices {
            v.targets.remove(vertex);
        }

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().map(|v| v.label.clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, i32> {
        self.vertices
            .iter()
            .filter_map(|v| v.targets.get(target).map(|&w| (v.label.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, i32> {
        self.index
            .get(source)
            .map(|&idx| self.vertices[idx].targets.clone())
            .unwrap_or_default()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.targets.len()).sum()
    }
}

impl<L: Display> Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:")?;
        for v in &self.vertices {
            writeln!(f, "{}", v.label)?;
        }

        writeln!(f)?;
        writeln!(f, "edges:")?;
        for v in &self.vertices {
            for (target, weight) in &v.targets {
                writeln!(f, "{} -> {} ({})", v.label, target, weight)?;
            }
        }

        Ok(())
    }
}
