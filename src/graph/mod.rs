//! Graph representation and algorithms module

pub mod adjacency;
pub mod algorithms;
pub mod builder;
pub mod edge_list;

pub use adjacency::AdjacencyGraph;
pub use builder::AffinityBuilder;
pub use edge_list::EdgeListGraph;

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Write};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A mutable, weighted, directed graph with vertices labeled by `L`.
///
/// The graph is simple: at most one edge exists for each ordered pair of
/// vertices, and every stored weight is nonzero. Self-loops are allowed.
///
/// Query results are snapshots. Mutating a returned set or map never
/// changes the graph.
pub trait Graph<L> {
    /// Add a vertex. Returns true if it was not already present.
    fn add(&mut self, vertex: L) -> bool;

    /// Add, change, or remove the edge from `source` to `target`.
    ///
    /// A nonzero `weight` creates or replaces the edge and adds both
    /// endpoints as vertices when missing. A zero `weight` removes the edge
    /// if it exists and otherwise leaves the graph untouched.
    ///
    /// Returns the previous weight, or 0 if there was no such edge.
    fn set(&mut self, source: L, target: L, weight: i32) -> i32;

    /// Remove a vertex together with every edge incident to it.
    /// Returns true if the vertex was present.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Snapshot of the vertex labels.
    fn vertices(&self) -> HashSet<L>;

    /// Sources of edges pointing into `target`, with their weights.
    fn sources(&self, target: &L) -> HashMap<L, i32>;

    /// Targets of edges leaving `source`, with their weights.
    fn targets(&self, source: &L) -> HashMap<L, i32>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.vertices().iter().map(|v| self.targets(v).len()).sum()
    }

    /// Returns true when `vertex` is in the graph.
    fn contains(&self, vertex: &L) -> bool
    where
        L: Eq + Hash,
    {
        self.vertices().contains(vertex)
    }

    /// Weight of the edge from `source` to `target`, or 0 if absent.
    fn weight(&self, source: &L, target: &L) -> i32
    where
        L: Eq + Hash,
    {
        self.targets(source).get(target).copied().unwrap_or(0)
    }
}

impl<L, G> Graph<L> for Box<G>
where
    G: Graph<L> + ?Sized,
{
    fn add(&mut self, vertex: L) -> bool {
        (**self).add(vertex)
    }

    fn set(&mut self, source: L, target: L, weight: i32) -> i32 {
        (**self).set(source, target, weight)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        (**self).remove(vertex)
    }

    fn vertices(&self) -> HashSet<L> {
        (**self).vertices()
    }

    fn sources(&self, target: &L) -> HashMap<L, i32> {
        (**self).sources(target)
    }

    fn targets(&self, source: &L) -> HashMap<L, i32> {
        (**self).targets(source)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

/// Internal storage strategy for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Flat list of (source, target, weight) edges
    EdgeList,

    /// Per-vertex map from neighbor to weight
    #[default]
    Adjacency,
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::EdgeList => f.write_str("edge-list"),
            Representation::Adjacency => f.write_str("adjacency"),
        }
    }
}

/// Create an empty graph with the requested representation
pub fn empty<L>(representation: Representation) -> Box<dyn Graph<L>>
where
    L: Clone + Eq + Hash + 'static,
{
    match representation {
        Representation::EdgeList => Box::new(EdgeListGraph::new()),
        Representation::Adjacency => Box::new(AdjacencyGraph::new()),
    }
}

/// Render any graph in the debug dump layout, with vertices and edges sorted
pub fn render<L, G>(graph: &G) -> String
where
    L: Clone + Ord + Hash + Display,
    G: Graph<L> + ?Sized,
{
    let mut vertices: Vec<L> = graph.vertices().into_iter().collect();
    vertices.sort();

    let mut out = String::from("vertices:\n");
    for v in &vertices {
        let _ = writeln!(out, "{}", v);
    }

    out.push_str("\nedges:\n");
    for source in &vertices {
        let mut targets: Vec<(L, i32)> = graph.targets(source).into_iter().collect();
        targets.sort();
        for (target, weight) in targets {
            let _ = writeln!(out, "{} -> {} ({})", source, target, weight);
        }
    }

    out
}
