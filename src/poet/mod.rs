//! Graph-based poem generation module

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::corpus;
use crate::error::PoetError;
use crate::graph::{self, algorithms, AffinityBuilder, Graph, Representation};

/// A bridge word inserted between two adjacent input words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    /// Index of the pair in the input (0 for the first two words)
    pub position: usize,

    /// Input word preceding the bridge, original case
    pub after: String,

    /// Input word following the bridge, original case
    pub before: String,

    /// The inserted word, lowercase
    pub bridge: String,

    /// Summed weight of the two-edge path
    pub weight: i64,
}

/// Poem generator backed by a word-affinity graph.
///
/// Between every pair of adjacent input words `w1 w2` the poet inserts the
/// word `b` for which `w1 -> b -> w2` is the heaviest two-edge path in the
/// affinity graph, if any such path exists. Input words keep their case;
/// bridge words are lowercase.
pub struct GraphPoet {
    graph: Box<dyn Graph<String>>,
    representation: Representation,
}

impl GraphPoet {
    /// Create a poet from a corpus file
    pub fn from_file(path: impl AsRef<Path>, config: &Config) -> Result<Self, PoetError> {
        let lines = corpus::read_lines(path)?;
        Ok(Self::from_lines(lines, config))
    }

    /// Create a poet from corpus lines already in memory
    pub fn from_lines<I, S>(lines: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AffinityBuilder::new(graph::empty::<String>(config.representation));
        builder.push_lines(lines);
        let graph = builder.build();

        log::info!(
            "Affinity graph ready ({}): {} vertices, {} edges",
            config.representation,
            graph.vertex_count(),
            graph.edge_count()
        );

        let poet = Self {
            graph,
            representation: config.representation,
        };
        poet.check_rep();
        poet
    }

    /// Create a poet from a corpus held in a single string
    pub fn from_corpus(corpus: &str, config: &Config) -> Self {
        Self::from_lines(corpus.lines(), config)
    }

    /// The affinity graph
    pub fn graph(&self) -> &dyn Graph<String> {
        &*self.graph
    }

    /// Representation of the affinity graph
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Every bridge that `poem` would insert for this input
    pub fn bridges(&self, input: &str) -> Vec<Bridge> {
        let words: Vec<&str> = input.split_whitespace().collect();

        let bridges: Vec<Bridge> = words
            .windows(2)
            .enumerate()
            .filter_map(|(position, pair)| {
                algorithms::find_bridge(self.graph(), pair[0], pair[1]).map(|(bridge, weight)| {
                    log::debug!(
                        "Bridge {:?} between {:?} and {:?} (weight {})",
                        bridge,
                        pair[0],
                        pair[1],
                        weight
                    );
                    Bridge {
                        position,
                        after: pair[0].to_string(),
                        before: pair[1].to_string(),
                        bridge,
                        weight,
                    }
                })
            })
            .collect();

        self.check_rep();
        bridges
    }

    /// The poem for this input, as a sequence of words
    pub fn poem_words(&self, input: &str) -> Vec<String> {
        let mut bridges = self.bridges(input).into_iter().peekable();
        let mut output = Vec::new();

        for (idx, word) in input.split_whitespace().enumerate() {
            if idx > 0 {
                if let Some(bridge) = bridges.next_if(|b| b.position == idx - 1) {
                    output.push(bridge.bridge);
                }
            }
            output.push(word.to_string());
        }

        output
    }

    /// Generate a poem: the input words, single-space separated, with bridge
    /// words inserted
    pub fn poem(&self, input: &str) -> String {
        self.poem_words(input).join(" ")
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            for vertex in self.graph.vertices() {
                debug_assert_eq!(vertex, vertex.to_lowercase(), "affinity graph vertex is not lowercase");
            }
        }
    }
}

impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&graph::render::<String, _>(self.graph()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poet(corpus: &str) -> GraphPoet {
        GraphPoet::from_corpus(corpus, &Config::default())
    }

    #[test]
    fn inserts_bridge_from_corpus() {
        let poet = poet("This is a test of the Mugar Omni Theater sound system.");
        assert_eq!(poet.poem("Test the system."), "Test of the system.");
    }

    #[test]
    fn bridges_report_positions() {
        let poet = poet("the first and second");
        let bridges = poet.bridges("The first second");

        assert_eq!(
            bridges,
            vec![Bridge {
                position: 1,
                after: "first".to_string(),
                before: "second".to_string(),
                bridge: "and".to_string(),
                weight: 2,
            }]
        );
    }

    #[test]
    fn whitespace_is_collapsed() {
        let poet = poet("");
        assert_eq!(poet.poem("  spaced \t out\n words "), "spaced out words");
        assert_eq!(poet.poem(""), "");
        assert!(poet.poem_words("   ").is_empty());
    }

    #[test]
    fn display_dumps_graph() {
        let poet = poet("a b");
        assert_eq!(poet.to_string(), "vertices:\na\nb\n\nedges:\na -> b (1)\n");
    }
}
