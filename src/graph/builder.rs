//! Word-affinity graph construction

use crate::graph::Graph;

/// Builder that counts word adjacencies into a graph.
///
/// Words are maximal runs of non-whitespace, compared case-insensitively.
/// The weight of `w1 -> w2` is the number of times `w2` directly follows
/// `w1`. Line breaks are treated like any other whitespace, so the last word
/// of one line is adjacent to the first word of the next.
pub struct AffinityBuilder<G> {
    graph: G,

    /// Lowercased previous word, if any word has been seen
    last_word: Option<String>,

    /// Number of words consumed so far
    word_count: usize,
}

impl<G: Graph<String>> AffinityBuilder<G> {
    /// Create a builder that fills the given graph
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            last_word: None,
            word_count: 0,
        }
    }

    /// Consume one line of corpus text
    pub fn push_line(&mut self, line: &str) {
        for word in line.split_whitespace() {
            let word = word.to_lowercase();

            if let Some(last) = self.last_word.take() {
                let weight = self.graph.weight(&last, &word);
                self.graph.set(last, word.clone(), weight + 1);
            }

            self.last_word = Some(word);
            self.word_count += 1;
        }
    }

    /// Consume every line from an iterator
    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Number of words consumed so far
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Finish building and return the affinity graph
    pub fn build(self) -> G {
        log::debug!(
            "Built affinity graph from {} words: {} vertices, {} edges",
            self.word_count,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        self.graph
    }
}
