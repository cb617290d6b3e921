//! Graph algorithms for poem generation

use crate::graph::Graph;

/// Find the best bridge word between `from` and `to`.
///
/// A bridge is a vertex `b` with edges `from -> b` and `b -> to`. The one
/// with the largest summed weight wins; ties go to the lexicographically
/// smallest word. Both words are lowercased before lookup.
///
/// Returns the bridge word and its path weight.
pub fn find_bridge<G>(graph: &G, from: &str, to: &str) -> Option<(String, i64)>
where
    G: Graph<String> + ?Sized,
{
    let from = from.to_lowercase();
    let to = to.to_lowercase();

    let mut best: Option<(String, i64)> = None;

    for (intermediate, first) in graph.targets(&from) {
        // Only two-step paths ending at `to` count
        let second = match graph.targets(&intermediate).get(&to) {
            Some(&weight) => weight,
            None => continue,
        };

        let weight = i64::from(first) + i64::from(second);
        let better = match &best {
            None => true,
            Some((word, max)) => weight > *max || (weight == *max && intermediate < *word),
        };

        if better {
            best = Some((intermediate, weight));
        }
    }

    best
}
