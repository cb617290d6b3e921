//! Run summary persistence module

use anyhow::{Context, Result};
use crate::poet::{Bridge, GraphPoet};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::{json, to_string_pretty};

/// One generated poem, as recorded in the summary
pub struct PoemRecord {
    pub input: String,
    pub output: String,
    pub bridges: Vec<Bridge>,
}

impl PoemRecord {
    /// Generate the poem for `input` and capture its bridges
    pub fn generate(poet: &GraphPoet, input: &str) -> Self {
        Self {
            input: input.to_string(),
            output: poet.poem(input),
            bridges: poet.bridges(input),
        }
    }
}

/// Save a JSON summary of a poem run to the specified directory.
///
/// Returns the path of the written file.
pub fn save_summary(
    poet: &GraphPoet,
    corpus: &Path,
    poems: &[PoemRecord],
    output_dir: &Path,
) -> Result<PathBuf> {
    log::info!("Saving summary of {} poems to {}", poems.len(), output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let path = output_dir.join("summary.json");
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let graph = poet.graph();
    let summary = json!({
        "corpus": corpus.display().to_string(),
        "representation": poet.representation(),
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "poems": poems.iter().map(|p| {
            json!({
                "input": p.input,
                "output": p.output,
                "bridges": p.bridges.iter().map(|b| {
                    json!({
                        "after": b.after,
                        "before": b.before,
                        "bridge": b.bridge,
                        "weight": b.weight,
                    })
                }).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    log::info!("Summary saved successfully");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::graph::Representation;

    #[test]
    fn writes_counts_and_bridges() {
        let dir = tempfile::tempdir().unwrap();
        let poet = GraphPoet::from_corpus(
            "words that are",
            &Config::new(Representation::EdgeList),
        );
        let poems = vec![PoemRecord::generate(&poet, "Words are words")];

        let path = save_summary(&poet, Path::new("cases.txt"), &poems, &dir.path().join("out")).unwrap();
        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(summary["corpus"], "cases.txt");
        assert_eq!(summary["representation"], "edge-list");
        assert_eq!(summary["vertex_count"], 3);
        assert_eq!(summary["edge_count"], 2);
        assert_eq!(summary["poems"][0]["output"], "Words that are words");
        assert_eq!(summary["poems"][0]["bridges"][0]["bridge"], "that");
        assert_eq!(summary["poems"][0]["bridges"][0]["after"], "Words");
        assert_eq!(summary["poems"][0]["bridges"][0]["weight"], 2);
    }
}
