use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use graph_poet::config::Config;
use graph_poet::graph::{self, Representation};
use graph_poet::storage::{self, PoemRecord};
use graph_poet::GraphPoet;

#[derive(Parser, Debug)]
#[clap(
    name = "graph-poet",
    about = "Insert bridge words into text using a word-affinity graph"
)]
struct Cli {
    /// Path to the corpus text file
    #[clap(long)]
    corpus: PathBuf,

    /// Input line to turn into a poem (reads stdin lines when omitted)
    #[clap(long)]
    input: Option<String>,

    /// Graph representation used for the affinity graph
    #[clap(long, value_enum, default_value_t = Representation::Adjacency)]
    representation: Representation,

    /// Directory to write summary.json into
    #[clap(long)]
    summary: Option<PathBuf>,

    /// Print the affinity graph to stderr
    #[clap(long)]
    dump_graph: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Corpus: {}", args.corpus.display());

    let config = Config::new(args.representation);
    let poet = GraphPoet::from_file(&args.corpus, &config)
        .with_context(|| format!("loading corpus {}", args.corpus.display()))?;

    if args.dump_graph {
        eprint!("{}", graph::render::<String, _>(poet.graph()));
    }

    let inputs = match args.input {
        Some(input) => vec![input],
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("reading input from stdin")?,
    };

    let mut records = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let record = PoemRecord::generate(&poet, input);
        println!("{}", record.output);
        records.push(record);
    }

    log::info!("Generated {} poems", records.len());

    if let Some(dir) = &args.summary {
        let path = storage::save_summary(&poet, &args.corpus, &records, dir)?;
        log::info!("Summary written to {}", path.display());
    }

    Ok(())
}
