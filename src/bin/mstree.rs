//! mstree binary.
//!
//! Reads a graph in the text format of [`mstree::io`], computes its minimum
//! spanning forest with Kruskal's algorithm, then prints every edge with its
//! classification and the breadth-first parent array.
//!
//! Command syntax is:
//!  mstree [--verbose | -v] [input]
//!
//! The graph is read from stdin when no input file is given. `-v` logs each
//! step of both algorithms; `RUST_LOG` still overrides the log filter.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::{Arg, ArgAction, Command};

use mstree::io::{read_graph, write_report};
use mstree::mst::{Bfs, Kruskal};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("mstree")
        .about("Minimum spanning forest of a weighted graph (Kruskal + BFS)")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("log every algorithm step"),
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("graph file (stdin when omitted)"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut graph = match matches.get_one::<String>("input") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
            read_graph(BufReader::new(file)).with_context(|| format!("reading {path}"))?
        }
        None => read_graph(io::stdin().lock()).context("reading stdin")?,
    };

    let forest = Kruskal::new()
        .with_verbose(verbose)
        .run(&mut graph)
        .context("kruskal failed")?;
    let parents = Bfs::new()
        .with_verbose(verbose)
        .run(&graph)
        .context("bfs failed")?;
    log::info!(
        "spanning forest: {} tree(s), total weight {}",
        forest.components,
        forest.total_weight
    );

    write_report(io::stdout().lock(), &graph, &parents)?;
    Ok(())
}
