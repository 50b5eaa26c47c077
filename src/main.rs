//! Command-line driver: runs the canonical circuit search for one qubit
//! count and optionally writes the serialized prefix tree.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use clifford_table_rust::search;
use clifford_table_rust::tree::serialize::write_tree;

#[derive(Parser, Debug)]
#[command(name = "clifford-table", about = "Enumerate optimal-length Clifford circuits")]
struct CommandLineArgs {
    /// Number of qubits (2 to 5)
    n: usize,

    /// Output path for the serialized circuit tree
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Per-layer progress logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let outcome = search(args.n).context("search failed")?;
    info!(
        "{} canonical circuits over {} qubits cover {} symplectic matrices",
        outcome.class_count, args.n, outcome.coset_total
    );

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_tree(&mut writer, &outcome.tree)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {} layers to {}", outcome.tree.n_layers(), path.display());
    }
    Ok(())
}
