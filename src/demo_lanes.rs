use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use lanegraph::{Attributor, BranchRecord, CommitRecord};

#[derive(Parser)]
#[command(name = "demo_lanes")]
#[command(about = "Annotate a fetched commit graph with branch lanes", long_about = None)]
struct Cli {
    /// JSON file holding { "commits": [...], "branches": [...] }
    input: PathBuf,

    /// Trunk branch name
    #[arg(long, default_value = "master")]
    trunk: String,
}

#[derive(Deserialize)]
struct Fixture {
    commits: Vec<CommitRecord>,
    branches: Vec<BranchRecord>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let fixture: Fixture =
        serde_json::from_str(&raw).context("Failed to parse commit/branch JSON")?;

    let history = Attributor::new()
        .trunk(&cli.trunk)
        .annotate(fixture.commits, fixture.branches)?;

    let stats = history.stats();
    println!("History statistics:");
    println!("  Total commits: {}", stats.total_commits);
    println!("  Total branches: {}", stats.total_branches);
    println!("  Merge commits: {}", stats.merge_commits);
    println!("  Root commits: {}", stats.root_commits);
    println!("  Tip commits: {}", stats.tip_commits);
    println!("  Dropped edges: {}", stats.dropped_edges);
    println!();

    println!("Lanes:");
    for commit in history.commits() {
        let short = commit.sha.get(..7).unwrap_or(&commit.sha);
        let label = commit.branch.as_deref().unwrap_or("-");
        let summary = commit.message.lines().next().unwrap_or("");
        println!("  {short:7}  [{label}]  {summary}");
    }

    if !history.diagnostics().is_empty() {
        println!();
        println!("Diagnostics:");
        for diagnostic in history.diagnostics() {
            println!("  {diagnostic}");
        }
    }

    Ok(())
}
