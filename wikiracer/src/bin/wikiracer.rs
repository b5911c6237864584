//! Wikiracer CLI
//!
//! Finds paths between pages and prints a JSON report of the path and every
//! page fetched along the way.
//!
//! # Commands
//!
//! - `bfs`, `dfs`, `dijkstra`: classical searches
//! - `race`: the fetch-minimizing heuristic router
//! - `find`: breadth-first search for a page containing every query word
//!
//! Pages come from the live wiki unless `--fixture` points at a JSON graph.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use wikiracer::config::WikiracerConfig;
use wikiracer::links::WikiLinkExtractor;
use wikiracer::observability::{init_logging, SpanTimer};
use wikiracer::provider::{GraphFixture, InMemoryProvider, PageProvider};
use wikiracer::racer::WikiRacer;
use wikiracer::search::{SearchEngine, SearchMode, SearchReport};

/// Wikiracer - fetch-minimizing path search between encyclopedia pages
#[derive(Parser)]
#[command(name = "wikiracer")]
#[command(version)]
#[command(about = "Find paths between encyclopedia pages while fetching as few as possible")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve pages from a JSON graph fixture instead of the network
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first search
    Bfs(RouteArgs),
    /// Depth-first search
    Dfs(RouteArgs),
    /// Uniform-cost search weighted by identifier length
    Dijkstra(RouteArgs),
    /// Heuristic routing that probes both ends before searching
    Race(RouteArgs),
    /// Find a page containing every word of a query
    Find(FindArgs),
}

#[derive(Args)]
struct RouteArgs {
    /// Source identifier, e.g. /wiki/Calvin_Li
    source: String,
    /// Goal identifier, e.g. /wiki/Wikipedia
    goal: String,
}

#[derive(Args)]
struct FindArgs {
    /// Source identifier
    source: String,
    /// Words the page must contain
    #[arg(required = true)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose).context("failed to initialize logging")?;

    let config = match &cli.config {
        Some(path) => WikiracerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WikiracerConfig::default(),
    };
    config.validate()?;

    let provider: Box<dyn PageProvider> = match &cli.fixture {
        Some(path) => {
            let fixture = GraphFixture::from_file(path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?;
            Box::new(InMemoryProvider::from_fixture(fixture))
        }
        None => live_provider(&config)?,
    };

    let engine = SearchEngine::new(provider.as_ref())
        .with_extractor(Arc::new(WikiLinkExtractor::with_config(config.links.clone())));
    let timer = SpanTimer::start("cli");

    let (mode, source, goal, path) = match cli.command {
        Commands::Bfs(args) => run(&engine, SearchMode::Bfs, args),
        Commands::Dfs(args) => run(&engine, SearchMode::Dfs, args),
        Commands::Dijkstra(args) => run(&engine, SearchMode::Dijkstra, args),
        Commands::Race(args) => {
            let racer = WikiRacer::new(engine.clone())
                .with_config(config.racer)
                .with_marker(config.links.marker.clone());
            let path = racer.route(&args.source, &args.goal);
            ("race", args.source, args.goal, path)
        }
        Commands::Find(args) => {
            let query = args.query.join(" ");
            let path = engine.find_in_page(&args.source, &query, &config.find_in_page);
            ("find", args.source, query, path)
        }
    };

    let report = SearchReport::new(mode, source, goal, path, provider.as_ref(), timer.finish());
    if !report.found() {
        tracing::warn!(mode, fetches = report.fetches(), "No path found");
    }
    println!("{}", report.to_json()?);
    Ok(())
}

fn run(
    engine: &SearchEngine<'_>,
    mode: SearchMode,
    args: RouteArgs,
) -> (&'static str, String, String, Option<Vec<String>>) {
    let path = engine.search(&args.source, &args.goal, mode, None);
    (mode.as_str(), args.source, args.goal, path)
}

#[cfg(feature = "http")]
fn live_provider(config: &WikiracerConfig) -> Result<Box<dyn PageProvider>> {
    let provider = wikiracer::provider::HttpProvider::new(config.fetch.clone())?;
    Ok(Box::new(provider))
}

#[cfg(not(feature = "http"))]
fn live_provider(_config: &WikiracerConfig) -> Result<Box<dyn PageProvider>> {
    anyhow::bail!("built without the `http` feature; pass --fixture to use a local graph")
}
