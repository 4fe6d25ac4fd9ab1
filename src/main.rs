use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod domain;
mod geometry;
mod graph;
mod routing;

use config::FileConfig;
use domain::{MapGraph, Node, PolygonPoint};
use geometry::build_boundary;
use graph::{nearest_node, node_by_id, seattle_graph};
use routing::{find_path, path_cost};

/// Route between waypoints and build boundary polygons for map sketches
///
/// Examples:
///   # Route between two named waypoints on the built-in Seattle graph
///   routesketch route --from pike-place --to ballard
///
///   # Route between two map coordinates (snapped to the nearest waypoints)
///   routesketch route --from 47.6095,-122.3420 --to 47.5990,-122.3240
///
///   # Same, against a custom graph
///   routesketch --graph campus.json route --from gate --to library
///
///   # Snap a clicked coordinate to its waypoint
///   routesketch nearest --at 47.6100,-122.3400
///
///   # Build a boundary polygon from collected points
///   routesketch boundary --points picnic-area.json --json
#[derive(Parser, Debug)]
#[command(name = "routesketch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches routesketch.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON graph file (defaults to the built-in Seattle waypoint graph)
    #[arg(short = 'g', long)]
    graph: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the lowest-cost route between two waypoints
    Route {
        /// Start: a waypoint id or a LAT,LNG coordinate
        #[arg(long, allow_hyphen_values = true)]
        from: String,

        /// Goal: a waypoint id or a LAT,LNG coordinate
        #[arg(long, allow_hyphen_values = true)]
        to: String,

        /// Print the route as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Snap a coordinate to the nearest waypoint
    Nearest {
        /// LAT,LNG coordinate
        #[arg(long, allow_hyphen_values = true)]
        at: String,
    },
    /// Build a boundary polygon from a scattered point set
    Boundary {
        /// JSON file holding an array of {"lat": .., "lng": ..} points
        #[arg(short = 'p', long)]
        points: PathBuf,

        /// Print the boundary as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            Some(
                FileConfig::from_path(config_path)
                    .context(format!("Failed to read config file: {:?}", config_path))?,
            )
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let graph_path = args
        .graph
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.graph.clone()));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let graph = match graph_path {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)
                .context(format!("Failed to read graph file: {:?}", path))?;
            let graph: MapGraph =
                serde_json::from_str(&contents).context("Failed to parse graph JSON")?;
            if verbose {
                println!(
                    "Loaded graph from {:?}: {} nodes, {} edges",
                    path,
                    graph.nodes.len(),
                    graph.edges.len()
                );
            }
            graph
        }
        None => {
            if verbose {
                println!("Using built-in Seattle waypoint graph");
            }
            seattle_graph()
        }
    };

    match args.command {
        Command::Route { from, to, json } => run_route(&graph, &from, &to, json, verbose),
        Command::Nearest { at } => run_nearest(&graph, &at),
        Command::Boundary { points, json } => run_boundary(&points, json, verbose),
    }
}

/// Resolve a CLI endpoint argument: LAT,LNG snaps to the nearest waypoint,
/// anything else is treated as a waypoint id
fn resolve_endpoint<'a>(arg: &str, graph: &'a MapGraph, verbose: bool) -> Result<&'a Node> {
    if let Some((lat, lng)) = parse_lat_lng(arg) {
        let node = nearest_node(lat, lng, graph)
            .context("Graph has no nodes to snap the coordinate to")?;
        if verbose {
            println!(
                "Snapped ({:.4}, {:.4}) -> {} ({:.4}, {:.4})",
                lat, lng, node.id, node.lat, node.lng
            );
        }
        return Ok(node);
    }

    node_by_id(arg, graph).with_context(|| format!("No waypoint with id '{}'", arg))
}

fn parse_lat_lng(s: &str) -> Option<(f64, f64)> {
    let (lat, lng) = s.split_once(',')?;
    Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}

fn run_route(graph: &MapGraph, from: &str, to: &str, json: bool, verbose: bool) -> Result<()> {
    let start = resolve_endpoint(from, graph, verbose)?;
    let goal = resolve_endpoint(to, graph, verbose)?;

    let Some(path) = find_path(start, goal, graph) else {
        bail!("No route between '{}' and '{}'", start.id, goal.id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    println!("Route: {} -> {} ({} stops)", start.id, goal.id, path.len());
    for node in &path {
        println!("  {} ({:.4}, {:.4})", node.id, node.lat, node.lng);
    }
    let cost = path_cost(&path, graph);
    if cost.is_finite() {
        println!("Total cost: {:.2}", cost);
    }

    Ok(())
}

fn run_nearest(graph: &MapGraph, at: &str) -> Result<()> {
    let (lat, lng) = parse_lat_lng(at)
        .with_context(|| format!("Expected LAT,LNG coordinate, got '{}'", at))?;

    let Some(node) = nearest_node(lat, lng, graph) else {
        bail!("Graph has no nodes");
    };

    println!("{} ({:.4}, {:.4})", node.id, node.lat, node.lng);
    Ok(())
}

fn run_boundary(points_path: &Path, json: bool, verbose: bool) -> Result<()> {
    let contents = std::fs::read_to_string(points_path)
        .context(format!("Failed to read points file: {:?}", points_path))?;
    let points: Vec<PolygonPoint> =
        serde_json::from_str(&contents).context("Failed to parse points JSON")?;

    if verbose {
        println!("Loaded {} points from {:?}", points.len(), points_path);
    }

    let boundary = build_boundary(&points);

    if json {
        println!("{}", serde_json::to_string_pretty(&boundary)?);
        return Ok(());
    }

    if boundary.len() < 3 {
        println!(
            "Only {} point(s) - not enough for a boundary, returning them as-is",
            boundary.len()
        );
    } else {
        println!("Boundary with {} vertices:", boundary.len());
    }
    for point in &boundary {
        println!("  ({:.4}, {:.4})", point.lat, point.lng);
    }

    Ok(())
}
