use std::collections::{HashMap, HashSet};

use crate::domain::{MapGraph, Node};

/// Frontier bookkeeping for one candidate node
struct OpenEntry {
    node: Node,
    g_score: f64,
    f_score: f64,
}

/// Straight-line degree distance, used both as the A* heuristic and by the
/// nearest-node scan. Edge weights are abstract difficulty rather than
/// distance, so as a heuristic this can overestimate; when it misleads the
/// search, the exhaustive frontier still finds a connecting path.
fn heuristic(a: &Node, b: &Node) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// All nodes reachable from `node_id` across one edge, in edge order
///
/// Edges are undirected, so both orientations are checked. Endpoints that
/// name a missing node resolve to nothing and the edge drops out silently.
fn neighbors<'a>(node_id: &str, graph: &'a MapGraph) -> Vec<&'a Node> {
    let mut result = Vec::new();

    for edge in &graph.edges {
        if edge.from == node_id {
            if let Some(neighbor) = graph.nodes.iter().find(|n| n.id == edge.to) {
                result.push(neighbor);
            }
        }
        if edge.to == node_id {
            if let Some(neighbor) = graph.nodes.iter().find(|n| n.id == edge.from) {
                result.push(neighbor);
            }
        }
    }

    result
}

/// Weight of the first edge joining the pair in either direction, or
/// infinity when no such edge exists
fn edge_weight(from_id: &str, to_id: &str, graph: &MapGraph) -> f64 {
    graph
        .edges
        .iter()
        .find(|e| {
            (e.from == from_id && e.to == to_id) || (e.from == to_id && e.to == from_id)
        })
        .map(|e| e.weight)
        .unwrap_or(f64::INFINITY)
}

fn reconstruct_path(goal: &Node, came_from: &HashMap<String, Node>) -> Vec<Node> {
    let mut path = vec![goal.clone()];
    let mut current_id = goal.id.clone();

    while let Some(prev) = came_from.get(&current_id) {
        path.push(prev.clone());
        current_id = prev.id.clone();
    }

    path.reverse();
    path
}

/// A* search from `start` to `goal` over an immutable waypoint graph
///
/// Both endpoints are assumed to belong to `graph`; membership is not
/// checked. Returns the node sequence from start to goal inclusive, or
/// `None` when the frontier empties without reaching the goal - callers
/// cannot tell "disconnected" apart from "edges reference missing nodes",
/// which is the established contract.
///
/// Routing a node to itself yields `[start, goal]`, the same node twice;
/// the sketching UI depends on always getting a two-point segment back.
///
/// The open list is re-sorted by ascending fScore each iteration and the
/// front popped, so ties fall to insertion order. Quadratic in the node
/// count, which is fine for the graph sizes this serves.
pub fn find_path(start: &Node, goal: &Node, graph: &MapGraph) -> Option<Vec<Node>> {
    if start.id == goal.id {
        return Some(vec![start.clone(), goal.clone()]);
    }

    let mut open: Vec<OpenEntry> = vec![OpenEntry {
        node: start.clone(),
        g_score: 0.0,
        f_score: heuristic(start, goal),
    }];
    let mut closed: HashSet<String> = HashSet::new();
    let mut came_from: HashMap<String, Node> = HashMap::new();

    while !open.is_empty() {
        open.sort_by(|a, b| a.f_score.total_cmp(&b.f_score));
        let current = open.remove(0);

        if current.node.id == goal.id {
            return Some(reconstruct_path(goal, &came_from));
        }

        closed.insert(current.node.id.clone());

        for neighbor in neighbors(&current.node.id, graph) {
            if closed.contains(&neighbor.id) {
                continue;
            }

            let tentative = current.g_score + edge_weight(&current.node.id, &neighbor.id, graph);

            let idx = match open.iter().position(|e| e.node.id == neighbor.id) {
                Some(idx) => idx,
                None => {
                    open.push(OpenEntry {
                        node: neighbor.clone(),
                        g_score: f64::INFINITY,
                        f_score: f64::INFINITY,
                    });
                    open.len() - 1
                }
            };

            if tentative < open[idx].g_score {
                came_from.insert(neighbor.id.clone(), current.node.clone());
                open[idx].g_score = tentative;
                open[idx].f_score = tentative + heuristic(neighbor, goal);
            }
        }
    }

    None
}

/// Total edge weight along a path returned by [`find_path`]
///
/// Consecutive pairs with no joining edge contribute infinity, so a finite
/// result doubles as a check that the path is actually traversable.
pub fn path_cost(path: &[Node], graph: &MapGraph) -> f64 {
    path.windows(2)
        .map(|pair| edge_weight(&pair[0].id, &pair[1].id, graph))
        .sum()
}
