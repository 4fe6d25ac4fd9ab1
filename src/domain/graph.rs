use serde::{Deserialize, Serialize};

use crate::domain::Node;

/// An undirected connection between two waypoints
///
/// `weight` is an abstract difficulty scalar chosen by whoever authored the
/// graph, not a geographic distance. `from`/`to` should name existing node
/// ids; the graph does not enforce this, and traversal silently ignores
/// edges whose endpoints cannot be resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Immutable waypoint graph
///
/// Built once from static or externally supplied data and treated as
/// read-only for the lifetime of every query; no component in this crate
/// mutates a graph after construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl MapGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_deserialize() {
        let json = r#"{
            "nodes": [
                {"id": "a", "lat": 0.0, "lng": 0.0},
                {"id": "b", "lat": 1.0, "lng": 1.0, "type": "landmark"}
            ],
            "edges": [
                {"id": "e1", "from": "a", "to": "b", "weight": 0.5}
            ]
        }"#;

        let graph: MapGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].weight, 0.5);
    }

    #[test]
    fn test_graph_roundtrip_keeps_type_tag() {
        let graph = MapGraph::new(
            vec![Node {
                id: "a".to_string(),
                lat: 1.0,
                lng: 2.0,
                kind: Some("landmark".to_string()),
            }],
            Vec::new(),
        );

        let json = serde_json::to_string(&graph).unwrap();
        assert!(json.contains(r#""type":"landmark""#));
    }
}
