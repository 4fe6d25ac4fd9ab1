use crate::domain::{MapGraph, Node};

/// Find the node closest to a raw map coordinate
///
/// Linear scan over every node using planar Euclidean distance in degrees
/// (`sqrt(dlat^2 + dlng^2)`), which is plenty at the tens-of-nodes scale
/// these graphs run at. Comparison is strict `<`, so when two nodes are
/// exactly equidistant the one earlier in the graph's node ordering wins.
/// Returns `None` only when the graph has no nodes.
pub fn nearest_node(lat: f64, lng: f64, graph: &MapGraph) -> Option<&Node> {
    let mut nearest: Option<&Node> = None;
    let mut min_distance = f64::INFINITY;

    for node in &graph.nodes {
        let dlat = node.lat - lat;
        let dlng = node.lng - lng;
        let distance = (dlat * dlat + dlng * dlng).sqrt();
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(node);
        }
    }

    nearest
}

/// Look up a node by exact id
pub fn node_by_id<'a>(id: &str, graph: &'a MapGraph) -> Option<&'a Node> {
    graph.nodes.iter().find(|node| node.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(nodes: Vec<Node>) -> MapGraph {
        MapGraph::new(nodes, Vec::new())
    }

    #[test]
    fn test_nearest_node_picks_global_minimum() {
        let graph = graph_of(vec![
            Node::new("far", 10.0, 10.0),
            Node::new("near", 1.0, 1.0),
            Node::new("mid", 5.0, 5.0),
        ]);

        let found = nearest_node(0.0, 0.0, &graph).unwrap();
        assert_eq!(found.id, "near");
    }

    #[test]
    fn test_nearest_node_tie_breaks_on_graph_order() {
        // Both nodes sit exactly 1 degree from the query point.
        let graph = graph_of(vec![
            Node::new("first", 0.0, 1.0),
            Node::new("second", 1.0, 0.0),
        ]);

        let found = nearest_node(0.0, 0.0, &graph).unwrap();
        assert_eq!(found.id, "first");
    }

    #[test]
    fn test_nearest_node_empty_graph() {
        let graph = graph_of(Vec::new());
        assert!(nearest_node(47.0, -122.0, &graph).is_none());
    }

    #[test]
    fn test_nearest_node_exact_hit() {
        let graph = graph_of(vec![
            Node::new("a", 47.6097, -122.3425),
            Node::new("b", 47.6021, -122.3365),
        ]);

        let found = nearest_node(47.6021, -122.3365, &graph).unwrap();
        assert_eq!(found.id, "b");
    }

    #[test]
    fn test_node_by_id() {
        let graph = graph_of(vec![Node::new("a", 0.0, 0.0), Node::new("b", 1.0, 1.0)]);

        assert_eq!(node_by_id("b", &graph).unwrap().id, "b");
        assert!(node_by_id("missing", &graph).is_none());
    }
}
