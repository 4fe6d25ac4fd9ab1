use crate::domain::{Edge, MapGraph, Node};

/// Build the built-in downtown Seattle waypoint graph
///
/// This is the default graph the sketching UI starts from; callers may
/// substitute any graph with the same shape. Edge weights are hand-tuned
/// walking difficulty, not distances.
pub fn seattle_graph() -> MapGraph {
    let nodes = vec![
        Node::new("pike-place", 47.6097, -122.3425),
        Node::new("pioneer-square", 47.6021, -122.3365),
        Node::new("waterfront", 47.6062, -122.3390),
        Node::new("belltown", 47.6150, -122.3425),
        Node::new("capitol-hill", 47.6205, -122.3212),
        Node::new("fremont", 47.6517, -122.3517),
        Node::new("queen-anne", 47.6237, -122.3565),
        Node::new("south-lake-union", 47.6205, -122.3370),
        Node::new("denny-triangle", 47.6170, -122.3370),
        Node::new("international-district", 47.5988, -122.3244),
        Node::new("first-hill", 47.6080, -122.3244),
        Node::new("downtown-core", 47.6080, -122.3350),
        Node::new("seattle-center", 47.6205, -122.3493),
        Node::new("magnolia", 47.6358, -122.3993),
        Node::new("ballard", 47.6685, -122.3833),
    ];

    let edges = vec![
        edge("e1", "pike-place", "waterfront", 0.5),
        edge("e2", "pike-place", "downtown-core", 0.3),
        edge("e3", "pike-place", "belltown", 0.4),
        edge("e4", "waterfront", "pioneer-square", 0.6),
        edge("e5", "pioneer-square", "international-district", 0.4),
        edge("e6", "pioneer-square", "first-hill", 0.5),
        edge("e7", "downtown-core", "first-hill", 0.4),
        edge("e8", "downtown-core", "denny-triangle", 0.3),
        edge("e9", "belltown", "denny-triangle", 0.2),
        edge("e10", "belltown", "south-lake-union", 0.3),
        edge("e11", "denny-triangle", "south-lake-union", 0.2),
        edge("e12", "denny-triangle", "capitol-hill", 0.4),
        edge("e13", "south-lake-union", "queen-anne", 0.3),
        edge("e14", "queen-anne", "seattle-center", 0.2),
        edge("e15", "queen-anne", "magnolia", 0.8),
        edge("e16", "seattle-center", "fremont", 0.6),
        edge("e17", "fremont", "ballard", 0.4),
        edge("e18", "capitol-hill", "first-hill", 0.3),
        edge("e19", "first-hill", "international-district", 0.3),
    ];

    MapGraph::new(nodes, edges)
}

fn edge(id: &str, from: &str, to: &str, weight: f64) -> Edge {
    Edge {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_graph_shape() {
        let graph = seattle_graph();
        assert_eq!(graph.nodes.len(), 15);
        assert_eq!(graph.edges.len(), 19);
    }

    #[test]
    fn test_seed_node_ids_unique() {
        let graph = seattle_graph();
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), graph.nodes.len());
    }

    #[test]
    fn test_seed_edges_reference_existing_nodes() {
        let graph = seattle_graph();
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

        for edge in &graph.edges {
            assert!(ids.contains(edge.from.as_str()), "dangling from: {}", edge.from);
            assert!(ids.contains(edge.to.as_str()), "dangling to: {}", edge.to);
            assert!(edge.weight >= 0.0);
        }
    }
}
