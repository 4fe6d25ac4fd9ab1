pub mod locate;
pub mod seed;

pub use locate::{nearest_node, node_by_id};
pub use seed::seattle_graph;
