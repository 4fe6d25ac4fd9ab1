pub mod graph;
pub mod node;
pub mod point;

pub use graph::{Edge, MapGraph};
pub use node::Node;
pub use point::PolygonPoint;
