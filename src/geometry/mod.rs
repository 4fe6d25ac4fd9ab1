pub mod hull;

pub use hull::{build_boundary, convex_hull};
