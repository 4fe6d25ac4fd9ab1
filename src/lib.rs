//! routesketch - Waypoint routing and boundary-polygon core for a map sketching tool

pub mod config;
pub mod domain;
pub mod geometry;
pub mod graph;
pub mod routing;
