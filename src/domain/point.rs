use serde::{Deserialize, Serialize};

/// A bare lat/lng pair collected for boundary drawing
///
/// Unlike [`Node`](crate::domain::Node), points carry no identity; the
/// boundary builder treats bitwise-equal coordinates as the same point and
/// everything else as distinct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PolygonPoint {
    pub lat: f64,
    pub lng: f64,
}
