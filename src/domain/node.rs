use serde::{Deserialize, Serialize};

/// A named waypoint on the map
///
/// Coordinates are raw WGS84 degrees; nothing here projects or validates
/// them. Identity is `id` alone - two nodes with equal coordinates but
/// different ids are distinct waypoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Optional category tag (e.g. "landmark"), carried as `type` on the wire
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            kind: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserialize_with_type_tag() {
        let json = r#"{"id": "pike-place", "lat": 47.6097, "lng": -122.3425, "type": "market"}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "pike-place");
        assert_eq!(node.kind.as_deref(), Some("market"));
    }

    #[test]
    fn test_node_deserialize_without_type_tag() {
        let json = r#"{"id": "waterfront", "lat": 47.6062, "lng": -122.3390}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, None);
    }
}
