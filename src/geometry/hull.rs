use std::collections::HashSet;

use crate::domain::PolygonPoint;

/// Interior points closer than this (in degrees, roughly 100m) to a hull
/// edge get folded into the boundary; anything farther is dropped.
const NEAR_EDGE_THRESHOLD: f64 = 0.001;

/// Cross product of OA x OB in the (lng, lat) plane; positive means a left
/// turn walking O -> A -> B.
fn cross(o: PolygonPoint, a: PolygonPoint, b: PolygonPoint) -> f64 {
    (a.lng - o.lng) * (b.lat - o.lat) - (a.lat - o.lat) * (b.lng - o.lng)
}

/// Convex hull via Andrew's monotone chain
///
/// Fewer than 3 points come back unchanged. Otherwise the result is a
/// counter-clockwise, duplicate-free boundary with collinear points removed
/// (the non-left-turn test pops on cross <= 0). Closure is implicit - the
/// first point is not repeated at the end.
pub fn convex_hull(points: &[PolygonPoint]) -> Vec<PolygonPoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.lng.total_cmp(&b.lng).then_with(|| a.lat.total_cmp(&b.lat)));

    let mut lower: Vec<PolygonPoint> = Vec::new();
    for &point in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], point) <= 0.0
        {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<PolygonPoint> = Vec::new();
    for &point in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], point) <= 0.0
        {
            upper.pop();
        }
        upper.push(point);
    }

    // Each chain ends where the other begins; drop the duplicates.
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Perpendicular distance from a point to a segment, with the projection
/// clamped to the segment's endpoints when it falls outside [0, 1]
fn point_to_segment_distance(
    point: PolygonPoint,
    line_start: PolygonPoint,
    line_end: PolygonPoint,
) -> f64 {
    let a = point.lng - line_start.lng;
    let b = point.lat - line_start.lat;
    let c = line_end.lng - line_start.lng;
    let d = line_end.lat - line_start.lat;

    let dot = a * c + b * d;
    let len_sq = c * c + d * d;

    if len_sq == 0.0 {
        return (a * a + b * b).sqrt();
    }

    let param = dot / len_sq;
    let (xx, yy) = if param < 0.0 {
        (line_start.lng, line_start.lat)
    } else if param > 1.0 {
        (line_end.lng, line_end.lat)
    } else {
        (line_start.lng + param * c, line_start.lat + param * d)
    };

    let dx = point.lng - xx;
    let dy = point.lat - yy;
    (dx * dx + dy * dy).sqrt()
}

/// Fold near-edge interior points into the hull for a more natural outline
///
/// Membership in the hull is tested by exact bit-level coordinate equality,
/// so near-duplicate floats count as separate points. Each qualifying point
/// is spliced in at the index just past the start vertex of its nearest
/// edge; indices refer to the pristine hull even as the expanded boundary
/// grows, so several points landing on one edge keep their input encounter
/// order. A deliberately rough heuristic, not an alpha shape - downstream
/// consumers rely on its exact output, self-intersections and all.
fn expand_hull_with_interior_points(
    hull: &[PolygonPoint],
    all_points: &[PolygonPoint],
) -> Vec<PolygonPoint> {
    let mut expanded = hull.to_vec();
    let hull_set: HashSet<(u64, u64)> = hull
        .iter()
        .map(|p| (p.lat.to_bits(), p.lng.to_bits()))
        .collect();

    for &point in all_points {
        if hull_set.contains(&(point.lat.to_bits(), point.lng.to_bits())) {
            continue;
        }

        let mut min_distance = f64::INFINITY;
        let mut insert_index = None;

        for i in 0..hull.len() {
            let next_i = (i + 1) % hull.len();
            let distance = point_to_segment_distance(point, hull[i], hull[next_i]);

            if distance < min_distance && distance < NEAR_EDGE_THRESHOLD {
                min_distance = distance;
                insert_index = Some(next_i);
            }
        }

        if let Some(index) = insert_index {
            expanded.insert(index, point);
        }
    }

    expanded
}

/// Build a boundary polygon from scattered sketch points
///
/// Under 3 points there is nothing to enclose, so the input comes back
/// unchanged in its original order. Otherwise: convex hull first, then the
/// near-edge expansion whenever some input points did not make the hull.
pub fn build_boundary(points: &[PolygonPoint]) -> Vec<PolygonPoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let hull = convex_hull(points);

    if points.len() > hull.len() && hull.len() >= 3 {
        return expand_hull_with_interior_points(&hull, points);
    }

    hull
}
