//! Polygon area from map clicks
//!
//! Customers outline their lot by clicking corners on a map, in any order.
//! Corners are sorted clockwise around their centroid before the shoelace
//! sum, so the click order does not change the result.

use std::cmp::Ordering;

use shared::models::GeoPoint;

/// Meters per degree of latitude (and of longitude at the equator)
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Area of the ring through `points`, in m²
///
/// Fewer than three points enclose nothing and yield 0.
pub fn polygon_area(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let ring = sort_clockwise(points);
    let projected: Vec<(f64, f64)> = ring.iter().map(project).collect();

    let twice_area: f64 = projected
        .iter()
        .zip(projected.iter().cycle().skip(1))
        .map(|((x1, y1), (x2, y2))| x1 * y2 - x2 * y1)
        .sum();

    (twice_area / 2.0).abs()
}

/// Points ordered clockwise (descending angle) around their centroid
///
/// Points at the same angle are ordered nearest first.
pub fn sort_clockwise(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };

    let mut keyed: Vec<(f64, f64, GeoPoint)> = points
        .iter()
        .map(|p| {
            let dy = p.lat - center.lat;
            let dx = p.lng - center.lng;
            (dy.atan2(dx), dx * dx + dy * dy, *p)
        })
        .collect();

    keyed.sort_by(|a, b| match b.0.total_cmp(&a.0) {
        Ordering::Equal => a.1.total_cmp(&b.1),
        other => other,
    });

    keyed.into_iter().map(|(_, _, p)| p).collect()
}

/// Mean of the points, `None` for an empty slice
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat, lng) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(GeoPoint::new(lat / n, lng / n))
}

/// Local planar meters: `(x, y)`
#[inline]
fn project(p: &GeoPoint) -> (f64, f64) {
    let y = p.lat * METERS_PER_DEGREE;
    let x = p.lng * METERS_PER_DEGREE * p.lat.to_radians().cos();
    (x, y)
}
