//! Input validation helpers
//!
//! Calculators accept anything and degrade to zero; the API layer rejects
//! values that can only come from a broken or hostile client.

use shared::models::GeoPoint;

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Largest area quoted automatically (m², 100 ha)
pub const MAX_AREA_SQM: f64 = 1_000_000.0;

/// Map outline clicks
pub const MAX_POLYGON_POINTS: usize = 1_000;

/// Per spot type
pub const MAX_SPOT_COUNT: u32 = 100_000;

// ── Helpers ─────────────────────────────────────────────────────────

/// Area must be finite, non-negative and at most [`MAX_AREA_SQM`]
pub fn validate_area(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::invalid_area(field, format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(
            AppError::invalid_area(field, format!("{field} must not be negative"))
                .with_detail("value", value),
        );
    }
    if value > MAX_AREA_SQM {
        return Err(AppError::out_of_range(
            field,
            format!("{field} exceeds {MAX_AREA_SQM} m²"),
        )
        .with_detail("value", value));
    }
    Ok(())
}

/// Latitude in [-90, 90], longitude in [-180, 180]
pub fn validate_point(point: &GeoPoint, index: usize) -> Result<(), AppError> {
    let lat_ok = point.lat.is_finite() && (-90.0..=90.0).contains(&point.lat);
    let lng_ok = point.lng.is_finite() && (-180.0..=180.0).contains(&point.lng);
    if lat_ok && lng_ok {
        return Ok(());
    }
    Err(
        AppError::invalid_coordinate(format!("points[{index}] is not a valid coordinate"))
            .with_detail("index", index)
            .with_detail("lat", point.lat)
            .with_detail("lng", point.lng),
    )
}

/// At most [`MAX_POLYGON_POINTS`], each a valid coordinate
pub fn validate_points(points: &[GeoPoint]) -> Result<(), AppError> {
    if points.len() > MAX_POLYGON_POINTS {
        return Err(AppError::with_message(
            shared::ErrorCode::TooManyPoints,
            format!(
                "points has {} entries, max {MAX_POLYGON_POINTS}",
                points.len()
            ),
        )
        .with_detail("count", points.len()));
    }
    points
        .iter()
        .enumerate()
        .try_for_each(|(index, point)| validate_point(point, index))
}

/// Spot count must be at most [`MAX_SPOT_COUNT`]
pub fn validate_spot_count(value: u32, field: &str) -> Result<(), AppError> {
    if value > MAX_SPOT_COUNT {
        return Err(AppError::with_message(
            shared::ErrorCode::InvalidSpotCount,
            format!("{field} exceeds {MAX_SPOT_COUNT}"),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    Ok(())
}
