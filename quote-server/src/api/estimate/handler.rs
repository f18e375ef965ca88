//! Estimate API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{
    ColorId, EpoxyPriceBreakdown, EpoxyQuoteInput, GeoPoint, LanePriceBreakdown, LaneSpots,
    LocationType, PaintPriceBreakdown, PaintQuoteInput, ParkingSpotEstimate, QuickQuoteRequest,
    QuickQuoteResult, QuoteCosts, requires_color_mixing_fee,
};
use shared::util::sqm_to_pyeong;

use crate::core::ServerState;
use crate::geometry::polygon_area;
use crate::pricing::{
    estimate_epoxy_price, estimate_lane_price, estimate_paint_price, estimate_spots, quick_quote,
};
use crate::utils::validation::{validate_area, validate_points, validate_spot_count};
use crate::utils::{ApiResponse, AppResult};

/// Body of `POST /api/estimate/area`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaRequest {
    /// Outline corners in click order
    pub points: Vec<GeoPoint>,
    #[serde(default)]
    pub location_type: LocationType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaEstimate {
    pub area_sqm: f64,
    pub area_pyeong: f64,
    pub spots: ParkingSpotEstimate,
    /// "총 N대 / 장애인 N대 / 전기차 N대"
    pub summary: String,
}

/// Body of `POST /api/estimate/spots`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotsRequest {
    pub area_sqm: f64,
    #[serde(default)]
    pub location_type: LocationType,
}

/// Body of `POST /api/estimate/epoxy`
///
/// `color`, when given, decides the color-mixing fee from the catalog and
/// overrides `needs_color_mixing_fee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpoxyEstimateRequest {
    #[serde(flatten)]
    pub input: EpoxyQuoteInput,
    #[serde(default)]
    pub color: Option<ColorId>,
}

/// Price breakdown plus the totals handed to quote submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate<T> {
    #[serde(flatten)]
    pub breakdown: T,
    pub costs: QuoteCosts,
}

impl<T> Estimate<T>
where
    for<'a> QuoteCosts: From<&'a T>,
{
    fn new(breakdown: T) -> Self {
        let costs = QuoteCosts::from(&breakdown);
        Self { breakdown, costs }
    }
}

/// POST /api/estimate/area - area and spot counts from a map outline
pub async fn area(Json(payload): Json<AreaRequest>) -> AppResult<ApiResponse<AreaEstimate>> {
    validate_points(&payload.points)?;

    let area_sqm = polygon_area(&payload.points);
    validate_area(area_sqm, "area_sqm")?;

    let spots = estimate_spots(area_sqm, payload.location_type);
    Ok(ApiResponse::success(AreaEstimate {
        area_sqm,
        area_pyeong: sqm_to_pyeong(area_sqm),
        summary: spots.summary(),
        spots,
    }))
}

/// POST /api/estimate/spots - spot counts from an area
pub async fn spots(
    Json(payload): Json<SpotsRequest>,
) -> AppResult<ApiResponse<ParkingSpotEstimate>> {
    validate_area(payload.area_sqm, "area_sqm")?;
    Ok(ApiResponse::success(estimate_spots(
        payload.area_sqm,
        payload.location_type,
    )))
}

/// POST /api/estimate/lane - lane painting quote
pub async fn lane(
    State(state): State<ServerState>,
    Json(payload): Json<LaneSpots>,
) -> AppResult<ApiResponse<Estimate<LanePriceBreakdown>>> {
    validate_spot_count(payload.regular_spots, "regular_spots")?;
    validate_spot_count(payload.disabled_spots, "disabled_spots")?;
    validate_spot_count(payload.ev_spots, "ev_spots")?;

    let rules = state.pricing_rules();
    let breakdown = estimate_lane_price(&payload, Some(&rules));
    Ok(ApiResponse::success(Estimate::new(breakdown)))
}

/// POST /api/estimate/epoxy - itemized epoxy quote
pub async fn epoxy(
    State(state): State<ServerState>,
    Json(payload): Json<EpoxyEstimateRequest>,
) -> AppResult<ApiResponse<Estimate<EpoxyPriceBreakdown>>> {
    let EpoxyEstimateRequest { mut input, color } = payload;
    validate_area(input.area, "area")?;

    if let Some(color) = color {
        input.needs_color_mixing_fee = requires_color_mixing_fee(input.material_id, color);
    }

    let rules = state.pricing_rules();
    let breakdown = estimate_epoxy_price(&input, Some(&rules));
    Ok(ApiResponse::success(Estimate::new(breakdown)))
}

/// POST /api/estimate/paint - itemized paint quote
pub async fn paint(
    State(state): State<ServerState>,
    Json(payload): Json<PaintQuoteInput>,
) -> AppResult<ApiResponse<Estimate<PaintPriceBreakdown>>> {
    validate_area(payload.area, "area")?;

    let rules = state.pricing_rules();
    let breakdown = estimate_paint_price(&payload, Some(&rules));
    Ok(ApiResponse::success(Estimate::new(breakdown)))
}

/// POST /api/estimate/quick - price band from area alone
pub async fn quick(
    State(state): State<ServerState>,
    Json(payload): Json<QuickQuoteRequest>,
) -> AppResult<ApiResponse<QuickQuoteResult>> {
    validate_area(payload.area(), "area")?;

    let rules = state.pricing_rules();
    Ok(ApiResponse::success(quick_quote(&payload, Some(&rules))))
}
