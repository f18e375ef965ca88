use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use quote_server::services::build_router;
use quote_server::{Config, RuleSnapshotService, ServerState};
use serde_json::{Value, json};
use shared::models::{PricingRule, RuleCategory, ServiceType};
use tower::ServiceExt;

fn app(rules: Vec<PricingRule>) -> Router {
    let config = Config::with_overrides(0, None);
    let state = ServerState::new(config, RuleSnapshotService::from_rules(rules));
    build_router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    send(app, Request::get(path).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(Vec::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["rule_count"], 0);
}

#[tokio::test]
async fn test_lane_quote() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/lane",
        json!({"regular_spots": 15, "disabled_spots": 1, "ev_spots": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["base_price"], 800_000.0);
    assert_eq!(data["special_price"], 250_000.0);
    assert_eq!(data["total"], 1_050_000.0);
    assert_eq!(data["formatted"], "약 105만원");
    assert_eq!(data["costs"]["total_cost"], 1_050_000.0);
    assert_eq!(data["costs"]["option_cost"], 250_000.0);
}

#[tokio::test]
async fn test_lane_consultation() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/lane",
        json!({"regular_spots": 201}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["needs_consultation"], true);
    assert_eq!(body["data"]["total"], 0.0);
    assert_eq!(body["data"]["costs"]["needs_consultation"], true);
}

#[tokio::test]
async fn test_lane_rejects_absurd_spot_count() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/lane",
        json!({"regular_spots": 100_001}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_epoxy_quote() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/epoxy",
        json!({"material_id": "solid_epoxy", "area": 100}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["base_price_per_m2"], 45_000.0);
    assert_eq!(data["base_price"], 4_500_000.0);
    assert_eq!(data["total"], 4_500_000.0);
    assert_eq!(data["is_min_fee_applied"], false);
}

#[tokio::test]
async fn test_epoxy_color_decides_mixing_fee() {
    let (_, body) = post(
        app(Vec::new()),
        "/api/estimate/epoxy",
        json!({"material_id": "solid_epoxy", "area": 100, "color": "red"}),
    )
    .await;
    assert_eq!(body["data"]["color_mixing_fee"], 50_000.0);

    // Base color wins over a stale client flag
    let (_, body) = post(
        app(Vec::new()),
        "/api/estimate/epoxy",
        json!({
            "material_id": "solid_epoxy",
            "area": 100,
            "color": "gray",
            "needs_color_mixing_fee": true
        }),
    )
    .await;
    assert_eq!(body["data"]["color_mixing_fee"], 0.0);
}

#[tokio::test]
async fn test_epoxy_uses_snapshot_rules() {
    let rules = vec![PricingRule::new(
        ServiceType::Epoxy,
        RuleCategory::Option,
        "anti_slip",
        9_999.0,
    )];
    let (_, body) = post(
        app(rules),
        "/api/estimate/epoxy",
        json!({"material_id": "solid_epoxy", "area": 10, "include_anti_slip": true}),
    )
    .await;
    assert_eq!(body["data"]["anti_slip_price"], 99_990.0);
}

#[tokio::test]
async fn test_epoxy_rejects_negative_area() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/epoxy",
        json!({"material_id": "solid_epoxy", "area": -5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["details"]["field"], "area");
}

#[tokio::test]
async fn test_paint_quote() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/paint",
        json!({"type": "exterior", "area": 10, "is_waterproof": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["base_price"], 350_000.0);
    assert_eq!(body["data"]["waterproof_price"], 100_000.0);
    assert_eq!(body["data"]["total"], 450_000.0);
}

#[tokio::test]
async fn test_spots_from_area() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/spots",
        json!({"area_sqm": 560, "location_type": "ground"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_spots"], 20);
    assert_eq!(body["data"]["disabled_spots"], 1);
    assert_eq!(body["data"]["ev_spots"], 1);
    assert_eq!(body["data"]["regular_spots"], 18);
}

#[tokio::test]
async fn test_spots_rejects_area_above_limit() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/spots",
        json!({"area_sqm": 2_000_000}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn test_area_from_outline() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/area",
        json!({
            "points": [
                {"lat": 0.0, "lng": 0.0},
                {"lat": 0.001, "lng": 0.001},
                {"lat": 0.0, "lng": 0.001},
                {"lat": 0.001, "lng": 0.0}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let area = body["data"]["area_sqm"].as_f64().unwrap();
    assert!((area - 12_392.14).abs() < 0.1, "got {area}");
    // 12,392 m² / 28 = 442 ground spots
    assert_eq!(body["data"]["spots"]["total_spots"], 442);
}

#[tokio::test]
async fn test_area_rejects_bad_coordinate() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/area",
        json!({"points": [{"lat": 95.0, "lng": 127.0}]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn test_quick_quote() {
    let (status, body) = post(
        app(Vec::new()),
        "/api/estimate/quick",
        json!({"service": "epoxy", "material_id": "solid_epoxy", "area": 100}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["range"]["min"], 4_050_000.0);
    assert_eq!(body["data"]["range"]["max"], 4_950_000.0);
}

#[tokio::test]
async fn test_epoxy_catalog() {
    let (status, body) = get(app(Vec::new()), "/api/catalog/epoxy").await;
    assert_eq!(status, StatusCode::OK);
    let materials = body["data"]["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 4);
    assert_eq!(materials[0]["id"], "transparent_epoxy");
    assert_eq!(body["data"]["min_service_fee"], 300_000.0);
}
