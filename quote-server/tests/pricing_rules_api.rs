use axum::body::Body;
use http::{Request, StatusCode};
use quote_server::{Config, ServerState};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

async fn state_with_file(path: Option<&std::path::Path>) -> ServerState {
    let config = Config::with_overrides(0, path.map(|p| p.display().to_string()));
    ServerState::initialize(&config).await
}

async fn call(state: &ServerState, request: Request<Body>) -> (StatusCode, Value) {
    let response = state.http.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn list(state: &ServerState) -> (StatusCode, Value) {
    call(state, Request::get("/api/pricing-rules").body(Body::empty()).unwrap()).await
}

async fn reload(state: &ServerState) -> (StatusCode, Value) {
    call(
        state,
        Request::post("/api/pricing-rules/reload")
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn rules_file(rules: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{rules}").unwrap();
    file
}

fn rewrite(file: &NamedTempFile, content: &str) {
    std::fs::write(file.path(), content).unwrap();
}

#[tokio::test]
async fn test_snapshot_loaded_at_startup() {
    let file = rules_file(&json!([
        {"service_type": "lane", "category": "tier", "key": "tier_20", "value": 900000, "unit": "fixed"},
        {"service_type": "epoxy", "category": "option", "key": "anti_slip", "value": 9999, "unit": "m2"}
    ]));
    let state = state_with_file(Some(file.path())).await;

    let (status, body) = list(&state).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["version"], 1);
    assert_eq!(body["data"]["rules"][0]["key"], "tier_20");

    // Calculators price against the loaded snapshot
    let request = Request::post("/api/estimate/lane")
        .header("content-type", "application/json")
        .body(Body::from(json!({"regular_spots": 10}).to_string()))
        .unwrap();
    let (_, body) = call(&state, request).await;
    assert_eq!(body["data"]["base_price"], 900_000.0);
}

#[tokio::test]
async fn test_bad_file_at_startup_falls_back_to_defaults() {
    let file = rules_file(&json!({"not": "a list"}));
    let state = state_with_file(Some(file.path())).await;

    let (status, body) = list(&state).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 0);
    assert_eq!(body["data"]["version"], 0);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_snapshot() {
    let file = rules_file(&json!([
        {"service_type": "paint", "category": "area_base", "key": "interior", "value": 30000, "unit": "m2"}
    ]));
    let state = state_with_file(Some(file.path())).await;

    rewrite(&file, "[{\"service_type\": \"paint\",");
    let (status, body) = reload(&state).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 5002);

    let (_, body) = list(&state).await;
    assert_eq!(body["data"]["count"], 1);
    assert_eq!(body["data"]["rules"][0]["value"], 30000.0);
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let file = rules_file(&json!([]));
    let state = state_with_file(Some(file.path())).await;
    let before = state.pricing_rules();

    rewrite(
        &file,
        &json!([
            {"service_type": "common", "category": "option", "key": "min_fee", "value": 350000, "unit": "fixed"}
        ])
        .to_string(),
    );
    let (status, body) = reload(&state).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 1);
    assert_eq!(body["data"]["version"], 2);

    // Snapshots taken before the reload are untouched
    assert!(before.is_empty());
    assert_eq!(state.pricing_rules().len(), 1);
}

#[tokio::test]
async fn test_reload_of_deleted_file() {
    let file = rules_file(&json!([]));
    let path = file.path().to_path_buf();
    let state = state_with_file(Some(path.as_path())).await;

    drop(file);
    let (status, body) = reload(&state).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn test_reload_without_configured_path() {
    let state = state_with_file(None).await;
    let (status, body) = reload(&state).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5003);
}

#[tokio::test]
async fn test_example_rules_match_built_in_prices() {
    use quote_server::pricing::{estimate_epoxy_price, estimate_lane_price, estimate_paint_price};
    use quote_server::services::read_rules_file;
    use shared::models::{EpoxyQuoteInput, LaneSpots, MaterialId, PaintQuoteInput, PaintType};

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("pricing_rules.example.json");
    let rules = read_rules_file(&path).await.unwrap();
    assert_eq!(rules.len(), 24);

    let spots = LaneSpots {
        regular_spots: 60,
        disabled_spots: 2,
        ev_spots: 3,
    };
    assert_eq!(
        estimate_lane_price(&spots, Some(&rules)),
        estimate_lane_price(&spots, None)
    );

    let mut epoxy = EpoxyQuoteInput::new(MaterialId::Unlisted, 7.5);
    epoxy.include_anti_slip = true;
    epoxy.include_self_leveling = true;
    epoxy.needs_color_mixing_fee = true;
    assert_eq!(
        estimate_epoxy_price(&epoxy, Some(&rules)),
        estimate_epoxy_price(&epoxy, None)
    );

    let mut paint = PaintQuoteInput::new(PaintType::Exterior, 42.0);
    paint.is_fireproof = true;
    assert_eq!(
        estimate_paint_price(&paint, Some(&rules)),
        estimate_paint_price(&paint, None)
    );
}

#[tokio::test]
async fn test_out_of_range_rule_on_largest_area_uses_default() {
    let file = rules_file(&json!([
        {"service_type": "epoxy", "category": "material_base", "key": "solid_epoxy", "value": 1e23, "unit": "m2"}
    ]));
    let state = state_with_file(Some(file.path())).await;

    let (status, body) = call(
        &state,
        Request::post("/api/estimate/epoxy")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"material_id": "solid_epoxy", "area": 1_000_000.0}).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["base_price_per_m2"], 45_000.0);
    assert_eq!(body["data"]["total"], 45_000_000_000.0);
}
