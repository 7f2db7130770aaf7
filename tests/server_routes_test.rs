use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use launch_dash::core::layout::SliderSettings;
use launch_dash::core::dataset::parse_launch_csv;
use launch_dash::server::{build_router, AppState};
use launch_dash::Dashboard;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const CSV: &str = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,0,v1.0,0
CCAFS LC-40,3170,v1.1,0
CCAFS LC-40,2034,FT,1
KSC LC-39A,2490,FT,1
KSC LC-39A,6070,FT,0
VAFB SLC-4E,9600,B4,1
";

fn test_app() -> Router {
    let table = parse_launch_csv(CSV.as_bytes()).expect("csv");
    let dashboard = Dashboard::new(table, SliderSettings::default());
    build_router(Arc::new(AppState {
        dashboard: Arc::new(dashboard),
    }))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn post_callback(payload: Value) -> Request<Body> {
    Request::post("/api/callback")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn test_index_serves_dashboard_page() {
    let request = Request::get("/").body(Body::empty()).expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let html = String::from_utf8(body.to_vec()).expect("utf8");
    assert!(html.contains("SpaceX Launch Records Dashboard"));
    assert!(html.contains("success-payload-scatter-chart"));
    assert!(html.contains(r#"step="1000" list="payload-marks""#));
    assert!(html.contains(r#"<option value="5000" label="5000"></option>"#));
}

#[tokio::test]
async fn test_layout_lists_sites_and_initial_range() {
    let request = Request::get("/api/layout").body(Body::empty()).expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let layout = json_body(response).await;
    let values: Vec<&str> = layout["site_dropdown"]["options"]
        .as_array()
        .expect("options")
        .iter()
        .map(|o| o["value"].as_str().expect("value"))
        .collect();
    assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    assert_eq!(layout["payload_slider"]["value"], json!([0.0, 9600.0]));
    assert_eq!(layout["payload_slider"]["step"], json!(1000.0));
}

#[tokio::test]
async fn test_site_change_returns_both_figures() {
    let request = post_callback(json!({
        "changed": "site-dropdown",
        "state": { "site": "CCAFS LC-40", "payload_range": [0, 10000] }
    }));
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let pie = &body["outputs"]["success-pie-chart"];
    assert_eq!(pie["layout"]["title"]["text"], "Success vs. Failure for CCAFS LC-40");
    assert_eq!(pie["data"][0]["labels"], json!(["Failure", "Success"]));
    assert_eq!(pie["data"][0]["values"], json!([2, 1]));
    assert_eq!(pie["data"][0]["marker"]["colors"], json!(["red", "green"]));

    let scatter = &body["outputs"]["success-payload-scatter-chart"];
    assert_eq!(scatter["data"].as_array().expect("traces").len(), 3);
}

#[tokio::test]
async fn test_slider_change_returns_only_scatter() {
    let request = post_callback(json!({
        "changed": "payload-slider",
        "state": { "site": "ALL", "payload_range": [2000, 3000] }
    }));
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let outputs = body["outputs"].as_object().expect("outputs");
    assert_eq!(outputs.len(), 1);

    let traces = outputs["success-payload-scatter-chart"]["data"]
        .as_array()
        .expect("traces");
    let points: usize = traces
        .iter()
        .map(|t| t["x"].as_array().expect("x").len())
        .sum();
    assert_eq!(points, 2);
}

#[tokio::test]
async fn test_empty_selection_renders_empty_figures() {
    let request = post_callback(json!({
        "changed": "site-dropdown",
        "state": { "site": "Boca Chica", "payload_range": [0, 10000] }
    }));
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["outputs"]["success-pie-chart"]["data"][0]["values"], json!([]));
    assert_eq!(body["outputs"]["success-payload-scatter-chart"]["data"], json!([]));
}

#[tokio::test]
async fn test_unknown_input_is_bad_request() {
    let request = post_callback(json!({
        "changed": "launch-year",
        "state": { "site": "ALL", "payload_range": [0, 10000] }
    }));
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Unknown component: launch-year");
}

#[tokio::test]
async fn test_figure_routes_filter_by_query() {
    let request = Request::get("/api/figures/pie?site=KSC%20LC-39A")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    let pie = json_body(response).await;
    assert_eq!(pie["data"][0]["values"], json!([1, 1]));
    assert_eq!(pie["data"][0]["labels"], json!(["Failure", "Success"]));

    let request = Request::get("/api/figures/scatter?min=2000&max=7000")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    let scatter = json_body(response).await;
    assert_eq!(
        scatter["layout"]["title"]["text"],
        "Payload vs. Launch Success for All Sites"
    );
    let points: usize = scatter["data"]
        .as_array()
        .expect("traces")
        .iter()
        .map(|t| t["x"].as_array().expect("x").len())
        .sum();
    assert_eq!(points, 4);
}
