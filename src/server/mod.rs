use crate::core::callbacks::{ControlState, InputId, OutputId};
use crate::core::charts::{pie_chart, scatter_chart, Figure};
use crate::core::dashboard::Dashboard;
use crate::core::filter::{filter_by_site, filter_records};
use crate::core::layout::PageLayout;
use crate::core::{PayloadRange, SiteSelection, ALL_SITES};
use crate::utils::error::{DashError, ErrorCategory};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::net::TcpListener;

mod page;

pub use page::render_index;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub changed: String,
    pub state: ControlState,
}

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub outputs: BTreeMap<OutputId, Figure>,
}

#[derive(Debug, Deserialize)]
pub struct FigureQuery {
    pub site: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FigureQuery {
    fn site(&self) -> SiteSelection {
        SiteSelection::parse(self.site.as_deref().unwrap_or(ALL_SITES))
    }

    fn range(&self) -> PayloadRange {
        PayloadRange::new(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = match self.category() {
            ErrorCategory::Request => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/layout", get(layout))
        .route("/api/callback", post(callback))
        .route("/api/figures/pie", get(pie_figure))
        .route("/api/figures/scatter", get(scatter_figure))
        .with_state(state)
}

pub async fn serve(dashboard: Dashboard, addr: &str) -> crate::utils::error::Result<()> {
    let state = Arc::new(AppState {
        dashboard: Arc::new(dashboard),
    });
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| DashError::ServerError {
        message: format!("failed to bind {}: {}", addr, e),
    })?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Dashboard running on http://{}/", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, DashError> {
    Ok(Html(render_index(state.dashboard.layout())?))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn layout(State(state): State<Arc<AppState>>) -> Json<PageLayout> {
    Json(state.dashboard.layout().clone())
}

async fn callback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, DashError> {
    let changed = InputId::parse(&request.changed)?;
    let outputs = state
        .dashboard
        .dispatch(changed, &request.state)
        .into_iter()
        .collect();
    Ok(Json(CallbackResponse { outputs }))
}

async fn pie_figure(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FigureQuery>,
) -> Json<Figure> {
    let site = query.site();
    let rows = filter_by_site(state.dashboard.table(), &site);
    Json(pie_chart(&site, &rows))
}

async fn scatter_figure(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FigureQuery>,
) -> Json<Figure> {
    let site = query.site();
    let rows = filter_records(state.dashboard.table(), &site, &query.range());
    Json(scatter_chart(&site, &rows))
}
