//! HTTP host for the dashboard.
//!
//! Loads the CSV once at startup, then serves:
//! - `GET /health`
//! - `GET /api/dataset` - row count, date bounds and selectable fields
//! - `GET /api/figures?field=&start_date=&end_date=` - the reactive handler
//! - everything else from the built dashboard bundle

use crate::error::ApiError;
use anyhow::Context;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spx_core::{DateRange, MarketData, PriceField};
use spx_data::figure::FigurePair;
use spx_utils::dates::{format_date, parse_picker_date};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub csv_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct ServerState {
    pub data: Arc<MarketData>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FiguresQuery {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub min_date: String,
    pub max_date: String,
    pub fields: Vec<FieldOption>,
    pub default_field: PriceField,
}

/// One dropdown entry.
#[derive(Debug, Serialize)]
pub struct FieldOption {
    pub label: &'static str,
    pub value: PriceField,
}

pub fn router(state: ServerState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dataset", get(dataset_info))
        .route("/api/figures", get(figures))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_serve(cfg: ServeConfig) -> anyhow::Result<()> {
    let data = MarketData::from_path(&cfg.csv_path)
        .with_context(|| format!("loading {}", cfg.csv_path.display()))?;

    if !cfg.static_dir.is_dir() {
        log::warn!(
            "static dir {} not found; only the API will be served (build the dashboard with `dx build`)",
            cfg.static_dir.display()
        );
    }

    let state = ServerState {
        data: Arc::new(data),
    };
    let app = router(state, &cfg.static_dir);

    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cfg.host, cfg.port))?;

    log::info!("SPX dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install Ctrl+C handler: {e}");
        return;
    }
    log::info!("Shutdown signal received, stopping");
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn dataset_info(State(state): State<ServerState>) -> Json<DatasetInfo> {
    let data = &state.data;
    Json(DatasetInfo {
        rows: data.len(),
        min_date: format_date(&data.min_date()),
        max_date: format_date(&data.max_date()),
        fields: PriceField::ALL
            .into_iter()
            .map(|f| FieldOption {
                label: f.label(),
                value: f,
            })
            .collect(),
        default_field: PriceField::default(),
    })
}

fn query_bound(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_picker_date(s)
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("invalid {name} {s:?}, expected YYYY-MM-DD"))),
    }
}

async fn figures(
    State(state): State<ServerState>,
    Query(q): Query<FiguresQuery>,
) -> Result<Json<FigurePair>, ApiError> {
    let field = match q.field.as_deref() {
        None | Some("") => PriceField::default(),
        Some(s) => s.parse::<PriceField>()?,
    };
    let range = DateRange::bounded(
        query_bound("start_date", q.start_date.as_deref())?,
        query_bound("end_date", q.end_date.as_deref())?,
    );
    Ok(Json(spx_data::update_figures(&state.data, field, range)))
}
