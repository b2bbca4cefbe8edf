//! Web API module for screensim.
//!
//! This module provides a REST API for the simulator, enabling a web-based
//! frontend to derive metrics, manage device presets, analyze snippets, and
//! fetch the generated simulator documents.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/metrics` - Derive display metrics from query parameters
//! - `GET /api/presets` - List the active preset collection
//! - `POST /api/presets` - Replace the collection from a raw text document
//! - `POST /api/presets/reload` - Re-load the configured preset source
//! - `POST /api/analyze` - Scan a snippet for px literals
//! - `POST /api/render/document` - Wrap a snippet into the document under test
//! - `POST /api/render/font-sample` - Font-size sample sheet
//! - `POST /api/render/pattern` - Tiled pixel-pattern sheet
//! - `POST /api/render/px-boxes` - Physical-size boxes for px literals

pub mod static_files;

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::metrics::{derive_metrics, fit_scale, FitMargins};
use crate::models::{
    round2, DeviceProfile, DisplayMetrics, PresetCollection, PresetSource, SimulatorInputs,
};
use crate::parser::{extract_px_values, parse_presets};
use crate::render::{self, build_document, PatternKind};
use crate::services::PresetService;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Active preset collection, replaced wholesale on successful loads
    presets: Arc<RwLock<PresetCollection>>,
    /// Last preset-load status note, if any
    status: Arc<RwLock<Option<String>>>,
}

impl AppState {
    /// Creates a new application state around an already loaded collection.
    #[must_use]
    pub fn new(config: Config, presets: PresetCollection, status: Option<String>) -> Self {
        Self {
            config: Arc::new(config),
            presets: Arc::new(RwLock::new(presets)),
            status: Arc::new(RwLock::new(status)),
        }
    }

    /// Creates a state backed by the built-in preset list.
    #[must_use]
    pub fn with_builtin_presets(config: Config) -> Self {
        Self::new(config, PresetService::builtin_collection(), None)
    }

    fn snapshot_presets(&self) -> PresetCollection {
        self.presets
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn replace_presets(&self, collection: PresetCollection, note: Option<String>) {
        *self
            .presets
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = collection;
        *self
            .status
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = note;
    }

    fn set_status(&self, note: Option<String>) {
        *self
            .status
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = note;
    }

    fn status(&self) -> Option<String> {
        self.status
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Simulator inputs as they arrive from the frontend.
///
/// Every field is optional; absent fields fall back to the defaults, with the
/// configuration supplying the calibration density and fit toggle. The
/// conversion sanitizes everything, so handlers never see out-of-domain
/// values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InputsDto {
    /// Device width in pixels.
    pub width_px: Option<f64>,
    /// Device height in pixels.
    pub height_px: Option<f64>,
    /// Physical diagonal in inches.
    pub diagonal_in: Option<f64>,
    /// Manual density, overrides the diagonal.
    pub ppi: Option<f64>,
    /// Viewing display density.
    pub calibration_dpi: Option<f64>,
    /// Whether to scale the preview down to fit the viewport.
    pub fit: Option<bool>,
}

impl InputsDto {
    fn into_inputs(self, config: &Config) -> SimulatorInputs {
        let defaults = SimulatorInputs::default();
        SimulatorInputs {
            width_px: self.width_px.unwrap_or(defaults.width_px),
            height_px: self.height_px.unwrap_or(defaults.height_px),
            diagonal_in: self.diagonal_in,
            manual_ppi: self.ppi,
            calibration_dpi: self
                .calibration_dpi
                .unwrap_or(config.display.calibration_dpi),
            fit_to_viewport: self.fit.unwrap_or(config.display.fit_preview),
        }
        .sanitized()
    }
}

/// Metrics response: the normalized inputs and what they derive to.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Inputs after clamping, as the calculator saw them.
    pub inputs: SimulatorInputs,
    /// Derived metrics, rounded for display.
    pub metrics: DisplayMetrics,
}

/// Preset information for API responses.
#[derive(Debug, Serialize)]
pub struct PresetInfo {
    /// Device name.
    pub name: String,
    /// Horizontal resolution in device pixels.
    pub width_px: f64,
    /// Vertical resolution in device pixels.
    pub height_px: f64,
    /// Pixel density, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_ppi: Option<f64>,
    /// Physical diagonal in inches, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal_in: Option<f64>,
    /// Human-readable selector label.
    pub label: String,
}

impl From<&DeviceProfile> for PresetInfo {
    fn from(profile: &DeviceProfile) -> Self {
        Self {
            name: profile.name.clone(),
            width_px: profile.width_px,
            height_px: profile.height_px,
            density_ppi: profile.density_ppi,
            diagonal_in: profile.diagonal_in,
            label: profile.label(),
        }
    }
}

/// Preset list response.
#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    /// Where the collection came from.
    pub source: String,
    /// When the collection was loaded (RFC 3339 format).
    pub loaded_at: String,
    /// Number of presets.
    pub count: usize,
    /// Index of the preset to auto-select.
    pub selected: usize,
    /// Last load status note, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The presets in source order.
    pub presets: Vec<PresetInfo>,
}

impl PresetListResponse {
    fn from_collection(collection: &PresetCollection, note: Option<String>) -> Self {
        Self {
            source: collection.source().to_string(),
            loaded_at: collection.loaded_at().to_rfc3339(),
            count: collection.len(),
            selected: PresetService::preferred_index(collection.profiles()),
            note,
            presets: collection.profiles().iter().map(PresetInfo::from).collect(),
        }
    }
}

/// Snippet analysis request.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The pasted HTML/CSS/JS snippet.
    pub code: String,
    /// Current simulator inputs.
    #[serde(default)]
    pub inputs: InputsDto,
}

/// Snippet analysis response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Millimeters per simulated pixel at the current density.
    pub mm_per_px: f64,
    /// Extracted px literals, ascending.
    pub values: Vec<PxValueInfo>,
}

/// One extracted px literal and its physical size.
#[derive(Debug, Serialize)]
pub struct PxValueInfo {
    /// The literal value in CSS pixels.
    pub px: f64,
    /// Its size on the simulated device in millimeters.
    pub mm: f64,
}

/// Document render request.
#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    /// The pasted HTML/CSS/JS snippet.
    pub code: String,
    /// Current simulator inputs.
    #[serde(default)]
    pub inputs: InputsDto,
    /// Viewport size for fit-to-viewport scaling.
    #[serde(default)]
    pub viewport: Option<ViewportDto>,
}

/// Client viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportDto {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

/// Font-sample render request.
#[derive(Debug, Deserialize)]
pub struct FontSampleRequest {
    /// Font size to sample, in CSS pixels.
    pub size_px: f64,
    /// Current simulator inputs.
    #[serde(default)]
    pub inputs: InputsDto,
}

/// Pixel-pattern render request.
#[derive(Debug, Deserialize)]
pub struct PatternRequest {
    /// Tile pattern to draw.
    #[serde(default)]
    pub kind: PatternKind,
    /// Pattern cell size in CSS pixels.
    pub cell_px: f64,
    /// Current simulator inputs.
    #[serde(default)]
    pub inputs: InputsDto,
}

/// Px-box render request.
#[derive(Debug, Deserialize)]
pub struct PxBoxesRequest {
    /// The pasted HTML/CSS/JS snippet to scan.
    pub code: String,
    /// Current simulator inputs.
    #[serde(default)]
    pub inputs: InputsDto,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/metrics - Derive display metrics from query parameters.
async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<InputsDto>,
) -> Json<MetricsResponse> {
    let inputs = query.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs).rounded();
    Json(MetricsResponse { inputs, metrics })
}

/// GET /api/presets - List the active preset collection.
async fn list_presets(State(state): State<AppState>) -> Json<PresetListResponse> {
    let collection = state.snapshot_presets();
    Json(PresetListResponse::from_collection(
        &collection,
        state.status(),
    ))
}

/// POST /api/presets - Replace the collection from a raw text document.
///
/// The body is the preset document itself, in any of the recognized shapes.
/// A document with zero recognizable records leaves the active collection
/// untouched and reports 422.
async fn upload_presets(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PresetListResponse>, (StatusCode, Json<ApiError>)> {
    let profiles = parse_presets(&body);
    if profiles.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new("No presets recognized in document")),
        ));
    }

    let note = format!("Loaded {} preset(s) from upload.", profiles.len());
    let collection = PresetCollection::new(profiles, PresetSource::Upload);
    let response = PresetListResponse::from_collection(&collection, Some(note.clone()));
    state.replace_presets(collection, Some(note));

    Ok(Json(response))
}

/// POST /api/presets/reload - Re-load the configured preset source.
///
/// Load failures are part of normal operation here: the active collection
/// stays in place and the outcome is reported in the response note, never as
/// a server error.
async fn reload_presets(
    State(state): State<AppState>,
) -> Result<Json<PresetListResponse>, (StatusCode, Json<ApiError>)> {
    let Some(source) = state.config.presets.source.clone() else {
        state.set_status(Some("No preset source configured.".to_string()));
        let collection = state.snapshot_presets();
        return Ok(Json(PresetListResponse::from_collection(
            &collection,
            state.status(),
        )));
    };

    // The loader does blocking file/network I/O
    let result = tokio::task::spawn_blocking(move || PresetService::load_source(&source))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Preset reload task failed",
                    e.to_string(),
                )),
            )
        })?;

    match result {
        Ok(collection) if !collection.is_empty() => {
            let note = format!(
                "Loaded {} preset(s) from {}.",
                collection.len(),
                collection.source()
            );
            debug!("{note}");
            let response = PresetListResponse::from_collection(&collection, Some(note.clone()));
            state.replace_presets(collection, Some(note));
            Ok(Json(response))
        }
        Ok(collection) => {
            let note = format!("{}: no presets recognized.", collection.source());
            debug!("{note}");
            state.set_status(Some(note));
            let active = state.snapshot_presets();
            Ok(Json(PresetListResponse::from_collection(
                &active,
                state.status(),
            )))
        }
        Err(e) => {
            let note = format!("Could not reload presets: {e:#}.");
            debug!("{note}");
            state.set_status(Some(note));
            let active = state.snapshot_presets();
            Ok(Json(PresetListResponse::from_collection(
                &active,
                state.status(),
            )))
        }
    }
}

/// POST /api/analyze - Scan a snippet for px literals.
async fn analyze_snippet(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let inputs = request.inputs.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs);

    let values = extract_px_values(&request.code)
        .into_iter()
        .map(|px| PxValueInfo {
            px,
            mm: round2(px * metrics.mm_per_px),
        })
        .collect();

    Json(AnalyzeResponse {
        mm_per_px: (metrics.mm_per_px * 1000.0).round() / 1000.0,
        values,
    })
}

/// POST /api/render/document - Wrap a snippet into the document under test.
///
/// The CSS box size and fit scale travel in response headers so the thin
/// frontend can size its viewing surface without re-deriving anything.
async fn render_document(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let inputs = request.inputs.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs);

    let scale = match (inputs.fit_to_viewport, request.viewport) {
        (true, Some(viewport)) => fit_scale(
            metrics.css_width_px,
            metrics.css_height_px,
            viewport.width,
            viewport.height,
            FitMargins::default(),
        ),
        _ => 1.0,
    };

    html_response(&build_document(&request.code), Some((&metrics, scale)))
}

/// POST /api/render/font-sample - Font-size sample sheet.
async fn render_font_sample(
    State(state): State<AppState>,
    Json(request): Json<FontSampleRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let inputs = request.inputs.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs);
    html_response(&render::render_font_sample(request.size_px, &metrics), None)
}

/// POST /api/render/pattern - Tiled pixel-pattern sheet.
async fn render_pattern(
    State(state): State<AppState>,
    Json(request): Json<PatternRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let inputs = request.inputs.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs);
    html_response(
        &render::render_pixel_pattern(request.kind, request.cell_px, &metrics),
        None,
    )
}

/// POST /api/render/px-boxes - Physical-size boxes for px literals.
async fn render_px_boxes(
    State(state): State<AppState>,
    Json(request): Json<PxBoxesRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let values = extract_px_values(&request.code);
    if values.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new("No px values found in snippet")),
        ));
    }

    let inputs = request.inputs.into_inputs(&state.config);
    let metrics = derive_metrics(&inputs);
    html_response(&render::render_px_boxes(&values, &metrics), None)
}

/// Builds a `text/html` response, optionally carrying the CSS box geometry.
fn html_response(
    html: &str,
    geometry: Option<(&DisplayMetrics, f64)>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8");

    if let Some((metrics, scale)) = geometry {
        builder = builder
            .header("X-Css-Width", round2(metrics.css_width_px).to_string())
            .header("X-Css-Height", round2(metrics.css_height_px).to_string())
            .header("X-Fit-Scale", round2(scale).to_string());
    }

    builder.body(Body::from(html.to_string())).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Failed to build response",
                e.to_string(),
            )),
        )
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally on the user's machine alongside
    // the frontend; restrict origins before deploying anywhere shared.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Metrics endpoint
        .route("/api/metrics", get(get_metrics))
        // Preset endpoints
        .route("/api/presets", get(list_presets).post(upload_presets))
        .route("/api/presets/reload", post(reload_presets))
        // Analysis endpoint
        .route("/api/analyze", post(analyze_snippet))
        // Render endpoints
        .route("/api/render/document", post(render_document))
        .route("/api/render/font-sample", post(render_font_sample))
        .route("/api/render/pattern", post(render_pattern))
        .route("/api/render/px-boxes", post(render_px_boxes))
        // Embedded frontend
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::with_builtin_presets(config);

    // Fire-and-forget load of the configured preset source: the server comes
    // up on the built-in list and the collection is swapped in whenever the
    // load resolves. No cancellation, no timeout, no retry; any failure is
    // reduced to a status note and the built-ins stay active.
    if let Some(source) = state.config.presets.source.clone() {
        let task_state = state.clone();
        tokio::task::spawn_blocking(move || {
            match PresetService::load_source(&source) {
                Ok(collection) if !collection.is_empty() => {
                    let note = format!(
                        "Loaded {} preset(s) from {}.",
                        collection.len(),
                        collection.source()
                    );
                    info!("{note}");
                    task_state.replace_presets(collection, Some(note));
                }
                Ok(collection) => {
                    let note = format!("{}: no presets recognized.", collection.source());
                    info!("{note}");
                    task_state.set_status(Some(note));
                }
                Err(e) => {
                    let note = format!("Could not load presets from {source}: {e:#}.");
                    info!("{note}");
                    task_state.set_status(Some(note));
                }
            }
        });
    }

    let app = create_router(state);

    info!("Starting screensim web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
