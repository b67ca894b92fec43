use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use entity::ShortenedEntry;
use serde::Deserialize;
use shortener_service::{ShortenError, ShortenerPanel};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::page;

/// One panel per process: the server's lifetime is the session.
#[derive(Clone)]
pub struct AppState {
    panel: Arc<Mutex<ShortenerPanel>>,
    public_origin: Option<String>,
}

impl AppState {
    pub fn new(public_origin: Option<String>) -> Self {
        Self {
            panel: Arc::new(Mutex::new(ShortenerPanel::new())),
            public_origin,
        }
    }

    /// The configured origin, or `http://<Host>` of the current request.
    fn origin(&self, headers: &HeaderMap) -> String {
        if let Some(origin) = &self.public_origin {
            return origin.clone();
        }

        let host = headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("localhost");
        format!("http://{}", host)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_panel))
        .route("/shorten", post(submit_form))
        .route("/api/entries", get(list_entries))
        .route("/api/shorten", post(create_entry))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn show_panel(State(state): State<AppState>) -> Html<String> {
    let panel = state.panel.lock().await;
    Html(page::render(&panel, None))
}

#[derive(Deserialize)]
struct ShortenForm {
    #[serde(default)]
    url: String,
    #[serde(default)]
    validity: String,
    #[serde(default)]
    custom_code: String,
}

async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Html<String> {
    let origin = state.origin(&headers);
    let mut panel = state.panel.lock().await;

    panel.set_url(form.url);
    panel.set_validity(form.validity);
    panel.set_custom_code(form.custom_code);

    let alert = match panel.shorten(&origin) {
        Err(ShortenError::SessionLimit) => Some(ShortenError::SessionLimit.to_string()),
        Err(ShortenError::InvalidUrl) | Ok(_) => None,
    };

    Html(page::render(&panel, alert.as_deref()))
}

async fn list_entries(State(state): State<AppState>) -> Json<Vec<ShortenedEntry>> {
    let panel = state.panel.lock().await;
    Json(panel.entries().to_vec())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEntryRequest {
    url: String,
    #[serde(default)]
    validity: Option<String>,
    #[serde(default)]
    custom_code: Option<String>,
}

async fn create_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<ShortenedEntry>), ApiError> {
    let origin = state.origin(&headers);
    let mut panel = state.panel.lock().await;

    panel.set_url(payload.url);
    panel.set_validity(payload.validity.unwrap_or_default());
    panel.set_custom_code(payload.custom_code.unwrap_or_default());

    let entry = panel.shorten(&origin)?.clone();
    Ok((StatusCode::CREATED, Json(entry)))
}
