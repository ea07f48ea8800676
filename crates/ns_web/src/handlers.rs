use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use ns_report::{render_html, ReportStats, ReportStyle};
use crate::AppState;

pub const SERVICE_NAME: &str = "Smart News Summarizer Agent";
pub const API_VERSION: &str = "1.0";

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_html: Option<String>,
    pub stats: ReportStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()).into_response(),
    };
    let topic = request.topic.as_deref().unwrap_or_default().trim().to_string();
    if topic.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Topic is required").into_response();
    }
    let style = request
        .style
        .as_deref()
        .map(ReportStyle::from_key)
        .unwrap_or(state.default_style);

    info!("📨 Summarize request for: {}", topic);
    let pipeline = state.pipeline.clone();
    let report = match tokio::spawn(async move { pipeline.run(&topic).await }).await {
        Ok(outcome) => outcome.into_text(),
        Err(e) => {
            error!("❌ Summarize task failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let response = SummarizeResponse {
        stats: ReportStats::from_report(&report),
        report_html: Some(render_html(&report, style)),
        report,
        success: true,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
        "version": API_VERSION,
    }))
}

pub async fn info() -> impl IntoResponse {
    Json(json!({
        "name": SERVICE_NAME,
        "version": API_VERSION,
        "description": "Automatically find recent news and create brief summaries",
        "endpoints": {
            "POST /api/summarize": "Summarize news",
            "GET /api/health": "Health check",
            "GET /api/info": "API information",
        },
    }))
}
