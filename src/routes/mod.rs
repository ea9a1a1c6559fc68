// Route exports
pub mod admin;
pub mod participant;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::models::HealthResponse;
use crate::services::{AdminAuth, MatchingService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matching: Arc<MatchingService>,
    pub auth: Arc<AdminAuth>,
    pub frontend_url: String,
    /// Largest roster file accepted by the upload endpoint
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Frontend URL a participant opens to make their selections
    pub fn selection_link(&self, token: &str) -> String {
        format!("{}/select/{}", self.frontend_url.trim_end_matches('/'), token)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .configure(admin::configure)
            .configure(participant::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.matching.is_healthy().await { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
