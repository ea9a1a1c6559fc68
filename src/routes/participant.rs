use actix_web::{web, HttpResponse};
use crate::error::AppError;
use crate::models::{SubmitSelectionsRequest, SuccessResponse};
use crate::routes::AppState;

/// Configure participant-facing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/participant")
            .route("/{token}", web::get().to(get_participant))
            .route("/{token}/selections", web::post().to(submit_selections)),
    );
}

/// Selection page data for the participant owning `token`
///
/// GET /api/participant/{token}
async fn get_participant(
    state: web::Data<AppState>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.matching.participant_view(&token).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Replace the participant's ranked selections
///
/// POST /api/participant/{token}/selections
///
/// Request body:
/// ```json
/// { "selections": [{ "id": 4, "rank": 1 }] }
/// ```
async fn submit_selections(
    state: web::Data<AppState>,
    token: web::Path<String>,
    req: web::Json<SubmitSelectionsRequest>,
) -> Result<HttpResponse, AppError> {
    let submitted = state.matching.submit_selections(&token, &req).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: format!("Submitted {} selections", submitted),
    }))
}
