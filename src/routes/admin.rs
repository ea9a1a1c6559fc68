use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use crate::core::roster::{self, RosterError};
use crate::error::AppError;
use crate::models::{
    AdminLoginRequest, LoginResponse, ParticipantLink, RunMatchingResponse, SuccessResponse, UploadResponse,
};
use crate::routes::AppState;
use crate::services::LoginOutcome;

/// Configure admin routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(login))
            .route("/upload-csv", web::post().to(upload_csv))
            .route("/participants", web::get().to(list_participants))
            .route("/run-matching", web::post().to(run_matching))
            .route("/matches", web::get().to(list_matches))
            .route("/clear-all", web::post().to(clear_all)),
    );
}

/// Admin login endpoint
///
/// POST /api/admin/login
///
/// Request body:
/// ```json
/// { "password": "string" }
/// ```
async fn login(state: web::Data<AppState>, req: web::Json<AdminLoginRequest>) -> impl Responder {
    match state.auth.verify(&req.password) {
        LoginOutcome::Accepted => HttpResponse::Ok().json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
        LoginOutcome::Rejected => HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            message: "Invalid password".to_string(),
        }),
        LoginOutcome::Error => HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            message: "Authentication error".to_string(),
        }),
    }
}

fn upload_error(err: MultipartError) -> AppError {
    AppError::InvalidUpload(err.to_string())
}

/// Read the `file` part of a multipart roster upload, skipping any other parts
async fn read_roster_file(mut payload: Multipart, max_bytes: usize) -> Result<Vec<u8>, AppError> {
    while let Some(mut field) = payload.try_next().await.map_err(upload_error)? {
        if field.name() != Some("file") {
            while field.try_next().await.map_err(upload_error)?.is_some() {}
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        roster::check_file_name(file_name.as_deref())?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(upload_error)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(RosterError::TooLarge(max_bytes).into());
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(bytes);
    }

    Err(RosterError::NoFile.into())
}

/// Upload a participant roster
///
/// POST /api/admin/upload-csv
///
/// `multipart/form-data` with the CSV in the `file` field; the CSV needs an
/// `id,first_name,gender,email` header.
async fn upload_csv(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, AppError> {
    let csv = read_roster_file(payload, state.max_upload_bytes).await?;
    let summary = state.matching.import_roster(&csv).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        participants_added: summary.participants_added,
        errors: summary.errors,
    }))
}

/// All participants with their personal selection links
async fn list_participants(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let participants: Vec<ParticipantLink> = state
        .matching
        .participants()
        .await?
        .into_iter()
        .map(|participant| ParticipantLink {
            link: state.selection_link(&participant.unique_token),
            participant,
        })
        .collect();

    Ok(HttpResponse::Ok().json(participants))
}

async fn run_matching(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let matches_found = state.matching.run_matching().await?;

    Ok(HttpResponse::Ok().json(RunMatchingResponse {
        success: true,
        matches_found,
    }))
}

async fn list_matches(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.matching.matches().await?))
}

async fn clear_all(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.matching.clear_all().await?;

    Ok(HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: "All data cleared".to_string(),
    }))
}
