use serde::{Deserialize, Serialize};
use crate::models::domain::{Gender, Participant, ParticipantId, RankedPick};

/// Response for admin login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Response for the roster CSV upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub participants_added: usize,
    pub errors: Vec<String>,
}

/// Participant as listed for the admin, with their personal selection link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantLink {
    #[serde(flatten)]
    pub participant: Participant,
    pub link: String,
}

/// Public view of the participant owning a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub first_name: String,
    pub gender: Gender,
}

/// A participant the token owner may select
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: ParticipantId,
    pub first_name: String,
}

/// Response for the participant selection page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantViewResponse {
    pub participant: ParticipantSummary,
    pub available_participants: Vec<Candidate>,
    pub current_selections: Vec<RankedPick>,
}

/// Generic success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Response for a matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMatchingResponse {
    pub success: bool,
    pub matches_found: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
