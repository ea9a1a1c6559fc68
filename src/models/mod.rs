// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, Participant, NewParticipant, ParticipantId, Rank, RankedPick, Selection, MutualMatch, MatchRecord};
pub use requests::{AdminLoginRequest, SelectionEntry, SubmitSelectionsRequest};
pub use responses::{
    LoginResponse, UploadResponse, ParticipantLink, ParticipantSummary, Candidate,
    ParticipantViewResponse, SuccessResponse, RunMatchingResponse, HealthResponse, ErrorResponse,
};
