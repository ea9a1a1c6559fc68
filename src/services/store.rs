//! Participant store interface

use async_trait::async_trait;
use thiserror::Error;
use crate::models::{MatchRecord, MutualMatch, NewParticipant, Participant, ParticipantId, RankedPick, Selection};

/// Errors that can occur when reading or writing participant data
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Storage for participants, their selections and the resolved matches
///
/// Every multi-step write is atomic: either the whole change lands or
/// nothing does.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Insert a participant. Returns `None` if the id is already taken.
    async fn add_participant(&self, participant: NewParticipant) -> StoreResult<Option<Participant>>;

    /// All participants, ordered by id
    async fn list_participants(&self) -> StoreResult<Vec<Participant>>;

    /// Look up the participant owning a link token
    async fn get_participant_by_token(&self, token: &str) -> StoreResult<Option<Participant>>;

    /// A participant's selections, ordered by rank ascending
    async fn list_selections(&self, selector_id: ParticipantId) -> StoreResult<Vec<RankedPick>>;

    /// Every selection edge in the store
    async fn list_all_selections(&self) -> StoreResult<Vec<Selection>>;

    /// Replace a participant's whole selection set
    async fn replace_selections(&self, selector_id: ParticipantId, picks: &[RankedPick]) -> StoreResult<()>;

    /// Delete every match, then insert `matches`. Returns the number inserted.
    async fn replace_matches(&self, matches: &[MutualMatch]) -> StoreResult<u64>;

    /// All matches with both first names, ordered by match id
    async fn list_matches(&self) -> StoreResult<Vec<MatchRecord>>;

    /// Delete matches, selections and participants
    async fn clear_all(&self) -> StoreResult<()>;

    /// Health check for the backing storage
    async fn health_check(&self) -> StoreResult<bool>;
}
