use std::sync::Arc;
use tokio::sync::Mutex;
use validator::Validate;
use crate::core::{eligibility, roster, MatchResolver, SelectionGraph};
use crate::error::AppError;
use crate::models::{
    Candidate, MatchRecord, Participant, ParticipantSummary, ParticipantViewResponse, SubmitSelectionsRequest,
};
use crate::services::store::ParticipantStore;

/// Result of a roster import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub participants_added: usize,
    pub errors: Vec<String>,
}

/// Matchmaking operations over an injected participant store
///
/// Every write (import, selection submission, matching run, reset) takes
/// the same lock, so a matching run always sees a stable selection set and
/// never interleaves with another write.
pub struct MatchingService {
    store: Arc<dyn ParticipantStore>,
    resolver: MatchResolver,
    write_lock: Mutex<()>,
}

impl MatchingService {
    pub fn new(store: Arc<dyn ParticipantStore>, resolver: MatchResolver) -> Self {
        Self {
            store,
            resolver,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &dyn ParticipantStore {
        self.store.as_ref()
    }

    /// Import participants from an uploaded CSV roster
    pub async fn import_roster(&self, csv: &[u8]) -> Result<ImportSummary, AppError> {
        let rows = roster::parse_roster(csv)?;

        let _guard = self.write_lock.lock().await;
        let mut summary = ImportSummary::default();

        for row in rows {
            match row {
                Ok(new_participant) => {
                    let id = new_participant.id;
                    match self.store.add_participant(new_participant).await? {
                        Some(_) => summary.participants_added += 1,
                        None => summary.errors.push(format!("Duplicate ID: {}", id)),
                    }
                }
                Err(message) => summary.errors.push(message),
            }
        }

        tracing::info!(
            "Imported {} participants ({} rows rejected)",
            summary.participants_added,
            summary.errors.len()
        );

        Ok(summary)
    }

    async fn participant_for(&self, token: &str) -> Result<Participant, AppError> {
        self.store
            .get_participant_by_token(token)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    /// The selection page for a participant: who they are, who they may pick, what they picked
    pub async fn participant_view(&self, token: &str) -> Result<ParticipantViewResponse, AppError> {
        let participant = self.participant_for(token).await?;
        let pool = self.store.list_participants().await?;
        let current_selections = self.store.list_selections(participant.id).await?;

        let available_participants = eligibility::available_candidates(&participant, &pool)
            .map(|p| Candidate {
                id: p.id,
                first_name: p.first_name.clone(),
            })
            .collect();

        Ok(ParticipantViewResponse {
            participant: ParticipantSummary {
                id: participant.id,
                first_name: participant.first_name,
                gender: participant.gender,
            },
            available_participants,
            current_selections,
        })
    }

    /// Replace the token owner's selections. Returns how many were stored.
    ///
    /// An unknown token is reported before anything about the request body.
    pub async fn submit_selections(
        &self,
        token: &str,
        request: &SubmitSelectionsRequest,
    ) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;

        let participant = self.participant_for(token).await?;
        if let Err(errors) = request.validate() {
            tracing::info!("Validation failed for selections of participant {}: {:?}", participant.id, errors);
            return Err(errors.into());
        }

        let pool = self.store.list_participants().await?;
        let picks = eligibility::check_selections(&participant, &request.selections, &pool)?;

        self.store.replace_selections(participant.id, &picks).await?;

        tracing::info!("Participant {} submitted {} selections", participant.id, picks.len());
        Ok(picks.len())
    }

    /// Recompute every mutual match from the current selections
    ///
    /// Prior matches are replaced wholesale. Returns the number of matches found.
    pub async fn run_matching(&self) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;

        let participant_ids: Vec<_> = self
            .store
            .list_participants()
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        let graph: SelectionGraph = self.store.list_all_selections().await?.into_iter().collect();

        let result = self.resolver.resolve(&participant_ids, &graph);
        self.store.replace_matches(&result.matches).await?;

        tracing::info!(
            "Matching run found {} matches across {} participants",
            result.matches.len(),
            result.participants_scanned
        );

        Ok(result.matches.len())
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, AppError> {
        Ok(self.store.list_participants().await?)
    }

    pub async fn matches(&self) -> Result<Vec<MatchRecord>, AppError> {
        Ok(self.store.list_matches().await?)
    }

    /// Delete all participants, selections and matches
    pub async fn clear_all(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.store.clear_all().await?;
        Ok(())
    }

    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}
