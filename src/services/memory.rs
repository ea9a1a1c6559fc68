//! In-memory participant store

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use crate::models::{MatchRecord, MutualMatch, NewParticipant, Participant, ParticipantId, RankedPick, Selection};
use crate::services::store::{ParticipantStore, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    participants: BTreeMap<ParticipantId, Participant>,
    selections: HashMap<ParticipantId, Vec<RankedPick>>,
    matches: Vec<(i64, MutualMatch)>,
    next_match_id: i64,
}

/// In-memory participant store for testing and development
///
/// All tables sit behind one lock, so each operation is atomic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantStore for InMemoryStore {
    async fn add_participant(&self, participant: NewParticipant) -> StoreResult<Option<Participant>> {
        let mut tables = self.tables.write().await;

        let token_taken = tables
            .participants
            .values()
            .any(|p| p.unique_token == participant.unique_token);
        if tables.participants.contains_key(&participant.id) || token_taken {
            return Ok(None);
        }

        let participant = participant.into_participant();
        tables.participants.insert(participant.id, participant.clone());
        Ok(Some(participant))
    }

    async fn list_participants(&self) -> StoreResult<Vec<Participant>> {
        let tables = self.tables.read().await;
        Ok(tables.participants.values().cloned().collect())
    }

    async fn get_participant_by_token(&self, token: &str) -> StoreResult<Option<Participant>> {
        let tables = self.tables.read().await;
        Ok(tables.participants.values().find(|p| p.unique_token == token).cloned())
    }

    async fn list_selections(&self, selector_id: ParticipantId) -> StoreResult<Vec<RankedPick>> {
        let tables = self.tables.read().await;
        let mut picks = tables.selections.get(&selector_id).cloned().unwrap_or_default();
        picks.sort_by_key(|pick| pick.rank);
        Ok(picks)
    }

    async fn list_all_selections(&self) -> StoreResult<Vec<Selection>> {
        let tables = self.tables.read().await;
        let edges = tables
            .selections
            .iter()
            .flat_map(|(&selector_id, picks)| {
                picks.iter().map(move |pick| Selection {
                    selector_id,
                    selected_id: pick.selected_id,
                    rank: pick.rank,
                })
            })
            .collect();
        Ok(edges)
    }

    async fn replace_selections(&self, selector_id: ParticipantId, picks: &[RankedPick]) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if picks.is_empty() {
            tables.selections.remove(&selector_id);
        } else {
            tables.selections.insert(selector_id, picks.to_vec());
        }
        Ok(())
    }

    async fn replace_matches(&self, matches: &[MutualMatch]) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        tables.matches.clear();
        for m in matches {
            tables.next_match_id += 1;
            let id = tables.next_match_id;
            tables.matches.push((id, *m));
        }
        Ok(matches.len() as u64)
    }

    async fn list_matches(&self) -> StoreResult<Vec<MatchRecord>> {
        let tables = self.tables.read().await;
        let records = tables
            .matches
            .iter()
            .filter_map(|(id, m)| {
                let p1 = tables.participants.get(&m.participant1_id)?;
                let p2 = tables.participants.get(&m.participant2_id)?;
                Some(MatchRecord {
                    id: *id,
                    participant1_id: m.participant1_id,
                    name1: p1.first_name.clone(),
                    participant2_id: m.participant2_id,
                    name2: p2.first_name.clone(),
                    rank1: m.rank1,
                    rank2: m.rank2,
                })
            })
            .collect();
        Ok(records)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.matches.clear();
        tables.selections.clear();
        tables.participants.clear();
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}
