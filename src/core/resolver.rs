use std::collections::HashSet;
use crate::core::graph::SelectionGraph;
use crate::models::{MutualMatch, ParticipantId};

/// Result of a resolution pass
#[derive(Debug)]
pub struct ResolveResult {
    pub matches: Vec<MutualMatch>,
    pub participants_scanned: usize,
}

/// Mutual-match resolver
///
/// Walks every participant's outgoing selections and keeps the pairs where
/// the selected participant picked them back. Each unordered pair is
/// reported once, in canonical `(low, high)` id order, with `rank1` being
/// the rank `low` gave `high` and `rank2` the reverse.
///
/// Ranks are copied through untouched; self-selections never form a pair.
#[derive(Debug, Clone, Default)]
pub struct MatchResolver;

impl MatchResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve mutual matches for the given participants
    ///
    /// # Arguments
    /// * `participants` - Ids of every participant to scan, in any order
    /// * `graph` - Snapshot of all selections
    pub fn resolve(&self, participants: &[ParticipantId], graph: &SelectionGraph) -> ResolveResult {
        let mut seen: HashSet<(ParticipantId, ParticipantId)> = HashSet::new();
        let mut matches = Vec::new();

        for &a in participants {
            for (b, rank_ab) in graph.picks_of(a) {
                if a == b {
                    continue;
                }
                let Some(rank_ba) = graph.rank(b, a) else {
                    continue;
                };

                let pair = (a.min(b), a.max(b));
                if !seen.insert(pair) {
                    continue;
                }

                let (rank1, rank2) = if a < b { (rank_ab, rank_ba) } else { (rank_ba, rank_ab) };
                matches.push(MutualMatch {
                    participant1_id: pair.0,
                    participant2_id: pair.1,
                    rank1,
                    rank2,
                });
            }
        }

        tracing::debug!(
            "Resolved {} mutual matches from {} participants ({} selections)",
            matches.len(),
            participants.len(),
            graph.edge_count()
        );

        ResolveResult {
            matches,
            participants_scanned: participants.len(),
        }
    }
}
