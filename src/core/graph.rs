use std::collections::{BTreeMap, HashMap};
use crate::models::{ParticipantId, Rank, Selection};

/// In-memory snapshot of every directed selection, keyed by selector
///
/// Built once from a batch fetch so the resolver can answer reverse
/// lookups without going back to the store.
#[derive(Debug, Clone, Default)]
pub struct SelectionGraph {
    edges: HashMap<ParticipantId, BTreeMap<ParticipantId, Rank>>,
}

impl SelectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `selector` picked `selected` at `rank`.
    /// A later edge for the same pair replaces the earlier one.
    pub fn insert(&mut self, selector: ParticipantId, selected: ParticipantId, rank: Rank) {
        self.edges.entry(selector).or_default().insert(selected, rank);
    }

    /// Rank `selector` assigned to `selected`, if that edge exists
    #[inline]
    pub fn rank(&self, selector: ParticipantId, selected: ParticipantId) -> Option<Rank> {
        self.edges.get(&selector).and_then(|picks| picks.get(&selected)).copied()
    }

    /// Outgoing selections of a participant, ordered by selected id
    pub fn picks_of(&self, selector: ParticipantId) -> impl Iterator<Item = (ParticipantId, Rank)> + '_ {
        self.edges
            .get(&selector)
            .into_iter()
            .flat_map(|picks| picks.iter().map(|(&id, &rank)| (id, rank)))
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

impl FromIterator<Selection> for SelectionGraph {
    fn from_iter<I: IntoIterator<Item = Selection>>(iter: I) -> Self {
        let mut graph = SelectionGraph::new();
        for selection in iter {
            graph.insert(selection.selector_id, selection.selected_id, selection.rank);
        }
        graph
    }
}
