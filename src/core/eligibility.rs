use std::collections::{HashMap, HashSet};
use thiserror::Error;
use crate::models::{Participant, ParticipantId, RankedPick, SelectionEntry};

/// Reasons a selection submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejection {
    #[error("participant {0} cannot select themselves")]
    SelfSelection(ParticipantId),

    #[error("participant {0} does not exist")]
    UnknownParticipant(ParticipantId),

    #[error("participant {0} is not in the opposite-gender pool")]
    SameGender(ParticipantId),

    #[error("participant {0} was selected more than once")]
    Duplicate(ParticipantId),
}

/// Whether `selector` may pick `candidate`: never themselves, only the opposite gender
#[inline]
pub fn is_selectable(selector: &Participant, candidate: &Participant) -> bool {
    candidate.id != selector.id && candidate.gender == selector.gender.opposite()
}

/// The pool a participant chooses from, in the order given
pub fn available_candidates<'a>(
    selector: &'a Participant,
    pool: &'a [Participant],
) -> impl Iterator<Item = &'a Participant> + 'a {
    pool.iter().filter(move |candidate| is_selectable(selector, candidate))
}

/// Check a full selection submission against the participant pool
///
/// Returns the picks to store, in submission order, or the first reason
/// the submission is refused.
pub fn check_selections(
    selector: &Participant,
    entries: &[SelectionEntry],
    pool: &[Participant],
) -> Result<Vec<RankedPick>, SelectionRejection> {
    let by_id: HashMap<ParticipantId, &Participant> = pool.iter().map(|p| (p.id, p)).collect();
    let mut chosen = HashSet::with_capacity(entries.len());
    let mut picks = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.id == selector.id {
            return Err(SelectionRejection::SelfSelection(entry.id));
        }

        let candidate = by_id
            .get(&entry.id)
            .ok_or(SelectionRejection::UnknownParticipant(entry.id))?;

        if !is_selectable(selector, candidate) {
            return Err(SelectionRejection::SameGender(entry.id));
        }

        if !chosen.insert(entry.id) {
            return Err(SelectionRejection::Duplicate(entry.id));
        }

        picks.push(RankedPick {
            selected_id: entry.id,
            rank: entry.rank,
        });
    }

    Ok(picks)
}
