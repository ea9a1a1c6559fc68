use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ParticipantId, Rank};

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub password: String,
}

/// One ranked pick in a selection submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct SelectionEntry {
    #[validate(range(min = 1))]
    pub id: ParticipantId,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub rank: Rank,
}

/// Request to replace a participant's selections
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitSelectionsRequest {
    #[serde(default)]
    #[validate(nested)]
    pub selections: Vec<SelectionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_defaults_to_zero() {
        let req: SubmitSelectionsRequest =
            serde_json::from_str(r#"{"selections":[{"id":4}]}"#).unwrap();
        assert_eq!(req.selections[0].rank, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_rank_rejected() {
        let req: SubmitSelectionsRequest =
            serde_json::from_str(r#"{"selections":[{"id":4,"rank":-1}]}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_selections_is_empty() {
        let req: SubmitSelectionsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.selections.is_empty());
    }
}
