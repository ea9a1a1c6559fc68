use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participant identifier, as assigned by the imported roster
pub type ParticipantId = i64;

/// Preference rank; lower is more preferred, 0 means "no rank assigned"
pub type Rank = i32;

/// Participant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// The gender a participant of this gender may select
    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(other.to_string()),
        }
    }
}

/// A registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub first_name: String,
    pub gender: Gender,
    pub email: String,
    pub unique_token: String,
}

/// A participant about to be inserted by the roster import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub id: ParticipantId,
    pub first_name: String,
    pub gender: Gender,
    pub email: String,
    pub unique_token: String,
}

impl NewParticipant {
    pub fn into_participant(self) -> Participant {
        Participant {
            id: self.id,
            first_name: self.first_name,
            gender: self.gender,
            email: self.email,
            unique_token: self.unique_token,
        }
    }
}

/// One entry of a participant's own selection list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPick {
    pub selected_id: ParticipantId,
    pub rank: Rank,
}

/// A directed selection edge: `selector_id` picked `selected_id` at `rank`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selector_id: ParticipantId,
    pub selected_id: ParticipantId,
    pub rank: Rank,
}

/// A reciprocal pick in canonical form (`participant1_id < participant2_id`)
///
/// `rank1` is the rank participant1 gave participant2, `rank2` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutualMatch {
    pub participant1_id: ParticipantId,
    pub participant2_id: ParticipantId,
    pub rank1: Rank,
    pub rank2: Rank,
}

/// A persisted match joined with both participants' first names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub participant1_id: ParticipantId,
    pub name1: String,
    pub participant2_id: ParticipantId,
    pub name2: String,
    pub rank1: Rank,
    pub rank2: Rank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!(" Female ".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("MALE".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("other".parse::<Gender>(), Err("other".to_string()));
    }

    #[test]
    fn test_gender_opposite() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }
}
