//! Mutual Match - mutual-pick matchmaking backend
//!
//! Participants rank people from the opposite-gender pool; a matching run
//! pairs everyone whose pick was reciprocated and records both ranks.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchResolver, SelectionGraph};
pub use error::AppError;
pub use models::{Participant, Selection, MutualMatch, MatchRecord};
pub use services::{InMemoryStore, MatchingService, ParticipantStore, PostgresClient};
