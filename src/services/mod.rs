// Service exports
pub mod auth;
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod store;

pub use auth::{AdminAuth, LoginOutcome};
pub use matching::{ImportSummary, MatchingService};
pub use memory::InMemoryStore;
pub use postgres::PostgresClient;
pub use store::{ParticipantStore, StoreError, StoreResult};
