// Core algorithm exports
pub mod eligibility;
pub mod graph;
pub mod resolver;
pub mod roster;

pub use eligibility::{available_candidates, check_selections, is_selectable, SelectionRejection};
pub use graph::SelectionGraph;
pub use resolver::{MatchResolver, ResolveResult};
pub use roster::{check_file_name, issue_token, parse_roster, RosterError};
