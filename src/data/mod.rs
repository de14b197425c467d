pub mod loader;
pub mod models;
pub mod reshape;

pub use loader::load_table;
pub use models::{MatchRow, RawTable, TeamGoal};
pub use reshape::{pair_by_match_id, pair_positional, total_goals};
