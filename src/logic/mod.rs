//! Tournament business logic: standings, pairing, and match recording.

mod history;
mod pairing;
mod report;
mod standings;

pub use history::{can_play, can_receive_bye, pair_key, MatchHistory};
pub use pairing::{compute_pairings, pair_standings};
pub use report::report_match;
pub use standings::compute_standings;
