//! Tournament record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A tournament: descriptive data only. Roster and matches live in the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub details: String,
}

impl Tournament {
    /// Create a tournament with a fresh id.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
            details: details.into(),
        }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2015, 12, 10).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(2015, 12, 27).unwrap_or(NaiveDate::MIN);
        Self::new("Tournament One", start, end, "A Swiss style tournament!!")
    }
}
