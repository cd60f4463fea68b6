use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::schema::Outcome;

// For sqlx
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct MatchModel {
    pub id: i64,
    /// Unix epoch seconds, stored as text.
    pub timestamp: String,
    pub format: String,
    pub player1: String,
    pub player2: String,
    /// 1 = player1 won, 2 = player2 won, 3 = tie. Not validated on write.
    pub winner: i64,
    pub confirmationcode: String,
    pub confirmed: bool,
}

impl MatchModel {
    /// Typed view of `winner`, `None` when the stored code is outside 1..=3.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::try_from(self.winner).ok()
    }
}

/// Values for a match row that has not been inserted yet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewMatch {
    pub timestamp: String,
    pub format: String,
    pub player1: String,
    pub player2: String,
    pub winner: i64,
    pub confirmation_code: String,
}

impl NewMatch {
    /// Builds a match stamped with the current Unix time.
    pub fn now(
        format: impl Into<String>,
        player1: impl Into<String>,
        player2: impl Into<String>,
        winner: Outcome,
        confirmation_code: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now().timestamp().to_string(),
            format: format.into(),
            player1: player1.into(),
            player2: player2.into(),
            winner: winner.code(),
            confirmation_code: confirmation_code.into(),
        }
    }
}
