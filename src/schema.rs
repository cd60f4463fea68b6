use anyhow::{anyhow, Error, Result};
use serde::{Deserialize, Serialize};

/// Who won a match, as stored in the `winner` column.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player1,
    Player2,
    Tie,
}

impl Outcome {
    pub fn code(self) -> i64 {
        match self {
            Outcome::Player1 => 1,
            Outcome::Player2 => 2,
            Outcome::Tie => 3,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Outcome::Player1),
            2 => Ok(Outcome::Player2),
            3 => Ok(Outcome::Tie),
            _ => Err(anyhow!("Invalid winner code: {}", code)),
        }
    }
}

/// The pair a player presents to look up or confirm a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchKey {
    pub discord_id: String,
    pub confirmation_code: String,
}

impl MatchKey {
    pub fn new(discord_id: impl Into<String>, confirmation_code: impl Into<String>) -> Self {
        Self {
            discord_id: discord_id.into(),
            confirmation_code: confirmation_code.into(),
        }
    }
}
