use crate::{
    executor::{Bind, QueryExecutor},
    model::{MatchModel, NewMatch},
    schema::MatchKey,
};

const INSERT_MATCH: &str = r#"
    INSERT INTO matches
        (timestamp, format, player1, player2, winner, confirmationcode, confirmed)
    VALUES
        (?, ?, ?, ?, ?, ?, 0)
"#;

const CONFIRM_MATCH: &str = r#"
    UPDATE matches
    SET confirmed = 1
    WHERE player2 = ?
        AND confirmationcode = ?
        AND confirmed = 0
"#;

const SELECT_UNCONFIRMED_MATCH: &str = r#"
    SELECT id, timestamp, format, player1, player2, winner, confirmationcode, confirmed
    FROM matches
    WHERE (player1 = ? OR player2 = ?)
        AND confirmationcode = ?
        AND confirmed = 0
    ORDER BY id
"#;

const DELETE_MATCH: &str = r#"DELETE FROM matches WHERE id = ?"#;

/// Data access for the `matches` table.
///
/// Each operation is a single statement handed to the executor. Errors come
/// back exactly as the executor produced them.
#[derive(Clone, Debug)]
pub struct MatchStore<E> {
    db: E,
}

impl<E: QueryExecutor> MatchStore<E> {
    pub fn new(db: E) -> Self {
        Self { db }
    }

    pub fn executor(&self) -> &E {
        &self.db
    }

    /// Inserts an unconfirmed match and returns its id when the executor
    /// reports one. Inputs are stored as given.
    pub async fn create_match(&self, m: &NewMatch) -> Result<Option<i64>, E::Error> {
        let values = vec![
            Bind::from(m.timestamp.as_str()),
            Bind::from(m.format.as_str()),
            Bind::from(m.player1.as_str()),
            Bind::from(m.player2.as_str()),
            Bind::from(m.winner),
            Bind::from(m.confirmation_code.as_str()),
        ];

        let done = self.db.execute(INSERT_MATCH, values).await?;
        tracing::debug!(
            id = ?done.last_insert_id,
            player1 = %m.player1,
            player2 = %m.player2,
            "created match"
        );

        Ok(done.last_insert_id)
    }

    /// Marks the unconfirmed match owed to `player2` as confirmed.
    ///
    /// Returns the number of rows changed. Zero is not an error: a repeated
    /// call after a successful one matches nothing because of the
    /// `confirmed = 0` guard.
    pub async fn confirm_match(&self, key: &MatchKey) -> Result<u64, E::Error> {
        let values = vec![
            Bind::from(key.discord_id.as_str()),
            Bind::from(key.confirmation_code.as_str()),
        ];

        let done = self.db.execute(CONFIRM_MATCH, values).await?;
        tracing::debug!(
            discord_id = %key.discord_id,
            rows = done.rows_affected,
            "confirm match"
        );

        Ok(done.rows_affected)
    }

    /// Finds the unconfirmed match where `discord_id` is either player and the
    /// code matches. Only the first row is returned if several qualify.
    pub async fn get_unconfirmed_match(
        &self,
        key: &MatchKey,
    ) -> Result<Option<MatchModel>, E::Error> {
        let values = vec![
            Bind::from(key.discord_id.as_str()),
            Bind::from(key.discord_id.as_str()),
            Bind::from(key.confirmation_code.as_str()),
        ];

        let rows = self.db.fetch_all(SELECT_UNCONFIRMED_MATCH, values).await?;
        if rows.len() > 1 {
            let ids: Vec<i64> = rows.iter().map(|m| m.id).collect();
            tracing::warn!(
                count = rows.len(),
                ids = ?ids,
                "several unconfirmed matches share a confirmation code"
            );
        }

        Ok(rows.into_iter().next())
    }

    /// Deletes a match by id regardless of its state. Returns the number of
    /// rows removed, which is zero for an unknown id.
    pub async fn delete_match(&self, id: i64) -> Result<u64, E::Error> {
        let done = self.db.execute(DELETE_MATCH, vec![Bind::from(id)]).await?;
        tracing::debug!(id, rows = done.rows_affected, "deleted match");

        Ok(done.rows_affected)
    }
}
