//! The seam between [`MatchStore`](crate::crud::MatchStore) and the storage engine.
//!
//! Statements use positional `?` placeholders and values are bound strictly
//! in the order given.

use async_trait::async_trait;
use sqlx::{Database, Sqlite, SqlitePool};

use crate::model::MatchModel;

/// A positional bind value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bind {
    Int(i64),
    Text(String),
}

impl From<i64> for Bind {
    fn from(v: i64) -> Self {
        Bind::Int(v)
    }
}

impl From<&str> for Bind {
    fn from(v: &str) -> Self {
        Bind::Text(v.to_string())
    }
}

/// What a row-modifying statement reports back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Executed {
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}

/// Runs parameterized statements against the `matches` table.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(&self, statement: &str, values: Vec<Bind>) -> Result<Executed, Self::Error>;

    async fn fetch_all(
        &self,
        statement: &str,
        values: Vec<Bind>,
    ) -> Result<Vec<MatchModel>, Self::Error>;
}

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, <Sqlite as Database>::Arguments<'q>>;
type SqliteQueryAs<'q, O> =
    sqlx::query::QueryAs<'q, Sqlite, O, <Sqlite as Database>::Arguments<'q>>;

#[async_trait]
impl QueryExecutor for SqlitePool {
    type Error = sqlx::Error;

    async fn execute(&self, statement: &str, values: Vec<Bind>) -> Result<Executed, sqlx::Error> {
        tracing::trace!(binds = values.len(), "execute: {}", statement.trim());

        let mut query: SqliteQuery<'_> = sqlx::query(statement);
        for value in values {
            query = match value {
                Bind::Int(v) => query.bind(v),
                Bind::Text(v) => query.bind(v),
            };
        }

        let done = query.execute(self).await?;

        Ok(Executed {
            rows_affected: done.rows_affected(),
            last_insert_id: Some(done.last_insert_rowid()),
        })
    }

    async fn fetch_all(
        &self,
        statement: &str,
        values: Vec<Bind>,
    ) -> Result<Vec<MatchModel>, sqlx::Error> {
        tracing::trace!(binds = values.len(), "fetch: {}", statement.trim());

        let mut query: SqliteQueryAs<'_, MatchModel> = sqlx::query_as(statement);
        for value in values {
            query = match value {
                Bind::Int(v) => query.bind(v),
                Bind::Text(v) => query.bind(v),
            };
        }

        query.fetch_all(self).await
    }
}
