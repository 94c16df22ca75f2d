//! `PostgreSQL` implementation of the `SelectionRepository` trait.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;

fn infrastructure(e: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(e.to_string())
}

/// PostgreSQL-backed selection repository.
///
/// Every mutation is a single statement, so the database serializes
/// concurrent writers on the same user and fixture.
#[derive(Debug, Clone)]
pub struct PgSelectionRepository {
    pool: PgPool,
}

impl PgSelectionRepository {
    /// Creates a new `PgSelectionRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the bundled migrations that create the `user_selections`
    /// table.
    ///
    /// # Errors
    ///
    /// Returns the migration error if the schema cannot be applied.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl SelectionRepository for PgSelectionRepository {
    async fn get_selected_events(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
    ) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT event_name FROM user_selections \
             WHERE fixture_id = $1 AND user_id = $2 \
             ORDER BY position",
        )
        .bind(fixture_id.as_str())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))
    }

    async fn get_users_playing_fixture(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<BTreeSet<UserId>, DomainError> {
        let user_ids = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT user_id FROM user_selections WHERE fixture_id = $1",
        )
        .bind(fixture_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(user_ids.into_iter().map(UserId::new).collect())
    }

    async fn select_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "INSERT INTO user_selections (fixture_id, user_id, event_name) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (fixture_id, user_id, event_name) DO NOTHING",
        )
        .bind(fixture_id.as_str())
        .bind(user_id.as_str())
        .bind(event_name)
        .execute(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        if result.rows_affected() == 0 {
            debug!(%user_id, %fixture_id, event_name, "event already selected");
        }
        Ok(())
    }

    async fn deselect_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "DELETE FROM user_selections \
             WHERE fixture_id = $1 AND user_id = $2 AND event_name = $3",
        )
        .bind(fixture_id.as_str())
        .bind(user_id.as_str())
        .bind(event_name)
        .execute(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_selections")
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(())
    }
}
