use crate::{
    abstract_trait::stats::repository::StatsRepositoryTrait, config::ConnectionPool,
    domain::requests::UpsertStatsRequest, errors::RepositoryError, model::stats::StatsModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct StatsRepository {
    db: ConnectionPool,
}

impl StatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsRepositoryTrait for StatsRepository {
    async fn upsert(&self, req: &UpsertStatsRequest) -> Result<StatsModel, RepositoryError> {
        // The unique index on user_id keeps this a one-row-per-user table.
        let stats = sqlx::query_as::<_, StatsModel>(
            r#"
            INSERT INTO stats (user_id, total_income, total_expense, balance)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET total_income = EXCLUDED.total_income,
                total_expense = EXCLUDED.total_expense,
                balance = EXCLUDED.balance
            RETURNING stats_id, user_id, total_income, total_expense, balance
            "#,
        )
        .bind(req.user_id)
        .bind(req.total_income)
        .bind(req.total_expense)
        .bind(req.balance)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to upsert stats for user {}: {e:?}", req.user_id);
            RepositoryError::Sqlx(e)
        })?;

        info!("✅ Stats snapshot saved for user {}", req.user_id);

        Ok(stats)
    }
}
