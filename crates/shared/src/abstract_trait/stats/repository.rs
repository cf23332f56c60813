use crate::{
    domain::requests::UpsertStatsRequest, errors::RepositoryError, model::stats::StatsModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStatsRepository = Arc<dyn StatsRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StatsRepositoryTrait {
    /// Creates or replaces the single snapshot row for the request's user.
    async fn upsert(&self, req: &UpsertStatsRequest) -> Result<StatsModel, RepositoryError>;
}
