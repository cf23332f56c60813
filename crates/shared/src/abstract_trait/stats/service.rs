use crate::{
    domain::responses::{ApiResponse, GraphResponse, StatsResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStatsService = Arc<dyn StatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait StatsServiceTrait {
    async fn get_stats(&self, user_id: i64) -> Result<ApiResponse<StatsResponse>, ServiceError>;

    async fn get_chart_data(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<GraphResponse>, ServiceError>;
}
