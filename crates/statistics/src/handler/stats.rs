use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::stats::service::DynStatsService,
    domain::{
        requests::FindStats,
        responses::{ApiResponse, GraphResponse, StatsResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/statistics/stats",
    tag = "Statistics",
    params(FindStats),
    responses(
        (status = 200, description = "Totals and balance, snapshot persisted", body = ApiResponse<StatsResponse>),
        (status = 400, description = "Balance below zero"),
        (status = 500, description = "Remote total unavailable")
    )
)]
pub async fn get_stats(
    Extension(service): Extension<DynStatsService>,
    Query(params): Query<FindStats>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_stats(params.user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/statistics/chartdata",
    tag = "Statistics",
    params(FindStats),
    responses(
        (status = 200, description = "Last 30 days of expenses and incomes, empty series on remote failure", body = ApiResponse<GraphResponse>)
    )
)]
pub async fn get_chart_data(
    Extension(service): Extension<DynStatsService>,
    Query(params): Query<FindStats>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_chart_data(params.user_id).await?;
    Ok(Json(response))
}

pub fn statistics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/statistics/stats", get(get_stats))
        .route("/statistics/chartdata", get(get_chart_data))
        .layer(Extension(app_state.di_container.stats_service.clone()))
}
