use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::income::service::{
        command::DynIncomeCommandService, query::DynIncomeQueryService,
    },
    domain::{
        requests::{
            CreateIncomeRequest, FindAllIncomes, FindIncomesByDateRange, UpdateIncomeRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, IncomeResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/income/add",
    tag = "Income",
    request_body = CreateIncomeRequest,
    responses(
        (status = 201, description = "Income created", body = ApiResponse<IncomeResponse>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_income(
    Extension(service): Extension<DynIncomeCommandService>,
    Json(body): Json<CreateIncomeRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/income/update/{userId}/{id}",
    tag = "Income",
    params(
        ("userId" = i64, Path, description = "User ID (advisory, the body's userId is authoritative)"),
        ("id" = i64, Path, description = "Income ID")
    ),
    request_body = UpdateIncomeRequest,
    responses(
        (status = 200, description = "Income updated", body = ApiResponse<IncomeResponse>),
        (status = 404, description = "Income not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_income(
    Extension(service): Extension<DynIncomeCommandService>,
    Path((_user_id, id)): Path<(i64, i64)>,
    Json(body): Json<UpdateIncomeRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    // The record lookup is keyed on the body's userId; the path segment is
    // decoded but not consulted.
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/income/delete/{userId}/{id}",
    tag = "Income",
    params(
        ("userId" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Income ID")
    ),
    responses(
        (status = 200, description = "Income deleted", body = ApiResponse<String>),
        (status = 404, description = "Income not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_income(
    Extension(service): Extension<DynIncomeCommandService>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/income/get/{userId}/{id}",
    tag = "Income",
    params(
        ("userId" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Income ID")
    ),
    responses(
        (status = 200, description = "Income details", body = ApiResponse<IncomeResponse>),
        (status = 404, description = "Income not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_income(
    Extension(service): Extension<DynIncomeQueryService>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/income/getAll/{userId}",
    tag = "Income",
    params(
        ("userId" = i64, Path, description = "User ID"),
        FindAllIncomes
    ),
    responses(
        (status = 200, description = "Page of incomes, newest first", body = ApiResponsePagination<Vec<IncomeResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_incomes(
    Extension(service): Extension<DynIncomeQueryService>,
    Path(user_id): Path<i64>,
    Query(params): Query<FindAllIncomes>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(user_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/income/get/total/{userId}",
    tag = "Income",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Sum of the user's income amounts", body = ApiResponse<f64>),
        (status = 404, description = "No income records"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_total_income(
    Extension(service): Extension<DynIncomeQueryService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_total(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/income/get/daterange",
    tag = "Income",
    params(FindIncomesByDateRange),
    responses(
        (status = 200, description = "Incomes within the date range", body = ApiResponse<Vec<IncomeResponse>>),
        (status = 404, description = "No incomes in range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_incomes_by_date_range(
    Extension(service): Extension<DynIncomeQueryService>,
    Query(params): Query<FindIncomesByDateRange>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_date_range(&params).await?;
    Ok(Json(response))
}

pub fn income_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/income/add", post(add_income))
        .route("/income/update/{userId}/{id}", put(update_income))
        .route("/income/delete/{userId}/{id}", delete(delete_income))
        .route("/income/get/total/{userId}", get(get_total_income))
        .route("/income/get/daterange", get(get_incomes_by_date_range))
        .route("/income/get/{userId}/{id}", get(get_income))
        .route("/income/getAll/{userId}", get(get_all_incomes))
        .layer(Extension(app_state.di_container.income_query.clone()))
        .layer(Extension(app_state.di_container.income_command.clone()))
}
