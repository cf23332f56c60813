use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::expense::service::{
        command::DynExpenseCommandService, query::DynExpenseQueryService,
    },
    domain::{
        requests::{
            CreateExpenseRequest, FindAllExpenses, FindExpensesByDateRange, UpdateExpenseRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, ExpenseResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/expense/add",
    tag = "Expense",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense created", body = ApiResponse<ExpenseResponse>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_expense(
    Extension(service): Extension<DynExpenseCommandService>,
    Json(body): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/expense/update/{userId}/{id}",
    tag = "Expense",
    params(
        ("userId" = i64, Path, description = "User ID (advisory, the body's userId is authoritative)"),
        ("id" = i64, Path, description = "Expense ID")
    ),
    request_body = UpdateExpenseRequest,
    responses(
        (status = 200, description = "Expense updated", body = ApiResponse<ExpenseResponse>),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_expense(
    Extension(service): Extension<DynExpenseCommandService>,
    Path((_user_id, id)): Path<(i64, i64)>,
    Json(body): Json<UpdateExpenseRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    // The record lookup is keyed on the body's userId; the path segment is
    // decoded but not consulted.
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/expense/delete/{userId}/{id}",
    tag = "Expense",
    params(
        ("userId" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense deleted", body = ApiResponse<String>),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_expense(
    Extension(service): Extension<DynExpenseCommandService>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/expense/get/{userId}/{id}",
    tag = "Expense",
    params(
        ("userId" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense details", body = ApiResponse<ExpenseResponse>),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_expense(
    Extension(service): Extension<DynExpenseQueryService>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/expense/getAll/{userId}",
    tag = "Expense",
    params(
        ("userId" = i64, Path, description = "User ID"),
        FindAllExpenses
    ),
    responses(
        (status = 200, description = "Page of expenses, newest first", body = ApiResponsePagination<Vec<ExpenseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_expenses(
    Extension(service): Extension<DynExpenseQueryService>,
    Path(user_id): Path<i64>,
    Query(params): Query<FindAllExpenses>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(user_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/expense/get/total/{userId}",
    tag = "Expense",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Sum of the user's expense amounts", body = ApiResponse<f64>),
        (status = 404, description = "No expense records"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_total_expenses(
    Extension(service): Extension<DynExpenseQueryService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_total(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/expense/get/daterange",
    tag = "Expense",
    params(FindExpensesByDateRange),
    responses(
        (status = 200, description = "Expenses within the date range", body = ApiResponse<Vec<ExpenseResponse>>),
        (status = 404, description = "No expenses in range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_expenses_by_date_range(
    Extension(service): Extension<DynExpenseQueryService>,
    Query(params): Query<FindExpensesByDateRange>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_date_range(&params).await?;
    Ok(Json(response))
}

pub fn expense_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/expense/add", post(add_expense))
        .route("/expense/update/{userId}/{id}", put(update_expense))
        .route("/expense/delete/{userId}/{id}", delete(delete_expense))
        .route("/expense/get/total/{userId}", get(get_total_expenses))
        .route("/expense/get/daterange", get(get_expenses_by_date_range))
        .route("/expense/get/{userId}/{id}", get(get_expense))
        .route("/expense/getAll/{userId}", get(get_all_expenses))
        .layer(Extension(app_state.di_container.expense_query.clone()))
        .layer(Extension(app_state.di_container.expense_command.clone()))
}
