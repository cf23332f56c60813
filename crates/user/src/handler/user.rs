use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::user::service::{command::DynUserCommandService, query::DynUserQueryService},
    domain::{
        requests::{RegisterUserRequest, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/user/register",
    tag = "User",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_user(
    Extension(service): Extension<DynUserCommandService>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/getUser/{userId}",
    tag = "User",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/getAll",
    tag = "User",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/user/update/{userId}",
    tag = "User",
    params(("userId" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserCommandService>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(user_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/user/delete/{userId}",
    tag = "User",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<String>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserCommandService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(user_id).await?;
    Ok(Json(response))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/user/register", post(register_user))
        .route("/user/getUser/{userId}", get(get_user))
        .route("/user/getAll", get(get_all_users))
        .route("/user/update/{userId}", put(update_user))
        .route("/user/delete/{userId}", delete(delete_user))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.di_container.user_command.clone()))
}
