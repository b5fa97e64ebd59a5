use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{IdPath, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Body of a successful delete response
pub const DELETED_MESSAGE: &str = "User deleted successfully";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(User, CreateUser, UpdateUser)),
    tags(
        (name = "users", description = "In-memory user management")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// Routes are relative; the app nests this router at `/users`.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Json<Vec<User>> {
    Json(service.get_all_users().await)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> impl IntoResponse {
    let user = service.create_user(input.name, input.email).await;
    (StatusCode::CREATED, Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let id = id.ok_or(UserError::NotFound(None))?;
    let user = service
        .get_user_by_id(id)
        .await
        .ok_or(UserError::NotFound(Some(id)))?;
    Ok(Json(user))
}

/// Update a user; only fields present in the body change
#[utoipa::path(
    method(put, patch),
    path = "/{id}",
    tag = "users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<Json<User>> {
    let id = id.ok_or(UserError::NotFound(None))?;
    let user = service
        .update_user(id, input)
        .await
        .ok_or(UserError::NotFound(Some(id)))?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    let id = id.ok_or(UserError::NotFound(None))?;

    if !service.delete_user(id).await {
        return Err(UserError::NotFound(Some(id)));
    }

    Ok((StatusCode::OK, DELETED_MESSAGE))
}
