use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use service::users::UserRecord;

use crate::errors::ApiError;
use crate::state::AppState;

/// Fixed body returned after a successful create.
pub const CREATED_MESSAGE: &str = "Tudo certo";

/// POST /usuarios: store the body as-is.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRecord>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    // 解析失败时不触碰存储
    let Json(record) = payload?;
    state.users.append(record).await?;
    let total = state.users.len().await;
    info!(event = "user_appended", total, "user stored");
    Ok(CREATED_MESSAGE)
}

/// GET /usuarios: every stored record, oldest first.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserRecord>> {
    let users = state.users.snapshot().await;
    info!(event = "users_listed", count = users.len(), "users listed");
    Json(users)
}
