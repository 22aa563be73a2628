use axum::extract::{Path, State};
use axum::Json;

use storefront_core::catalog::User;
use storefront_core::error::StorefrontError;

use crate::app_state::AppState;
use crate::routes::ApiError;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    state.user_requests().inc();
    Json(state.users().all().to_vec())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users()
        .find(id)
        .cloned()
        .ok_or(StorefrontError::NotFound("User"))?;
    Ok(Json(user))
}
