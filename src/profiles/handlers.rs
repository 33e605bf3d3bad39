use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

use super::dto::ProfileResponse;
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/profiles/:username", get(get_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = repo::get(&state.db, &username)
        .await?
        .ok_or(ApiError::NotFound("profile"))?;
    Ok(Json(profile.into()))
}
