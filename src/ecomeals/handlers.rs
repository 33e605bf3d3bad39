use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{error::ApiError, profiles, state::AppState};

use super::dto::{CreateEcoMealRequest, EcoMealResponse};
use super::emissions;
use super::repo::{self, NewEcoMeal};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/ecomeals", get(list_ecomeals))
        .route("/ecomeals/:id", get(get_ecomeal))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/ecomeals", post(create_ecomeal))
}

#[instrument(skip(state, payload))]
pub async fn create_ecomeal(
    State(state): State<AppState>,
    payload: Result<Json<CreateEcoMealRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<EcoMealResponse>), ApiError> {
    // Malformed or mistyped bodies get the same 400 shape as semantic failures.
    let Json(body) = payload.map_err(|e| ApiError::invalid("body", e.body_text()))?;
    body.validate()?;

    let co2_reduction_kg =
        emissions::co2_reduction_kg(body.quantity, state.config.co2e_per_meal_kg);
    let points = emissions::points_for_reduction(co2_reduction_kg);

    // Record insert and profile totals commit together or not at all.
    let mut tx = state.db.begin().await?;
    let meal = repo::insert(
        &mut tx,
        NewEcoMeal {
            id: Uuid::new_v4(),
            username: body.user.as_deref(),
            meal_type: body.meal_type.map(|m| m.as_str()),
            notes: body.notes.as_deref(),
            quantity: body.quantity,
            co2_reduction_kg,
            points,
        },
    )
    .await?;
    if let Some(user) = meal.username.as_deref() {
        profiles::repo::accumulate(&mut tx, user, co2_reduction_kg, points).await?;
    }
    tx.commit().await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        format!("/api/ecomeals/{}", meal.id).parse().unwrap(),
    );

    Ok((StatusCode::CREATED, headers, Json(meal.into())))
}

#[instrument(skip(state))]
pub async fn list_ecomeals(
    State(state): State<AppState>,
) -> Result<Json<Vec<EcoMealResponse>>, ApiError> {
    let meals = repo::list(&state.db).await?;
    Ok(Json(meals.into_iter().map(EcoMealResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_ecomeal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EcoMealResponse>, ApiError> {
    let meal = repo::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("ecomeal"))?;
    Ok(Json(meal.into()))
}
