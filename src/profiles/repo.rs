use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub username: String,
    pub total_co2e_reduced_kg: f64,
    pub total_points: i64,
    pub updated_at: OffsetDateTime,
}

/// Add one submission's derived values to the user's running totals,
/// creating the profile on first submission.
pub async fn accumulate(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    co2_reduction_kg: f64,
    points: i64,
) -> sqlx::Result<Profile> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (username, total_co2e_reduced_kg, total_points)
        VALUES ($1, $2, $3)
        ON CONFLICT (username) DO UPDATE
        SET total_co2e_reduced_kg = profiles.total_co2e_reduced_kg + EXCLUDED.total_co2e_reduced_kg,
            total_points = profiles.total_points + EXCLUDED.total_points,
            updated_at = now()
        RETURNING username, total_co2e_reduced_kg, total_points, updated_at
        "#,
    )
    .bind(username)
    .bind(co2_reduction_kg)
    .bind(points)
    .fetch_one(&mut **tx)
    .await
}

pub async fn get(db: &PgPool, username: &str) -> sqlx::Result<Option<Profile>> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT username, total_co2e_reduced_kg, total_points, updated_at
        FROM profiles
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await
}
