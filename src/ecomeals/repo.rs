use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct EcoMeal {
    pub id: Uuid,
    pub username: Option<String>,
    pub meal_type: Option<String>,
    pub notes: Option<String>,
    pub quantity: i32,
    pub co2_reduction_kg: f64,
    pub points: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug)]
pub struct NewEcoMeal<'a> {
    pub id: Uuid,
    pub username: Option<&'a str>,
    pub meal_type: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub quantity: i32,
    pub co2_reduction_kg: f64,
    pub points: i64,
}

pub async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    new: NewEcoMeal<'_>,
) -> sqlx::Result<EcoMeal> {
    sqlx::query_as::<_, EcoMeal>(
        r#"
        INSERT INTO ecomeals (id, username, meal_type, notes, quantity, co2_reduction_kg, points)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, meal_type, notes, quantity, co2_reduction_kg, points, created_at
        "#,
    )
    .bind(new.id)
    .bind(new.username)
    .bind(new.meal_type)
    .bind(new.notes)
    .bind(new.quantity)
    .bind(new.co2_reduction_kg)
    .bind(new.points)
    .fetch_one(&mut **tx)
    .await
}

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<EcoMeal>> {
    sqlx::query_as::<_, EcoMeal>(
        r#"
        SELECT id, username, meal_type, notes, quantity, co2_reduction_kg, points, created_at
        FROM ecomeals
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn get(db: &PgPool, id: Uuid) -> sqlx::Result<Option<EcoMeal>> {
    sqlx::query_as::<_, EcoMeal>(
        r#"
        SELECT id, username, meal_type, notes, quantity, co2_reduction_kg, points, created_at
        FROM ecomeals
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
