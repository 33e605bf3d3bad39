use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ecomeals::repo::EcoMeal;
use crate::error::{ApiError, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEcoMealRequest {
    pub quantity: i32,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateEcoMealRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.quantity < 0 {
            errors.push(FieldError {
                field: "quantity",
                message: "must be a non-negative number of meals".into(),
            });
        }
        if let Some(user) = &self.user {
            if user.trim().is_empty() {
                errors.push(FieldError {
                    field: "user",
                    message: "must not be blank".into(),
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EcoMealResponse {
    pub id: Uuid,
    pub user: Option<String>,
    pub meal_type: Option<String>,
    pub notes: Option<String>,
    pub quantity: i32,
    pub co2_reduction_kg: f64,
    pub points: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<EcoMeal> for EcoMealResponse {
    fn from(m: EcoMeal) -> Self {
        Self {
            id: m.id,
            user: m.username,
            meal_type: m.meal_type,
            notes: m.notes,
            quantity: m.quantity,
            co2_reduction_kg: m.co2_reduction_kg,
            points: m.points,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn bare_quantity_payload_is_valid() {
        let req: CreateEcoMealRequest = serde_json::from_str(r#"{"quantity": 10}"#).unwrap();
        assert_eq!(req.quantity, 10);
        assert!(req.user.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn full_payload_deserializes() {
        let req: CreateEcoMealRequest = serde_json::from_str(
            r#"{"quantity": 2, "user": "ada", "meal_type": "lunch", "notes": "leftovers"}"#,
        )
        .unwrap();
        assert_eq!(req.meal_type, Some(MealType::Lunch));
        assert_eq!(req.user.as_deref(), Some("ada"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_quantity_is_rejected_with_field_detail() {
        let req: CreateEcoMealRequest = serde_json::from_str(r#"{"quantity": -1}"#).unwrap();
        match req.validate() {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "quantity");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn zero_quantity_is_valid() {
        let req: CreateEcoMealRequest = serde_json::from_str(r#"{"quantity": 0}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_user_is_rejected() {
        let req: CreateEcoMealRequest =
            serde_json::from_str(r#"{"quantity": 1, "user": "  "}"#).unwrap();
        match req.validate() {
            Err(ApiError::Validation(errors)) => assert_eq!(errors[0].field, "user"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_quantity_fails_deserialization() {
        assert!(serde_json::from_str::<CreateEcoMealRequest>(r#"{"quantity": "ten"}"#).is_err());
        assert!(serde_json::from_str::<CreateEcoMealRequest>(r#"{}"#).is_err());
    }

    #[test]
    fn unknown_meal_type_fails_deserialization() {
        assert!(serde_json::from_str::<CreateEcoMealRequest>(
            r#"{"quantity": 1, "meal_type": "brunch"}"#
        )
        .is_err());
    }

    #[test]
    fn response_serializes_derived_fields() {
        let response = EcoMealResponse::from(EcoMeal {
            id: Uuid::new_v4(),
            username: Some("ada".into()),
            meal_type: Some("dinner".into()),
            notes: None,
            quantity: 10,
            co2_reduction_kg: 25.0,
            points: 12_500,
            created_at: datetime!(2026-01-15 12:00 UTC),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["quantity"], 10);
        assert_eq!(json["co2_reduction_kg"], 25.0);
        assert_eq!(json["points"], 12_500);
        assert_eq!(json["created_at"], "2026-01-15T12:00:00Z");
    }
}
