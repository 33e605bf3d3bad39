use serde::Serialize;
use time::OffsetDateTime;

use crate::profiles::repo::Profile;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub total_co2e_reduced_kg: f64,
    pub total_points: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            username: p.username,
            total_co2e_reduced_kg: p.total_co2e_reduced_kg,
            total_points: p.total_points,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn totals_serialize_for_the_client() {
        let response = ProfileResponse::from(Profile {
            username: "ada".into(),
            total_co2e_reduced_kg: 27.5,
            total_points: 13_750,
            updated_at: datetime!(2026-02-01 08:30 UTC),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["username"], "ada");
        assert_eq!(json["total_co2e_reduced_kg"], 27.5);
        assert_eq!(json["total_points"], 13_750);
        assert_eq!(json["updated_at"], "2026-02-01T08:30:00Z");
    }
}
