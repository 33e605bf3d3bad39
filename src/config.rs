use serde::Deserialize;

use crate::ecomeals::emissions::DEFAULT_CO2E_PER_MEAL_KG;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Kilograms of CO2e avoided per plant-based meal, applied at creation time.
    pub co2e_per_meal_kg: f64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let co2e_per_meal_kg = std::env::var("ECO_CO2E_PER_MEAL_KG")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_CO2E_PER_MEAL_KG);
        Ok(Self {
            database_url,
            co2e_per_meal_kg,
        })
    }
}
