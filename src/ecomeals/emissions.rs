//! CO2e math for plant-based meal submissions.
//!
//! A submission of `quantity` plant-based meals avoids an estimated
//! `quantity * co2e_per_meal_kg` kilograms of CO2-equivalent compared to the
//! meat-based alternative, and earns points for every full 100 g avoided.

/// Estimated kilograms of CO2e avoided per plant-based meal.
pub const DEFAULT_CO2E_PER_MEAL_KG: f64 = 2.5;

/// Points awarded for every 100 g of CO2e avoided.
pub const POINTS_PER_100G_CO2E: i64 = 50;

/// Kilograms of CO2e avoided by `quantity` plant-based meals.
///
/// Callers validate `quantity >= 0` at the request boundary.
pub fn co2_reduction_kg(quantity: i32, co2e_per_meal_kg: f64) -> f64 {
    f64::from(quantity) * co2e_per_meal_kg
}

/// Points earned for a given reduction, floored to whole 100 g blocks.
pub fn points_for_reduction(co2_reduction_kg: f64) -> i64 {
    let grams = co2_reduction_kg * 1000.0;
    (grams / 100.0 * POINTS_PER_100G_CO2E as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_meals_at_default_factor() {
        assert_eq!(co2_reduction_kg(10, DEFAULT_CO2E_PER_MEAL_KG), 25.0);
    }

    #[test]
    fn zero_meals_avoid_nothing() {
        assert_eq!(co2_reduction_kg(0, DEFAULT_CO2E_PER_MEAL_KG), 0.0);
        assert_eq!(points_for_reduction(0.0), 0);
    }

    #[test]
    fn reduction_scales_linearly_with_factor() {
        assert_eq!(co2_reduction_kg(4, 1.5), 6.0);
        assert_eq!(co2_reduction_kg(1, 0.0), 0.0);
    }

    #[test]
    fn points_award_fifty_per_100g() {
        // 25 kg = 25_000 g = 250 blocks of 100 g
        assert_eq!(points_for_reduction(25.0), 12_500);
        assert_eq!(points_for_reduction(0.1), 50);
    }

    #[test]
    fn partial_blocks_floor_toward_zero() {
        // 3 g is 0.03 of a block, worth 1.5 points before flooring
        assert_eq!(points_for_reduction(0.003), 1);
        // below a single point
        assert_eq!(points_for_reduction(0.0001), 0);
    }
}
