use axum::{
    routing::post,
    Router,
    Json,
    debug_handler,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use shared::{FoodItem, SpinResult, ThemeSpec};
use shared::validation::validate_food_items;
use tracing::info;

use crate::AppState;
use crate::catalog::WHEEL_THEMES;
use crate::error::ApiError;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/spin", post(spin_wheel))
}

/// Picks the winner and the theme for one spin. Both draws are uniform.
pub fn draw_spin<R: Rng + ?Sized>(
    food_items: Vec<FoodItem>,
    themes: &[ThemeSpec],
    timestamp: DateTime<Utc>,
    rng: &mut R,
) -> Result<SpinResult, ApiError> {
    let selected_food = food_items.choose(rng).cloned().ok_or(ApiError::NoFoodItems)?;
    let theme = themes.choose(rng).cloned().ok_or(ApiError::NoThemes)?;

    Ok(SpinResult {
        selected_food,
        theme,
        timestamp,
        total_options: food_items.len(),
    })
}

#[debug_handler]
async fn spin_wheel(Json(food_items): Json<Vec<FoodItem>>) -> Result<Json<SpinResult>, ApiError> {
    if food_items.is_empty() {
        return Err(ApiError::NoFoodItems);
    }
    validate_food_items(&food_items).map_err(|e| {
        ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
    })?;

    let result = draw_spin(food_items, &WHEEL_THEMES, Utc::now(), &mut rand::thread_rng())?;
    info!(
        "🎡 Spin picked {:?} out of {} options ({})",
        result.selected_food, result.total_options, result.theme.name
    );
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn items(labels: &[&str]) -> Vec<FoodItem> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_winner_is_drawn_from_submitted_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let foods = items(&["Pizza", "Sushi", "Tacos", "Pasta"]);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let result = draw_spin(foods.clone(), &WHEEL_THEMES, Utc::now(), &mut rng).unwrap();
            assert!(foods.contains(&result.selected_food));
            assert_eq!(result.total_options, 4);
            assert!(WHEEL_THEMES.contains(&result.theme));
            seen.insert(result.selected_food);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_empty_inputs_are_errors() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            draw_spin(Vec::new(), &WHEEL_THEMES, Utc::now(), &mut rng),
            Err(ApiError::NoFoodItems)
        ));
        assert!(matches!(
            draw_spin(items(&["Pho"]), &[], Utc::now(), &mut rng),
            Err(ApiError::NoThemes)
        ));
    }
}
