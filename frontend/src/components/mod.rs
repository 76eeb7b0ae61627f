pub mod food_selector;
pub mod gradient_background;

pub use food_selector::FoodSelector;
pub use gradient_background::GradientBackground;
