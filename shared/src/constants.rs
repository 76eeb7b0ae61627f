pub const PREMADE_LISTS_ENDPOINT: &str = "/api/premade-lists";
pub const CUSTOM_LISTS_ENDPOINT: &str = "/api/custom-lists";
pub const SPIN_ENDPOINT: &str = "/api/spin";
pub const THEMES_ENDPOINT: &str = "/api/themes";
pub const HEALTH_ENDPOINT: &str = "/api/health";

// Spin choreography, all in milliseconds
pub const SPIN_DWELL_MS: u32 = 4000;
pub const REVEAL_DELAY_MS: u32 = 500;
pub const SPIN_REQUEST_TIMEOUT_MS: u32 = 15000;

pub const MIN_SPIN_DEGREES: f64 = 1800.0; // five full turns
pub const SPIN_JITTER_DEGREES: f64 = 720.0;

pub const WHEEL_OUTER_RADIUS: f64 = 150.0;
pub const WHEEL_INNER_RADIUS: f64 = 30.0;
pub const WHEEL_PADDING: f64 = 10.0;

pub const LABEL_MAX_CHARS: usize = 15;
pub const LABEL_KEEP_CHARS: usize = 12;
pub const LABEL_ELLIPSIS: &str = "...";

pub const FALLBACK_PALETTE: [&str; 6] = [
    "#FF6B6B", "#FF8E53", "#FF6B9D", "#FF9F43", "#4ECDC4", "#45B7D1",
];
pub const DEFAULT_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub const NO_FOOD_ITEMS_ERROR: &str = "No food items provided";
pub const EMPTY_ITEMS_ERROR: &str = "Items list cannot be empty";
pub const CATEGORY_NOT_FOUND_ERROR: &str = "Category not found";
pub const INVALID_LIST_NAME_ERROR: &str = "List name cannot be blank";
pub const INVALID_FOOD_ITEM_ERROR: &str = "Food items cannot be blank";

pub const MAX_LIST_NAME_LENGTH: usize = 80;
