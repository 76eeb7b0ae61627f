use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use validator::Validate;

use crate::constants::DEFAULT_BACKGROUND;
use crate::validation::{validate_food_items, validate_list_name};

/// A single wheel entry. Any non-empty label, duplicates allowed.
pub type FoodItem = String;

/// Named palette plus page gradient, replaced wholesale after every spin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub colors: Vec<String>,
    #[serde(default, rename = "wheelStyle", skip_serializing_if = "Option::is_none")]
    pub wheel_style: Option<String>,
}

impl ThemeSpec {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            background: None,
            colors,
            wheel_style: None,
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// The page gradient, or the default one when the theme carries none.
    pub fn background(&self) -> &str {
        match self.background.as_deref() {
            Some(bg) if !bg.trim().is_empty() => bg,
            _ => DEFAULT_BACKGROUND,
        }
    }
}

// === API Types ===

/// Response of `POST /api/spin`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub selected_food: FoodItem,
    pub theme: ThemeSpec,
    pub timestamp: DateTime<Utc>,
    pub total_options: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PremadeList {
    pub name: String,
    pub items: Vec<FoodItem>,
}

/// Response of `GET /api/premade-lists`. Category order is part of the contract:
/// the first category seeds the wheel on startup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PremadeListsResponse {
    pub lists: IndexMap<String, PremadeList>,
}

impl PremadeListsResponse {
    pub fn first_category(&self) -> Option<(&String, &PremadeList)> {
        self.lists.first()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateCustomListRequest {
    #[validate(custom = "validate_list_name")]
    pub name: String,
    #[validate(custom = "validate_food_items")]
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomFoodList {
    pub id: String,
    pub name: String,
    pub items: Vec<FoodItem>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CustomListsResponse {
    pub lists: Vec<CustomFoodList>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemesResponse {
    pub themes: Vec<ThemeSpec>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
