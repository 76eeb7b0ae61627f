use validator::ValidationError;

use crate::constants::{
    EMPTY_ITEMS_ERROR, INVALID_FOOD_ITEM_ERROR, INVALID_LIST_NAME_ERROR, MAX_LIST_NAME_LENGTH,
};

pub fn validate_food_item(item: &str) -> Result<(), ValidationError> {
    if item.trim().is_empty() {
        let mut err = ValidationError::new("blank_food_item");
        err.message = Some(INVALID_FOOD_ITEM_ERROR.into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_food_items(items: &[String]) -> Result<(), ValidationError> {
    if items.is_empty() {
        let mut err = ValidationError::new("empty_food_list");
        err.message = Some(EMPTY_ITEMS_ERROR.into());
        return Err(err);
    }
    items.iter().try_for_each(|item| validate_food_item(item))
}

pub fn validate_list_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_LIST_NAME_LENGTH {
        let mut err = ValidationError::new("invalid_list_name");
        err.message = Some(INVALID_LIST_NAME_ERROR.into());
        return Err(err);
    }
    Ok(())
}

/// Drops blank rows from a hand-edited list. Surviving labels are kept verbatim.
pub fn spinnable_items(rows: &[String]) -> Vec<String> {
    rows.iter()
        .filter(|row| validate_food_item(row).is_ok())
        .cloned()
        .collect()
}
