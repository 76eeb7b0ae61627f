//! Built-in food lists and wheel themes served by the API.

use once_cell::sync::Lazy;
use shared::{PremadeList, PremadeListsResponse, ThemeSpec};

const PREMADE_LISTS: &[(&str, &str, [&str; 8])] = &[
    ("italian", "Italian Cuisine", [
        "Pizza Margherita 🍕", "Spaghetti Carbonara 🍝", "Lasagna 🍝", "Risotto 🍚",
        "Tiramisu 🍰", "Gelato 🍨", "Bruschetta 🍞", "Osso Buco 🍖",
    ]),
    ("asian", "Asian Cuisine", [
        "Sushi 🍣", "Ramen 🍜", "Pad Thai 🍝", "Dumplings 🥟",
        "Fried Rice 🍚", "Pho 🍲", "Curry 🍛", "Teriyaki Chicken 🍗",
    ]),
    ("mexican", "Mexican Cuisine", [
        "Tacos 🌮", "Burrito 🌯", "Quesadilla 🫓", "Enchiladas 🌮",
        "Guacamole 🥑", "Nachos 🧀", "Churros 🥨", "Pozole 🍲",
    ]),
    ("american", "American Classics", [
        "Burger 🍔", "Hot Dog 🌭", "BBQ Ribs 🍖", "Mac & Cheese 🧀",
        "Fried Chicken 🍗", "Apple Pie 🥧", "Pancakes 🥞", "Buffalo Wings 🍗",
    ]),
    ("desserts", "Sweet Treats", [
        "Chocolate Cake 🍰", "Ice Cream 🍨", "Cookies 🍪", "Donuts 🍩",
        "Cheesecake 🍰", "Brownies 🍫", "Cupcakes 🧁", "Pie 🥧",
    ]),
    ("healthy", "Healthy Options", [
        "Greek Salad 🥗", "Quinoa Bowl 🥣", "Grilled Salmon 🐟", "Avocado Toast 🥑",
        "Smoothie Bowl 🍓", "Buddha Bowl 🥙", "Veggie Wrap 🌯", "Fresh Fruit 🍎",
    ]),
];

// (id, name, colors, background, wheel style)
const THEMES: &[(&str, &str, [&str; 4], &str, &str)] = &[
    ("sunset", "Sunset Dreams", ["#FF6B6B", "#FF8E53", "#FF6B9D", "#FF9F43"],
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)", "modern"),
    ("ocean", "Ocean Breeze", ["#4ECDC4", "#44A08D", "#1CB5E0", "#00B4DB"],
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)", "elegant"),
    ("forest", "Forest Fresh", ["#56C596", "#7FB069", "#A8E6CF", "#88D8B0"],
        "linear-gradient(135deg, #11998e 0%, #38ef7d 100%)", "natural"),
    ("candy", "Candy Pop", ["#FE8A71", "#F38BA8", "#E76F51", "#E9C46A"],
        "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)", "playful"),
    ("midnight", "Midnight Magic", ["#6C5CE7", "#A29BFE", "#74B9FF", "#00CEC9"],
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)", "mystical"),
];

pub static PREMADE: Lazy<PremadeListsResponse> = Lazy::new(|| PremadeListsResponse {
    lists: PREMADE_LISTS
        .iter()
        .map(|(key, name, items)| {
            let list = PremadeList {
                name: name.to_string(),
                items: items.iter().map(|item| item.to_string()).collect(),
            };
            (key.to_string(), list)
        })
        .collect(),
});

pub static WHEEL_THEMES: Lazy<Vec<ThemeSpec>> = Lazy::new(|| {
    THEMES
        .iter()
        .map(|(id, name, colors, background, style)| ThemeSpec {
            id: Some(id.to_string()),
            name: name.to_string(),
            background: Some(background.to_string()),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            wheel_style: Some(style.to_string()),
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italian_is_the_default_category() {
        let (key, list) = PREMADE.first_category().unwrap();
        assert_eq!(key, "italian");
        assert_eq!(list.items.len(), 8);
        assert_eq!(PREMADE.lists.len(), 6);
    }

    #[test]
    fn test_every_theme_has_colors_and_background() {
        assert_eq!(WHEEL_THEMES.len(), 5);
        for theme in WHEEL_THEMES.iter() {
            assert!(!theme.colors.is_empty());
            assert!(theme.background().starts_with("linear-gradient"));
        }
    }
}
