use crate::constants::{DEFAULT_BACKGROUND, FALLBACK_PALETTE};
use crate::shared_wheel_game::ThemeSpec;

/// Fill color for segment `index`. Wraps around the palette, and falls back to
/// the built-in palette when no theme is active or the theme has no colors.
pub fn segment_color(index: usize, theme: Option<&ThemeSpec>) -> &str {
    match theme {
        Some(theme) if !theme.colors.is_empty() => {
            &theme.colors[index % theme.colors.len()]
        }
        _ => FALLBACK_PALETTE[index % FALLBACK_PALETTE.len()],
    }
}

/// First palette entry, used for the glow behind the wheel
pub fn accent_color(theme: Option<&ThemeSpec>) -> &str {
    segment_color(0, theme)
}

pub fn page_background(theme: Option<&ThemeSpec>) -> &str {
    theme.map_or(DEFAULT_BACKGROUND, ThemeSpec::background)
}
