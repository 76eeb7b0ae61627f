use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use shared::wheel_palette::segment_color;
use shared::{SpinResult, ThemeSpec};
use yew::prelude::*;

const FOOD_EMOJIS: [(&str, &str); 12] = [
    ("pizza", "🍕"),
    ("burger", "🍔"),
    ("sushi", "🍣"),
    ("taco", "🌮"),
    ("pasta", "🍝"),
    ("salad", "🥗"),
    ("chicken", "🍗"),
    ("fish", "🐟"),
    ("cake", "🍰"),
    ("ice cream", "🍨"),
    ("cookie", "🍪"),
    ("pie", "🥧"),
];
const DEFAULT_FOOD_EMOJI: &str = "🍽️";

// First keyword contained in the lowercased name wins
pub fn food_emoji(food: &str) -> &'static str {
    let lower = food.to_lowercase();
    FOOD_EMOJIS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_FOOD_EMOJI)
}

pub fn format_clock<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: Display,
{
    timestamp.with_timezone(zone).format("%H:%M").to_string()
}

fn result_gradient(theme: &ThemeSpec) -> String {
    format!(
        "background: linear-gradient(135deg, {}66, {}66);",
        segment_color(0, Some(theme)),
        segment_color(1, Some(theme))
    )
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<SpinResult>,
    pub show_result: bool,
    pub on_spin_again: Callback<MouseEvent>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.show_result {
        return html! {};
    }

    let Some(result) = &props.result else {
        return html! {};
    };

    html! {
        <div
            class="mt-8 mb-4 mx-auto max-w-md rounded-3xl p-8 text-center text-white shadow-2xl border-2 border-white/30 backdrop-blur-lg animate-bounce-once"
            style={result_gradient(&result.theme)}
        >
            <div class="text-lg font-semibold mb-2 text-white/80">{"⭐ The Wheel Has Decided! ⭐"}</div>
            <div class="text-6xl mb-4">{food_emoji(&result.selected_food)}</div>
            <h2 class="text-4xl font-bold mb-2">{&result.selected_food}</h2>
            <p class="text-white/80 mb-6">{"Your delicious destiny awaits! 🎉"}</p>

            <div class="mb-6 bg-white/10 rounded-2xl p-4">
                <div class="text-sm font-medium mb-2 text-white/80">
                    {format!("✨ Theme: {}", result.theme.name)}
                </div>
                <div class="flex justify-center gap-2">
                    { for result.theme.colors.iter().enumerate().map(|(index, color)| html! {
                        <div
                            key={index}
                            class="w-6 h-6 rounded-full shadow-lg"
                            style={format!("background-color: {};", color)}
                        ></div>
                    }) }
                </div>
            </div>

            <div class="mb-6 flex items-center justify-center gap-4 text-sm text-white/60">
                <span>{format!("🕒 {}", format_clock(&result.timestamp, &Local))}</span>
                <span>{format!("🎲 {} options", result.total_options)}</span>
            </div>

            <button
                onclick={props.on_spin_again.clone()}
                class="px-6 py-3 bg-white text-gray-800 rounded-2xl font-bold shadow-lg hover:bg-gray-100 hover:shadow-xl transition-all duration-300"
            >
                {"🔄 Spin Again"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub accent: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin the Wheel!" };
    let is_disabled = !props.can_spin;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let style = if is_disabled {
        String::new()
    } else {
        format!("background-color: {};", props.accent)
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class="relative">
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                style={style}
                class={classes!(
                    "relative",
                    "w-full",
                    "px-8",
                    "py-4",
                    "rounded-full",
                    "font-bold",
                    "text-lg",
                    "transition-all",
                    "duration-300",
                    "focus:outline-none",
                    "focus:ring-4",
                    "focus:ring-white/50",
                    button_class,
                    (!is_disabled).then_some("animate-pulse-subtle"),
                )}
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
