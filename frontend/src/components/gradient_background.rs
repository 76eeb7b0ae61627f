use yew::prelude::*;
use shared::constants::DEFAULT_BACKGROUND;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
    /// CSS background of the active theme
    #[prop_or(AttrValue::Static(DEFAULT_BACKGROUND))]
    pub background: AttrValue,
}

/// Full-page backdrop that fades between theme backgrounds.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen">
            <div
                class="fixed inset-0 -z-50 transition-all duration-1000"
                style={format!("background: {};", props.background)}
            ></div>

            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
