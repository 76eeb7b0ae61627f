mod wheel_svg;
mod wheel_utils;

use yew::prelude::*;
use shared::wheel_geometry::WheelDimensions;
use shared::{FoodItem, SpinPhase};

use crate::components::{FoodSelector, GradientBackground};
use crate::hooks::use_spin_controller;
use crate::styles;
use wheel_svg::WheelSvg;
use wheel_utils::{ResultDisplay, SpinButton};

const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 255, 255, 0.4);
    }
    70% {
        transform: scale(1.02);
        box-shadow: 0 0 0 10px rgba(255, 255, 255, 0);
    }
    100% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 255, 255, 0);
    }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}

@keyframes bounce-once {
    0% { transform: scale(0.3); opacity: 0; }
    60% { transform: scale(1.05); opacity: 1; }
    100% { transform: scale(1); }
}

.animate-bounce-once {
    animation: bounce-once 0.8s ease-out;
}
"#;

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    let spin = use_spin_controller();
    let view = spin.view(WheelDimensions::default());

    let on_select = {
        let spin = spin.clone();
        Callback::from(move |foods: Vec<FoodItem>| spin.set_foods(foods))
    };

    let start_spin = {
        let spin = spin.clone();
        Callback::from(move |_: MouseEvent| spin.spin())
    };

    let spin_again = {
        let spin = spin.clone();
        Callback::from(move |_: MouseEvent| spin.spin_again())
    };

    let is_spinning = view.phase == SpinPhase::Spinning;

    html! {
        <GradientBackground background={AttrValue::from(view.background.clone())}>
            <style>{CUSTOM_CSS}</style>
            <div class={styles::PAGE}>
                <h1 class={styles::PAGE_TITLE}>{"🎰 Food Roulette"}</h1>
                <p class={styles::PAGE_SUBTITLE}>{"Spin the wheel and let fate choose your next meal"}</p>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                    <FoodSelector {on_select} />

                    <div class={styles::WHEEL_CARD}>
                        <WheelSvg
                            face={view.face.clone()}
                            rotation={view.rotation}
                            is_spinning={is_spinning}
                            accent={view.accent.clone()}
                        />

                        if let Some(error) = &view.error {
                            <div class={classes!(styles::ALERT_ERROR, "mt-6", "w-full", "max-w-[300px]", "text-center")}>
                                {format!("The wheel got stuck: {}. Try again!", error)}
                            </div>
                        }

                        <div class="w-full max-w-[300px] mt-6">
                            <SpinButton
                                is_spinning={view.phase != SpinPhase::Idle && view.phase != SpinPhase::Result}
                                can_spin={view.can_spin}
                                accent={view.accent.clone()}
                                onclick={start_spin}
                            />
                        </div>
                    </div>
                </div>

                <ResultDisplay
                    result={view.result.clone()}
                    show_result={view.show_result}
                    on_spin_again={spin_again}
                />
            </div>
        </GradientBackground>
    }
}
