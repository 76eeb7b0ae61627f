use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::GradientBackground;
use crate::{Route, styles};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <GradientBackground>
                <div class={classes!(styles::PAGE, "text-center")}>
                    <h1 class={styles::PAGE_TITLE}>{"🍽️ Nothing on this plate"}</h1>
                    <p class={styles::PAGE_SUBTITLE}>{"That page isn't on the menu."}</p>
                    <Link<Route> to={Route::Home} classes="px-6 py-3 bg-white text-gray-800 rounded-2xl font-bold shadow-lg">
                        {"Back to the wheel"}
                    </Link<Route>>
                </div>
            </GradientBackground>
        </Base>
    }
}
