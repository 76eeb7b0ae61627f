use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::fetch_health;
use crate::{Route, styles};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let api_online = use_state(|| None::<bool>);

    {
        let api_online = api_online.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_health().await {
                    Ok(health) => {
                        log::info!("API status: {}", health.status);
                        api_online.set(Some(true));
                    }
                    Err(e) => {
                        log::warn!("API health check failed: {}", e);
                        api_online.set(Some(false));
                    }
                }
            });
            || ()
        });
    }

    let (dot_class, status_text) = match *api_online {
        Some(true) => ("bg-green-400", "Kitchen open"),
        Some(false) => ("bg-red-400", "Kitchen offline"),
        None => ("bg-gray-400 animate-pulse", "Checking..."),
    };

    html! {
        <div class="min-h-screen flex flex-col">
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                            {"🎰 Food Roulette"}
                        </Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <span class="flex items-center gap-2 text-sm text-white/80">
                                <span class={classes!("w-2", "h-2", "rounded-full", dot_class)}></span>
                                {status_text}
                            </span>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16 flex-1">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="h-16 flex items-center justify-center">
                    <span class={styles::FOOTER_TEXT}>{"Can't decide? Let the wheel pick."}</span>
                </div>
            </footer>
        </div>
    }
}
