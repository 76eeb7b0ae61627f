use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::PremadeListsResponse;

use crate::api::fetch_premade_lists;

/// Loads the premade categories once on mount. `None` until they arrive, and
/// stays `None` if the request fails.
#[hook]
pub fn use_premade_lists() -> (bool, Option<PremadeListsResponse>) {
    let lists = use_state(|| None::<PremadeListsResponse>);
    let loading = use_state(|| true);

    {
        let lists = lists.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_premade_lists().await {
                    Ok(data) => lists.set(Some(data)),
                    Err(e) => log::error!("Error fetching premade lists: {}", e),
                }
                loading.set(false);
            });

            || ()
        });
    }

    (*loading, (*lists).clone())
}
