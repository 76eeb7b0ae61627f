use yew::prelude::*;

use crate::base::Base;
use crate::pages::games::FrontendWheelGame;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <FrontendWheelGame />
        </Base>
    }
}
