use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Fixed "back to home" pill shown on every page except the home page
/// itself.
#[function_component(BackToHome)]
pub fn back_to_home() -> Html {
    let route = use_route::<Route>();
    if matches!(route, Some(Route::Home) | None) {
        return html! {};
    }

    html! {
        <div class="back-to-home">
            <Link<Route> to={Route::Home} classes="back-to-home-link">
                <span class="back-arrow">{"←"}</span>
                <span class="back-label">{"Home"}</span>
            </Link<Route>>
        </div>
    }
}
