use log::{info, Level};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod slider;
mod storage;

mod components {
    pub mod back_to_home;
    pub mod before_after;
    pub mod contact_form;
    pub mod header;
    pub mod video_grid;
}

mod pages {
    pub mod affiliate;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod projects;
}

use components::back_to_home::BackToHome;
use pages::{
    affiliate::AffiliateProgram,
    contact::Contact,
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
    projects::Projects,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/terms-of-service")]
    Terms,
    #[at("/affiliate-program")]
    Affiliate,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy Policy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms of Service page");
            html! { <TermsOfService /> }
        }
        Route::Affiliate => {
            info!("Rendering Affiliate Program page");
            html! { <AffiliateProgram /> }
        }
    }
}

/// Scrolls back to the top whenever the route changes, so a long page
/// never bleeds its scroll position into the next one.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_left(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <BackToHome />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
