use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(id) {
        element.scroll_into_view();
    }
}

/// Fixed site header shown on the home page. Gains a backdrop once the
/// page is scrolled, and collapses into a burger-toggled overlay on
/// small screens.
#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // While the mobile overlay is open: lock body scrolling, move focus
    // into the menu, and let Escape dismiss it. All three are undone by
    // the cleanup closure, including on unmount with the menu open.
    {
        let menu_open_flag = menu_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut undo: Option<Box<dyn FnOnce()>> = None;

                if *open {
                    let window = web_sys::window().unwrap();
                    let document = window.document().unwrap();

                    if let Some(body) = document.body() {
                        let _ = body.style().set_property("overflow", "hidden");
                    }
                    if let Ok(Some(first_link)) = document.query_selector(".mobile-menu a") {
                        if let Ok(link) = first_link.dyn_into::<HtmlElement>() {
                            let _ = link.focus();
                        }
                    }

                    let escape_callback = {
                        let menu_open_flag = menu_open_flag.clone();
                        Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open_flag.set(false);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>)
                    };
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        escape_callback.as_ref().unchecked_ref(),
                    );

                    undo = Some(Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            escape_callback.as_ref().unchecked_ref(),
                        );
                        if let Some(body) = document.body() {
                            let _ = body.style().remove_property("overflow");
                        }
                    }));
                }

                move || {
                    if let Some(f) = undo {
                        f();
                    }
                }
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let scroll_to_pricing = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section("pricing");
        })
    };

    let header_class = classes!("site-header", (*is_scrolled).then_some("scrolled"));
    let menu_class = if *menu_open {
        "mobile-menu mobile-menu-open"
    } else {
        "mobile-menu"
    };

    html! {
        <header class={header_class}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="logo-badge">{"K"}</span>
                    <span class="logo-text">{ config::STUDIO_NAME }</span>
                </Link<Route>>

                <nav class="desktop-nav">
                    <Link<Route> to={Route::Projects} classes="nav-link">
                        {"Portfolio"}
                    </Link<Route>>
                    <a href="#pricing" class="nav-link" onclick={scroll_to_pricing.clone()}>
                        {"Pricing"}
                    </a>
                    <Link<Route> to={Route::Contact} classes="nav-link">
                        {"Contact Us"}
                    </Link<Route>>
                    <Link<Route> to={Route::Affiliate} classes="affiliate-btn">
                        {"Become an Affiliate"}
                    </Link<Route>>
                </nav>

                <button class="burger-menu" aria-label="Open menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={menu_class}>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Projects} classes="nav-link">
                        {"Portfolio"}
                    </Link<Route>>
                </div>
                <a href="#pricing" class="nav-link" onclick={scroll_to_pricing}>
                    {"Pricing"}
                </a>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Contact} classes="nav-link">
                        {"Contact Us"}
                    </Link<Route>>
                </div>
                <div onclick={close_menu}>
                    <Link<Route> to={Route::Affiliate} classes="affiliate-btn">
                        {"Become an Affiliate"}
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}
