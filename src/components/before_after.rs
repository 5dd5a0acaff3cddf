use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, TouchEvent};

use crate::slider::{ContainerBounds, PointerSample, SliderState};

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    /// Raw footage frame, revealed from the left edge up to the handle.
    pub before: String,
    /// Graded frame, shown underneath across the full width.
    pub after: String,
    #[prop_or(AttrValue::from("Before"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::from("After"))]
    pub after_label: AttrValue,
}

fn measure(container: &NodeRef) -> Option<ContainerBounds> {
    container.cast::<Element>().map(|el| {
        let rect = el.get_bounding_client_rect();
        ContainerBounds {
            left: rect.left(),
            width: rect.width(),
        }
    })
}

/// Draggable before/after comparison. The handle position is a
/// percentage of container width; dragging works with both mouse and
/// touch, and keeps tracking even when the pointer leaves the container
/// mid-gesture because the move/release listeners sit on the document.
#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterProps) -> Html {
    // The state machine lives in a RefCell so the document-level
    // closures always see the current value; `position` mirrors it into
    // render state.
    let state = use_mut_ref(SliderState::default);
    let position = use_state(|| SliderState::default().position());
    let dragging = use_state(|| false);
    let container = use_node_ref();

    let on_mouse_down = {
        let state = state.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.borrow_mut().begin_drag();
            dragging.set(true);
        })
    };

    let on_touch_start = {
        let state = state.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            state.borrow_mut().begin_drag();
            dragging.set(true);
        })
    };

    // While a drag is active the document owns the move/release
    // listeners; they are attached on entering the dragging state and
    // the cleanup closure removes them on release or unmount, so a
    // component torn down mid-drag leaves nothing behind.
    {
        let state = state.clone();
        let position = position.clone();
        let dragging_flag = dragging.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let mut detach: Option<Box<dyn FnOnce()>> = None;

                if *active {
                    let document = web_sys::window()
                        .and_then(|w| w.document())
                        .expect("no document");

                    let mouse_move = {
                        let state = state.clone();
                        let position = position.clone();
                        let container = container.clone();
                        Closure::wrap(Box::new(move |e: MouseEvent| {
                            let mut s = state.borrow_mut();
                            s.update(
                                PointerSample {
                                    x: e.client_x() as f64,
                                },
                                measure(&container),
                            );
                            position.set(s.position());
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };

                    let touch_move = {
                        let state = state.clone();
                        let position = position.clone();
                        let container = container.clone();
                        Closure::wrap(Box::new(move |e: TouchEvent| {
                            if let Some(touch) = e.touches().get(0) {
                                let mut s = state.borrow_mut();
                                s.update(
                                    PointerSample {
                                        x: touch.client_x() as f64,
                                    },
                                    measure(&container),
                                );
                                position.set(s.position());
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let mouse_up = {
                        let state = state.clone();
                        let dragging_flag = dragging_flag.clone();
                        Closure::wrap(Box::new(move |_: MouseEvent| {
                            state.borrow_mut().end_drag();
                            dragging_flag.set(false);
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };

                    let touch_end = {
                        let state = state.clone();
                        let dragging_flag = dragging_flag.clone();
                        Closure::wrap(Box::new(move |_: TouchEvent| {
                            state.borrow_mut().end_drag();
                            dragging_flag.set(false);
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let _ = document.add_event_listener_with_callback(
                        "mousemove",
                        mouse_move.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "mouseup",
                        mouse_up.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "touchmove",
                        touch_move.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "touchend",
                        touch_end.as_ref().unchecked_ref(),
                    );

                    let state = state.clone();
                    detach = Some(Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            mouse_move.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "mouseup",
                            mouse_up.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "touchmove",
                            touch_move.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "touchend",
                            touch_end.as_ref().unchecked_ref(),
                        );
                        // Teardown mid-drag must not leave the machine
                        // stuck in the dragging state.
                        state.borrow_mut().end_drag();
                    }));
                }

                move || {
                    if let Some(f) = detach {
                        f();
                    }
                }
            },
            *dragging,
        );
    }

    let pos = *position;
    let clip_style = format!("clip-path: inset(0 {}% 0 0);", 100.0 - pos);
    let handle_style = format!("left: {pos}%;");

    html! {
        <div
            ref={container}
            class="before-after"
            style="touch-action: none;"
        >
            <style>
            {r#".before-after {
                position: relative;
                overflow: hidden;
                border-radius: 24px;
                aspect-ratio: 16 / 9;
                cursor: ew-resize;
                user-select: none;
            }
            .before-after .layer {
                position: absolute;
                inset: 0;
                overflow: hidden;
            }
            .before-after img {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .before-after .layer-label {
                position: absolute;
                top: 1rem;
                background: rgba(0, 0, 0, 0.7);
                backdrop-filter: blur(4px);
                padding: 0.25rem 0.75rem;
                border-radius: 9999px;
                color: white;
                font-size: 0.85rem;
                text-transform: uppercase;
                letter-spacing: 0.05em;
            }
            .before-after .divider {
                position: absolute;
                top: 0;
                bottom: 0;
                width: 2px;
                background: white;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
                transform: translateX(-50%);
                z-index: 10;
            }
            .before-after .handle {
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: 2rem;
                height: 2rem;
                background: white;
                border-radius: 9999px;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
                cursor: ew-resize;
            }
            .before-after .drag-overlay {
                position: absolute;
                inset: 0;
                cursor: ew-resize;
                z-index: 5;
            }"#}
            </style>

            <div class="layer">
                <img src={props.after.clone()} alt={props.after_label.clone()} draggable="false" />
                <div class="layer-label" style="right: 1rem;">{ props.after_label.clone() }</div>
            </div>

            <div class="layer" style={clip_style}>
                <img src={props.before.clone()} alt={props.before_label.clone()} draggable="false" />
                <div class="layer-label" style="left: 1rem;">{ props.before_label.clone() }</div>
            </div>

            <div class="divider" style={handle_style}>
                <div
                    class="handle"
                    onmousedown={on_mouse_down.clone()}
                    ontouchstart={on_touch_start.clone()}
                />
            </div>

            // Full-surface hit area so a drag can start anywhere on the image.
            <div
                class="drag-overlay"
                onmousedown={on_mouse_down}
                ontouchstart={on_touch_start}
            />
        </div>
    }
}
