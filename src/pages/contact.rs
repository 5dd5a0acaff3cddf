use yew::prelude::*;

use crate::components::before_after::BeforeAfterSlider;
use crate::components::contact_form::ContactForm;
use crate::config;

/// Contact page: inquiry form, studio details, and a draggable
/// before/after grading comparison.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page page-contact">
            <div class="page-header floating-panel-dark">
                <h1 class="page-heading">{"Let's Create Something Beautiful"}</h1>
                <p class="section-intro">
                    {"Tell us about your day and we'll take it from there."}
                </p>
            </div>

            <div class="card-grid-2">
                <ContactForm />

                <div class="floating-panel-dark">
                    <h2 class="section-heading accent">{"Contact Details"}</h2>
                    <p class="card-text">{"📧 "}{ config::CONTACT_EMAIL }</p>
                    <p class="card-text">{"📍 "}{ config::STUDIO_ADDRESS }</p>
                    <p class="card-text">{"🕒 "}{ config::STUDIO_HOURS }</p>
                    <div class="social-row">
                        {
                            config::SOCIAL_LINKS.iter().map(|(name, url, icon)| html! {
                                <a
                                    href={*url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title={*name}
                                    class="social-bubble"
                                >
                                    { *icon }
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <section class="section">
                <h2 class="section-heading">{"Our Color Grading"}</h2>
                <p class="section-intro">
                    {"Drag the handle to compare raw footage with our final grade."}
                </p>
                <BeforeAfterSlider
                    before="/assets/grading-before.jpg"
                    after="/assets/grading-after.jpg"
                />
            </section>
        </div>
    }
}
