use yew::prelude::*;

use crate::config;

// Both legal pages live here; they share the same simple panel layout
// and never change independently.

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="page page-legal">
            <div class="page-header floating-panel-dark">
                <h1 class="page-heading">{"Terms of Service"}</h1>
            </div>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Our Services"}</h2>
                <ul class="feature-list">
                    <li>{"Wedding ceremony and reception filming"}</li>
                    <li>{"Professional video editing and post-production"}</li>
                    <li>{"Highlight reels and full-length wedding films"}</li>
                    <li>{"Drone footage (subject to venue permissions and regulations)"}</li>
                    <li>{"Live streaming services"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Booking Process"}</h2>
                <ul class="feature-list">
                    <li>{"A 50% deposit is required to secure your wedding date"}</li>
                    <li>{"Final payment is due 30 days before your wedding date"}</li>
                    <li>{"All payments must be made in Euros (EUR)"}</li>
                    <li>{"Late payment fees may apply for overdue balances"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Cancellation Policy"}</h2>
                <ul class="feature-list">
                    <li>{"Cancellations more than 90 days before: 50% refund of deposit"}</li>
                    <li>{"Cancellations 30-90 days before: 25% refund of deposit"}</li>
                    <li>{"Cancellations less than 30 days before: No refund"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Delivery"}</h2>
                <ul class="feature-list">
                    <li>{"Highlight reel: 2-3 weeks after your wedding"}</li>
                    <li>{"Full wedding film: 6-8 weeks after your wedding"}</li>
                    <li>{"Raw footage delivery: Available upon request for additional fee"}</li>
                    <li>{"Rush delivery: Available for 50% surcharge"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Contact"}</h2>
                <p class="card-text">{"Email: "}{ config::CONTACT_EMAIL }</p>
                <p class="card-text">{"Address: "}{ config::STUDIO_ADDRESS }</p>
                <p class="card-text">{"Business Hours: "}{ config::STUDIO_HOURS }</p>
            </section>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="page page-legal">
            <div class="page-header floating-panel-dark">
                <h1 class="page-heading">{"Privacy Policy"}</h1>
            </div>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Information We Collect"}</h2>
                <h3 class="card-title">{"Personal Information"}</h3>
                <ul class="feature-list">
                    <li>{"Name, email address, and phone number"}</li>
                    <li>{"Wedding date and venue information"}</li>
                    <li>{"Communication preferences and special requests"}</li>
                    <li>{"Payment and billing information"}</li>
                </ul>
                <h3 class="card-title">{"Technical Information"}</h3>
                <ul class="feature-list">
                    <li>{"IP address and browser information"}</li>
                    <li>{"Website usage patterns and preferences"}</li>
                    <li>{"Device information and screen resolution"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"How We Use Your Information"}</h2>
                <ul class="feature-list">
                    <li>{"To provide and improve our wedding videography services"}</li>
                    <li>{"To communicate with you about your project and appointments"}</li>
                    <li>{"To process payments and manage billing"}</li>
                    <li>{"To send you updates about our services (with your consent)"}</li>
                    <li>{"To comply with legal obligations and protect our rights"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Your Rights"}</h2>
                <ul class="feature-list">
                    <li>{"Access and review your personal information"}</li>
                    <li>{"Request corrections to inaccurate data"}</li>
                    <li>{"Request deletion of your personal information"}</li>
                    <li>{"Object to processing of your data"}</li>
                    <li>{"Data portability and withdrawal of consent"}</li>
                </ul>
            </section>

            <section class="floating-panel-dark legal-section">
                <h2 class="card-title accent">{"Contact"}</h2>
                <p class="card-text">{"Email: "}{ config::CONTACT_EMAIL }</p>
                <p class="card-text">{"Address: "}{ config::STUDIO_ADDRESS }</p>
            </section>
        </div>
    }
}
