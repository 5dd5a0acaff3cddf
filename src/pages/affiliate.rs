use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::storage;
use crate::Route;

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "💰",
        "15% Lifetime Commission",
        "Earn 15% commission on every client you refer, for the lifetime of their relationship with us.",
    ),
    (
        "🎯",
        "High Conversion Rate",
        "Our premium services and proven track record ensure high conversion rates for your referrals.",
    ),
    (
        "📊",
        "Real-Time Tracking",
        "Monitor your referrals and earnings with our comprehensive affiliate dashboard.",
    ),
    (
        "🤝",
        "Dedicated Support",
        "Get personalized support from our affiliate team to maximize your earning potential.",
    ),
];

const REQUIREMENTS: &[&str] = &[
    "Active social media presence or professional network",
    "Alignment with our brand values and quality standards",
    "Commitment to promoting our services authentically",
    "Minimum of 1 referral every 6 months to maintain active status",
];

const SIGNUP_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Apply", "Submit your application with your background and referral strategy"),
    ("02", "Review", "Our team reviews your application within 48 hours"),
    ("03", "Approval", "Receive your unique affiliate link and marketing materials"),
    ("04", "Earn", "Start referring clients and earning 15% lifetime commissions"),
];

const FAQ: &[(&str, &str)] = &[
    (
        "How do I get paid?",
        "Commissions are paid monthly via bank transfer or PayPal, with a minimum payout threshold of €100.",
    ),
    (
        "When do I receive my commission?",
        "Commissions are paid 30 days after the client's final payment to ensure completed transactions.",
    ),
    (
        "Can I refer international clients?",
        "Yes! We work with clients worldwide and provide remote consultation and planning services.",
    ),
    (
        "Is there a limit to how much I can earn?",
        "No limits! The more qualified referrals you bring, the more you earn. Top affiliates earn €5,000+ monthly.",
    ),
];

#[function_component(AffiliateProgram)]
pub fn affiliate_program() -> Html {
    // Visits arriving through an affiliate link carry ?ref=<code>; keep
    // it around so a later inquiry can be attributed.
    let ref_code = use_search_param("ref".to_string());
    use_effect_with_deps(
        move |code: &Option<String>| {
            if let Some(code) = code.as_deref().filter(|c| !c.is_empty()) {
                storage::save(config::AFFILIATE_REF_KEY, &code.to_string());
                log::info!("stored affiliate referral code");
            }
            || ()
        },
        ref_code,
    );

    html! {
        <div class="page page-affiliate">
            <div class="page-header floating-panel-dark">
                <h1 class="page-heading">{"Affiliate Program"}</h1>
                <p class="section-intro">
                    {"Rejoignez notre programme d'affiliation et gagnez des commissions en \
                      recommandant nos services de vidéographie de mariage premium."}
                </p>
            </div>

            <div class="commission-highlight floating-panel-dark">
                <h2 class="stat-number">{"15% Lifetime"}</h2>
                <p class="card-text">{"Commission Rate"}</p>
            </div>

            <section class="section">
                <h2 class="section-heading">{"Program Overview"}</h2>
                <div class="floating-panel-dark">
                    <p class="card-text">
                        {"Our affiliate program is designed for wedding professionals, influencers, \
                          and anyone with connections in the wedding industry. Earn substantial \
                          commissions by referring couples to our premium wedding videography \
                          services."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-heading">{"Program Benefits"}</h2>
                <div class="card-grid-2">
                    {
                        BENEFITS.iter().map(|(icon, title, description)| html! {
                            <div class="floating-panel-dark">
                                <div class="card-icon">{ *icon }</div>
                                <h3 class="card-title">{ *title }</h3>
                                <p class="card-text">{ *description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-heading">{"Eligibility Requirements"}</h2>
                <div class="floating-panel-dark">
                    <ol class="numbered-list">
                        {
                            REQUIREMENTS.iter().map(|requirement| html! {
                                <li class="card-text">{ *requirement }</li>
                            }).collect::<Html>()
                        }
                    </ol>
                </div>
            </section>

            <section class="section">
                <h2 class="section-heading">{"How to Join"}</h2>
                <div class="card-grid-4">
                    {
                        SIGNUP_STEPS.iter().map(|(step, title, description)| html! {
                            <div class="step-card">
                                <div class="step-badge">{ *step }</div>
                                <h3 class="card-title">{ *title }</h3>
                                <p class="card-text">{ *description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-heading">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    {
                        FAQ.iter().map(|(question, answer)| html! {
                            <div class="floating-panel-dark">
                                <h3 class="card-title accent">{ *question }</h3>
                                <p class="card-text">{ *answer }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-heading">{"Affiliate Support"}</h2>
                <div class="floating-panel-dark">
                    <p class="card-text">
                        {"Questions about the affiliate program? Our dedicated team is here to help."}
                    </p>
                    <p class="card-text"><strong>{"Email: "}</strong>{ config::AFFILIATE_EMAIL }</p>
                    <p class="card-text"><strong>{"Response Time: "}</strong>{"Within 24 hours"}</p>
                </div>
            </section>

            <div class="section-cta">
                <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                    {"Apply Now"}
                </Link<Route>>
            </div>
        </div>
    }
}
