use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::components::video_grid::embed_url;
use crate::config;
use crate::pages::projects::{HIGHLIGHT_VIDEO_IDS, TEASER_VIDEO_IDS};
use crate::Route;

struct PricingPlan {
    title: &'static str,
    price: &'static str,
    subtitle: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Essential",
        price: "€1,200",
        subtitle: "Perfect for intimate ceremonies",
        features: &[
            "4-6 hours of coverage",
            "2-3 minute highlight reel",
            "Full ceremony footage",
            "Professional editing",
            "Digital delivery",
            "1 revision included",
        ],
        popular: false,
    },
    PricingPlan {
        title: "Premium",
        price: "€2,500",
        subtitle: "Our most popular package",
        features: &[
            "8-10 hours of coverage",
            "5-7 minute cinematic film",
            "Full ceremony & reception",
            "Drone footage included",
            "Same-day highlights",
            "Professional color grading",
            "Digital + USB delivery",
            "3 revisions included",
        ],
        popular: true,
    },
    PricingPlan {
        title: "Luxury",
        price: "€4,200",
        subtitle: "Complete wedding documentation",
        features: &[
            "Full day coverage (12+ hours)",
            "10-15 minute feature film",
            "Multiple camera angles",
            "Drone & gimbal footage",
            "Same-day highlights",
            "Raw footage access",
            "Custom music licensing",
            "Premium packaging",
            "Unlimited revisions",
        ],
        popular: false,
    },
];

const WHY_US: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Creative Spark",
        "We ignite the creative process with innovative thinking that transforms brands into memorable experiences.",
    ),
    (
        "🎯",
        "Strategic Focus",
        "Every decision is made with long-term brand building in mind, ensuring sustainable growth and influence.",
    ),
    (
        "🔥",
        "Authentic Friction",
        "We create the right tension that generates emotion and builds genuine connections with your audience.",
    ),
    (
        "💎",
        "Unfiltered Honesty",
        "We tell you what needs to be said and do what needs to be done, ensuring transparent partnerships.",
    ),
];

const STATS: &[(&str, &str, &str)] = &[
    ("💍", "2000+", "Wedding projects completed"),
    ("🎥", "150+", "Happy Videographers"),
    ("✂️", "8", "Editors in our team"),
    ("🏆", "7 yrs", "Post-production experience"),
];

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🎬",
        title: "Wedding Cinematography",
        description: "Cinematic storytelling that captures every precious moment of your special day with artistic flair.",
        features: &["4K Ultra HD", "Drone Footage", "Multiple Angles", "Same-Day Highlights"],
    },
    Service {
        icon: "📸",
        title: "Photography",
        description: "Professional wedding photography that preserves memories with stunning visual artistry.",
        features: &["High Resolution", "RAW Processing", "Quick Turnaround", "Online Gallery"],
    },
    Service {
        icon: "✂️",
        title: "Post-Production",
        description: "Expert editing and color grading to transform raw footage into cinematic masterpieces.",
        features: &["Color Grading", "Audio Enhancement", "Motion Graphics", "Custom Music"],
    },
    Service {
        icon: "🎵",
        title: "Live Streaming",
        description: "Share your special moments with loved ones who cannot attend in person.",
        features: &["HD Quality", "Multiple Cameras", "Real-time Streaming", "Recording Included"],
    },
];

struct ProcessStep {
    step: &'static str,
    title: &'static str,
    description: &'static str,
    duration: Option<&'static str>,
}

const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Let's Talk",
        description: "We start with a quick chat to understand your story and the style of film you want.",
        duration: Some("1-2 hours"),
    },
    ProcessStep {
        step: "02",
        title: "Share Your Footage",
        description: "Send us a short 2–3 minute sample of your raw footage. This helps us gauge the quality and flow so we can give you the fairest quote and a plan that fits.",
        duration: Some("2-3 weeks"),
    },
    ProcessStep {
        step: "03",
        title: "Plan the Edit",
        description: "We work with you to choose the right format: teaser, highlight, feature, or full film so we can meet your expectations and deliver exactly what you've imagined.",
        duration: None,
    },
    ProcessStep {
        step: "04",
        title: "Crafting the Masterpiece",
        description: "This is where our team pours in the hours. We cut with rhythm, grade every frame for tone and color, mix the audio for depth, and weave the footage into a film that feels alive.",
        duration: Some("4-6 weeks"),
    },
    ProcessStep {
        step: "05",
        title: "First Draft & Revisions",
        description: "You'll receive the first cut online. Two rounds of revisions are included, and we refine until the next version lands exactly where it should.",
        duration: Some("1-2 weeks"),
    },
    ProcessStep {
        step: "06",
        title: "Final Delivery",
        description: "When everything feels just right, we send over your films in high quality (up to 4K). They're yours to keep, share, and come back to whenever you want.",
        duration: Some("Digital delivery"),
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <div class="hero">
            <div class="hero-background">
                <img
                    src="https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop"
                    alt="Creative workspace background"
                    loading="lazy"
                />
                <video autoplay=true playsinline=true loop=true muted=true preload="auto">
                    <source src="/video.mp4" type="video/mp4" />
                </video>
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <div class="hero-line">{"You do the work"}</div>
                <div class="hero-line">{"we do the"}</div>
                <div class="hero-line">{"stitches"}</div>
            </div>
        </div>
    }
}

/// Endless horizontal strip of portfolio embeds. The track is rendered
/// twice and shifted by half its width with a CSS animation so the loop
/// is seamless.
#[function_component(PortfolioStrip)]
fn portfolio_strip() -> Html {
    let all_videos: Vec<&str> = TEASER_VIDEO_IDS
        .iter()
        .chain(HIGHLIGHT_VIDEO_IDS.iter())
        .copied()
        .collect();

    let cards = |offset: usize| -> Html {
        all_videos
            .iter()
            .enumerate()
            .map(|(i, id)| {
                html! {
                    <div key={offset + i} class="marquee-card">
                        <iframe
                            src={embed_url(id)}
                            title={format!("Portfolio video {}", i + 1)}
                            frameborder="0"
                            allowfullscreen=true
                            loading="lazy"
                        />
                    </div>
                }
            })
            .collect()
    };

    html! {
        <section id="portfolio" class="section section-alt">
            <h2 class="section-heading">{"Our Portfolio"}</h2>
            <p class="section-intro">
                {"Découvrez notre collection de films de mariage cinématographiques"}
            </p>
            <div class="marquee">
                <div class="marquee-track">
                    { cards(0) }
                    { cards(all_videos.len()) }
                </div>
            </div>
            <div class="section-cta">
                <Link<Route> to={Route::Projects} classes="btn-pill btn-primary">
                    {"View Our Portfolio"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(WhyUsSection)]
fn why_us_section() -> Html {
    html! {
        <section class="section">
            <h2 class="section-heading">{"Get to Know the Amoura Promise"}</h2>
            <div class="card-grid-2">
                {
                    WHY_US.iter().map(|(icon, title, description)| html! {
                        <div class="floating-panel-dark">
                            <div class="card-icon">{ *icon }</div>
                            <h3 class="card-title">{ *title }</h3>
                            <p class="card-text">{ *description }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    html! {
        <section class="section section-alt">
            <h2 class="section-heading">{"A Few Stats About Us"}</h2>
            <div class="card-grid-4">
                {
                    STATS.iter().map(|(icon, number, label)| html! {
                        <div class="floating-panel-dark stat-card">
                            <div class="card-icon">{ *icon }</div>
                            <div class="stat-number">{ *number }</div>
                            <p class="card-text">{ *label }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(PricingSection)]
fn pricing_section() -> Html {
    html! {
        <section id="pricing" class="section">
            <h2 class="section-heading">{"Pricing"}</h2>
            <p class="section-intro">
                {"Choisissez le forfait qui correspond parfaitement à votre vision et à votre budget."}
            </p>
            <div class="card-grid-3">
                {
                    PRICING_PLANS.iter().map(|plan| html! {
                        <div class={classes!("floating-panel-dark", "pricing-card", plan.popular.then_some("popular"))}>
                            {
                                if plan.popular {
                                    html! { <div class="popular-badge">{"Most Popular"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3 class="card-title">{ plan.title }</h3>
                            <div class="price">{ plan.price }</div>
                            <p class="card-text">{ plan.subtitle }</p>
                            <ul class="feature-list">
                                { plan.features.iter().map(|f| html! { <li>{ *f }</li> }).collect::<Html>() }
                            </ul>
                            <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                                {"Book This Package"}
                            </Link<Route>>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section class="section section-alt">
            <h2 class="section-heading">{"Services"}</h2>
            <div class="card-grid-2">
                {
                    SERVICES.iter().map(|service| html! {
                        <div class="floating-panel-dark">
                            <div class="card-icon">{ service.icon }</div>
                            <h3 class="card-title">{ service.title }</h3>
                            <p class="card-text">{ service.description }</p>
                            <ul class="feature-list">
                                { service.features.iter().map(|f| html! { <li>{ *f }</li> }).collect::<Html>() }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    html! {
        <section class="section">
            <h2 class="section-heading">{"Our Process"}</h2>
            <div class="process-list">
                {
                    PROCESS_STEPS.iter().map(|step| html! {
                        <div class="process-step floating-panel-dark">
                            <div class="step-badge">{ step.step }</div>
                            <div class="step-body">
                                <h3 class="card-title">{ step.title }</h3>
                                <p class="card-text">{ step.description }</p>
                                {
                                    if let Some(duration) = step.duration {
                                        html! { <span class="step-duration">{ duration }</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    const CTA_STATS: &[(&str, &str)] = &[
        ("24h", "Response Time"),
        ("100%", "Satisfaction Rate"),
        ("Free", "Initial Consultation"),
    ];

    html! {
        <section class="section section-alt">
            <div class="floating-panel-dark cta-panel">
                <h2 class="section-heading">{"Ready to Create Magic?"}</h2>
                <div class="cta-stats">
                    {
                        CTA_STATS.iter().map(|(value, label)| html! {
                            <div class="cta-stat">
                                <div class="stat-number">{ *value }</div>
                                <p class="card-text">{ *label }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                    {"Start Your Story"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section class="section">
            <h2 class="section-heading accent">{"About Us"}</h2>
            <div class="floating-panel-dark">
                <h3 class="card-title">{"Our Story"}</h3>
                <p class="card-text">
                    {"For 7 years, we've dedicated ourselves to transforming weddings into \
                      cinematic stories. With equal parts craft and heart, we create films that \
                      feel as real as the moments themselves, memories designed to last a lifetime."}
                </p>
                <blockquote class="about-quote">
                    {"\"Our approach is simple: to be present, to listen, and to see your day as \
                      you live it. With equal parts skill and sensitivity, we create films that \
                      feel real, timeless, and true to you.\""}
                </blockquote>
            </div>
        </section>
    }
}

#[function_component(ContactDetailsSection)]
fn contact_details_section() -> Html {
    html! {
        <section id="contact" class="section section-alt">
            <h2 class="section-heading">{"Get In Touch"}</h2>
            <p class="section-intro">
                {"The first step to your perfect film is a simple hello. Reach out to us today :)"}
            </p>
            <div class="card-grid-2">
                <div class="floating-panel-dark">
                    <h3 class="card-title accent">{"Contact Details"}</h3>
                    <p class="card-text">{"📧 "}{ config::CONTACT_EMAIL }</p>
                    <p class="card-text">{"📍 "}{ config::STUDIO_ADDRESS }</p>
                    <p class="card-text">{"🕒 "}{ config::STUDIO_HOURS }</p>
                </div>
                <div class="floating-panel-dark">
                    <h3 class="card-title accent">{"Follow Us"}</h3>
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
                    <h4 class="card-title accent">{"Quick Response Guarantee"}</h4>
                    <p class="card-text">
                        {"We respond to all inquiries within 24 hours. Your project deserves our \
                          immediate attention."}
                    </p>
                </div>
            </div>
            <div class="section-cta">
                <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                    {"Inquire Now"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="floating-panel-dark footer-cta">
                <h2 class="section-heading">{"Let's Talk About Your Project"}</h2>
                <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                    {"Inquire Now"}
                </Link<Route>>
            </div>
            <div class="footer-grid">
                <div>
                    <h3 class="card-title accent">{"Quick Links"}</h3>
                    <ul class="footer-links">
                        <li><Link<Route> to={Route::Projects}>{"Our Portfolio"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Affiliate}>{"Affiliates"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3 class="card-title accent">{"Contact"}</h3>
                    <p class="card-text">{ config::CONTACT_EMAIL }</p>
                    <p class="card-text">{ config::STUDIO_ADDRESS }</p>
                </div>
            </div>
            <p class="footer-note">
                { format!("© {year} {} — Powered by AmouraWorks", config::STUDIO_NAME) }
            </p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page page-home">
            <Header />
            <Hero />
            <PortfolioStrip />
            <WhyUsSection />
            <StatsSection />
            <PricingSection />
            <ServicesSection />
            <ProcessSection />
            <CtaSection />
            <AboutSection />
            <ContactDetailsSection />
            <Footer />
        </div>
    }
}
