//! Landing page: static marketing hero and feature highlights.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Driven Precision",
        description: "State-of-the-art deep learning models pinpoint blade defects \
                      with accuracy manual review can't match.",
    },
    Feature {
        title: "Drone Integration",
        description: "Analyze high-resolution drone imagery for comprehensive \
                      inspections without turbine downtime.",
    },
    Feature {
        title: "Real-Time Insights",
        description: "Instant results and visualizations for quick decision-making \
                      and maintenance prioritization.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="WindSightAI"/>
        <div class="page landing">
            <section class="hero">
                <h1 class="hero-title">"WindSightAI: Elevating Wind Turbine Inspections"</h1>
                <p class="hero-text">
                    "Upload drone imagery of turbine blades and let WindSightAI surface "
                    "defects in minutes, not days."
                </p>
                <div class="hero-actions">
                    <A href="/register" class="btn btn-primary">
                        "Get Started"
                    </A>
                    <A href="/login" class="btn btn-secondary">
                        "Sign In"
                    </A>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature-card">
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
