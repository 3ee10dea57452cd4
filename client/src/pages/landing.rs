//! Public landing page: hero, features, pricing and contact sections.
//!
//! Section ids (`home`, `features`, `pricing`, `contact`) are the targets of
//! header links and URL fragments, so they must stay stable.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

const CURRENCY_SYMBOL: &str = "$";

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Chat with your documents",
        body: "Upload files and ask questions in plain language. Answers cite the passages they came from.",
    },
    Feature {
        title: "Private by default",
        body: "Each upload session is isolated and can be cleared at any time.",
    },
    Feature {
        title: "Works in light or dark",
        body: "Pick a theme or follow your operating system.",
    },
];

pub(crate) struct PricingTier {
    pub name: &'static str,
    pub monthly_cents: u32,
    pub blurb: &'static str,
    pub perks: &'static [&'static str],
    pub highlighted: bool,
}

pub(crate) const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        monthly_cents: 0,
        blurb: "Try it on a few documents.",
        perks: &["5 documents", "50 questions per month"],
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        monthly_cents: 1900,
        blurb: "For individuals who live in their files.",
        perks: &["Unlimited documents", "Priority indexing", "Chat history"],
        highlighted: true,
    },
    PricingTier {
        name: "Team",
        monthly_cents: 4950,
        blurb: "Shared workspaces for small teams.",
        perks: &["Everything in Pro", "Shared collections", "Admin controls"],
        highlighted: false,
    },
];

/// Render a monthly price. Whole amounts drop the cents; zero is "Free".
pub(crate) fn format_price(cents: u32) -> String {
    match (cents / 100, cents % 100) {
        (0, 0) => "Free".to_owned(),
        (whole, 0) => format!("{CURRENCY_SYMBOL}{whole}"),
        (whole, frac) => format!("{CURRENCY_SYMBOL}{whole}.{frac:02}"),
    }
}

fn tier_class(tier: &PricingTier) -> &'static str {
    if tier.highlighted { "pricing-card pricing-card--highlighted" } else { "pricing-card" }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <SiteHeader/>

            <section id="home" class="landing__hero">
                <h1>"Ask your documents anything"</h1>
                <p class="landing__lead">
                    "Atrium indexes your files and answers questions about them in seconds."
                </p>
                <a href="#pricing" class="btn btn--primary">"See plans"</a>
            </section>

            <section id="features" class="landing__features">
                <h2>"Features"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <article class="feature-card">
                                    <h3>{f.title}</h3>
                                    <p>{f.body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="pricing" class="landing__pricing">
                <h2>"Pricing"</h2>
                <div class="pricing-grid">
                    {PRICING_TIERS
                        .iter()
                        .map(|tier| {
                            view! {
                                <article class=tier_class(tier)>
                                    <h3>{tier.name}</h3>
                                    <p class="pricing-card__price">
                                        {format_price(tier.monthly_cents)}
                                        <span class="pricing-card__period">" / month"</span>
                                    </p>
                                    <p>{tier.blurb}</p>
                                    <ul>
                                        {tier.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer id="contact" class="landing__footer">
                <p>"Questions? " <a href="mailto:hello@atrium.example">"hello@atrium.example"</a></p>
            </footer>
        </div>
    }
}
