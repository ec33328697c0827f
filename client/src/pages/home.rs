//! Public landing page.

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("🧰", "Expert Installation", "Certified crews for homogeneous, heterogeneous, and sports floors."),
    ("📅", "Easy Booking", "Pick a date and time slot online and we handle the rest."),
    ("💬", "Honest Estimates", "Transparent per-square-foot pricing before any work starts."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__nav">
                <span class="top-nav__brand">"FloorEase"</span>
                <span class="top-nav__spacer"></span>
                <a class="btn" href="/login">"Login"</a>
                <a class="btn btn--primary" href="/register">"Sign Up"</a>
            </header>
            <section class="home-page__hero">
                <h1>"Floors that work as hard as you do"</h1>
                <p>"Commercial and residential vinyl flooring, installed, repaired, and maintained by FloorEase."</p>
                <a class="btn btn--primary btn--lg" href="/login">"Get Started"</a>
            </section>
            <section class="home-page__highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <div class="feature-card">
                                <span class="feature-card__icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
