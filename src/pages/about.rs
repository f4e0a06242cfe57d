use yew::prelude::*;

use crate::components::icons::Icon;

const EXPERTISE: &[&str] = &[
    "Skincare & Beauty",
    "Fitness & Health",
    "Tech & Gadgets",
    "Fashion & Jewelry",
    "Dropshipping & Ecommerce Products",
    "Commercial Product Campaigns",
];

const METHODOLOGY: &[&str] = &[
    "In-depth audience and market understanding",
    "Platform-specific creative optimization",
    "Clear messaging frameworks",
    "Conversion-focused storytelling",
    "Performance tracking and iterative refinement",
];

const STANDARDS: &[&str] = &[
    "Structured creative systems",
    "Premium production quality",
    "Brand consistency",
    "Long-term scalability",
    "Data-informed decision making",
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_back: Callback<()>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <main class="about-page">
            <button class="back-button" onclick={back}>
                { Icon::ArrowLeft.render(16) }
                {"Back to Home"}
            </button>

            <h1 class="gradient-text">{"About Addy UGC Creative"}</h1>

            <p class="about-lede">
                {"Addy UGC Creative is a performance-oriented creative studio delivering strategic \
                  user-generated content and commercial product advertising for growth-focused \
                  brands. We operate at the intersection of marketing strategy, audience \
                  psychology, and high-quality visual execution."}
            </p>
            <p>
                {"Our objective is clear: to produce structured, platform-native creatives that \
                  strengthen brand positioning while driving measurable performance outcomes."}
            </p>

            <div class="about-grid">
                <div class="about-card">
                    <h2>{ Icon::Target.render(20) }{" Our Expertise"}</h2>
                    <p class="eyebrow">{"We develop creative assets across:"}</p>
                    <ul>
                        { for EXPERTISE.iter().map(|item| html! { <li key={*item}>{item}</li> }) }
                    </ul>
                </div>
                <div class="about-card">
                    <h2>{ Icon::Cpu.render(20) }{" Our Methodology"}</h2>
                    <p class="eyebrow">{"Our process is built on strategic precision:"}</p>
                    <ul>
                        { for METHODOLOGY.iter().map(|item| html! { <li key={*item}>{item}</li> }) }
                    </ul>
                </div>
            </div>

            <div class="about-card about-standard">
                <h2>{ Icon::CheckCircle.render(24) }{" Our Standard"}</h2>
                <p class="eyebrow">{"We maintain a strong commitment to:"}</p>
                <div class="standard-grid">
                    { for STANDARDS.iter().map(|item| html! {
                        <div class="standard-chip" key={*item}>{item}</div>
                    }) }
                </div>
            </div>

            <blockquote class="about-quote">
                {"\"We believe sustainable growth is achieved when creativity is supported by \
                  strategy. Through disciplined execution and refined storytelling, we help brands \
                  build authority, improve engagement, and scale with confidence.\""}
            </blockquote>
        </main>
    }
}
