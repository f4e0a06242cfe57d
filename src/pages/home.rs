use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::video_player::VideoPlayer;
use crate::components::visibility::use_visible_once;
use crate::content::{
    PortfolioNiche, BUDGET_TIERS, CAROUSEL_VIDEOS, FEATURE_BLOCKS, PORTFOLIO_NICHES, PRICING_PLANS,
    TESTIMONIALS,
};
use crate::lead::{self, ContactMessage, FailurePolicy, SubmitStatus, SERVICES};
use crate::state::ActiveVideo;

/// Smooth-scrolls to a section anchor on the home screen.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_start_project: Callback<Option<String>>,
    pub on_select_niche: Callback<&'static PortfolioNiche>,
    pub on_expand_video: Callback<ActiveVideo>,
    pub on_about: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let start_blank = {
        let on_start = props.on_start_project.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(None))
    };

    html! {
        <main>
            <Hero on_start_project={start_blank.clone()} />
            <PositioningStrip />
            <VideoCarousel on_expand_video={props.on_expand_video.clone()} />
            <PortfolioGrid on_select_niche={props.on_select_niche.clone()} />
            <ScienceSection />
            <ProvenResults />
            <Testimonials />
            <BrandShowcase />
            <ProcessSteps />
            <PricingSection on_start_project={props.on_start_project.clone()} />
            <BigCta on_start_project={start_blank} />
            <ContactSection />
            <Footer on_about={props.on_about.clone()} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct StartProjectProps {
    on_start_project: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &StartProjectProps) -> Html {
    html! {
        <section class="hero">
            <h1>
                {"We Create "}
                <span class="gradient-text">{"Scroll-Stopping"}</span>
                <br />
                {"UGC Ads That Convert"}
            </h1>
            <p class="hero-sub">{"Performance-driven creative that turns attention into sales."}</p>
            <div class="hero-actions">
                <a href="#work" class="button button-primary">{"View My Work"}</a>
                <button class="button button-outline" onclick={props.on_start_project.clone()}>
                    {"Start Your Project"}
                </button>
            </div>
        </section>
    }
}

#[function_component(PositioningStrip)]
fn positioning_strip() -> Html {
    html! {
        <section class="positioning-strip">
            <h2>
                {"More Than Just Content. "}
                <span class="gradient-text">{"It's Strategy."}</span>
            </h2>
            <p>
                {"We specialize in high-converting UGC and commercial product ads built for brands, \
                  dropshippers, and scaling e-commerce stores. Every creative is engineered with \
                  performance psychology, thumb-stopping hooks, and platform-native storytelling \
                  to maximize ROAS and dominate attention."}
            </p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct VideoCarouselProps {
    on_expand_video: Callback<ActiveVideo>,
}

#[function_component(VideoCarousel)]
fn video_carousel(props: &VideoCarouselProps) -> Html {
    // The track renders twice so the CSS marquee can loop seamlessly.
    let items = CAROUSEL_VIDEOS
        .iter()
        .chain(CAROUSEL_VIDEOS.iter())
        .enumerate()
        .map(|(idx, video)| {
            html! {
                <div class="carousel-item" key={format!("{}-{idx}", video.id)}>
                    <VideoPlayer
                        source={AttrValue::from(video.source)}
                        title={format!("Creative {}", idx + 1)}
                        on_expand={props.on_expand_video.clone()}
                    />
                </div>
            }
        });

    html! {
        <section class="carousel-section">
            <div class="section-heading">
                <h2>{"Featured Creatives"}</h2>
                <p>{"A glimpse into our high-performance video library."}</p>
            </div>
            <div class="carousel-viewport">
                <div class="carousel-track">{ for items }</div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioGridProps {
    on_select_niche: Callback<&'static PortfolioNiche>,
}

#[function_component(PortfolioGrid)]
fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    let cards = PORTFOLIO_NICHES.iter().map(|niche| {
        let onclick = {
            let on_select = props.on_select_niche.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(niche))
        };
        html! {
            <div class="niche-card" key={niche.id} {onclick}>
                <div class="niche-thumb">
                    <img src={niche.thumbnail} alt={niche.title} loading="lazy" decoding="async" />
                    <div class="niche-thumb-cta">{"Explore Case Study"}</div>
                </div>
                <span class="niche-category">{niche.category}</span>
                <h3>{niche.title}</h3>
                <p>{niche.description}</p>
            </div>
        }
    });

    html! {
        <section id="work" class="portfolio-section">
            <span class="eyebrow">{"Strategic Portfolio"}</span>
            <h2>{"My Work"}</h2>
            <p class="section-sub">
                {"Performance-driven creatives engineered for maximum ROAS across multiple \
                  high-converting niches."}
            </p>
            <div class="niche-grid">{ for cards }</div>
        </section>
    }
}

#[function_component(ScienceSection)]
fn science_section() -> Html {
    let expanded = use_state(|| None::<&'static str>);

    let cards = FEATURE_BLOCKS.iter().map(|block| {
        let is_expanded = *expanded == Some(block.title);
        let onclick = {
            let expanded = expanded.clone();
            Callback::from(move |_: MouseEvent| {
                expanded.set(if is_expanded { None } else { Some(block.title) });
            })
        };
        html! {
            <div
                key={block.title}
                class={classes!("feature-card", is_expanded.then_some("expanded"))}
                {onclick}
            >
                <div class="feature-icon">{ block.icon.render(20) }</div>
                <h3>{block.title}</h3>
                <p>{ if is_expanded { block.details } else { block.description } }</p>
                <span class="feature-toggle">
                    { if is_expanded { "Show Less" } else { "Learn More" } }
                    { Icon::ChevronRight.render(12) }
                </span>
            </div>
        }
    });

    html! {
        <section class="science-section">
            <div class="section-heading">
                <h2>{"The Science Behind The Scroll"}</h2>
                <p>{"We combine performance marketing psychology with platform-native storytelling."}</p>
            </div>
            <div class="feature-grid">{ for cards }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    value: u32,
    #[prop_or_default]
    suffix: AttrValue,
}

/// One 30ms animation tick: the step is 1/50th of the target, so the count-up
/// finishes in about a second and a half. `done` flags when the timer must
/// stop.
fn counter_tick(current: u32, target: u32) -> (u32, bool) {
    let step = (target / 50).max(1);
    let next = (current + step).min(target);
    (next, next == target)
}

/// Count-up stat that starts only once scrolled into view, then sticks at
/// its target. The interval cancels itself on the tick that hits the target.
#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible_once(node.clone(), -100);
    let display = use_state(|| 0u32);
    let timer = use_mut_ref(|| None::<Interval>);

    {
        let display = display.clone();
        let target = props.value;
        let timer = timer.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    let mut current = 0u32;
                    let tick_timer = timer.clone();
                    *timer.borrow_mut() = Some(Interval::new(30, move || {
                        let (next, done) = counter_tick(current, target);
                        current = next;
                        display.set(next);
                        if done {
                            tick_timer.borrow_mut().take();
                        }
                    }));
                }
                move || {
                    timer.borrow_mut().take();
                }
            },
            visible,
        );
    }

    html! { <span ref={node}>{ *display }{ props.suffix.to_string() }</span> }
}

#[function_component(ProvenResults)]
fn proven_results() -> Html {
    html! {
        <section class="results-section">
            <div class="section-heading">
                <h2>{"Proven Results"}</h2>
                <p>{"Strategic creatives that drive measurable performance growth."}</p>
            </div>
            <div class="results-showcase">
                <div class="showcase-badge">
                    { Icon::Sparkles.render(12) }
                    <span>{"Performance Proof"}</span>
                </div>
                <img
                    src="https://picsum.photos/seed/studio-results/1920/1080"
                    alt="Performance results collage"
                    loading="lazy"
                />
            </div>
            <div class="stat-grid">
                <div class="stat-card stat-teal">
                    <div class="stat-value"><Counter value={120} suffix="%" /></div>
                    <div class="stat-label">{"ROAS Increase"}</div>
                    <p>{"Average increase in Return on Ad Spend for our long-term partners using our performance-tested framework."}</p>
                </div>
                <div class="stat-card">
                    <div class="stat-value"><Counter value={15} suffix="M+" /></div>
                    <div class="stat-label">{"Views Generated"}</div>
                    <p>{"Total organic and paid views across client campaigns this year using our creatives."}</p>
                </div>
                <div class="stat-card">
                    <div class="stat-value"><Counter value={50} suffix="+" /></div>
                    <div class="stat-label">{"Brands Scaled"}</div>
                    <p>{"Successful partnerships with brands across 12+ different high-converting niches."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    // Doubled for the looping marquee, same as the carousel.
    let cards = TESTIMONIALS
        .iter()
        .chain(TESTIMONIALS.iter())
        .enumerate()
        .map(|(idx, t)| {
            html! {
                <div class="testimonial-card" key={format!("{}-{idx}", t.id)}>
                    <div class="stars">
                        { for (0..5).map(|_| Icon::Star.render(14)) }
                    </div>
                    <p class="testimonial-quote">{format!("\"{}\"", t.content)}</p>
                    <div class="testimonial-meta">
                        <img src={t.avatar} alt={t.name} loading="lazy" />
                        <div>
                            <div class="testimonial-name">{t.name}</div>
                            <div class="testimonial-role">{format!("{} @ {}", t.role, t.company)}</div>
                        </div>
                        <span class="testimonial-stat">{t.stats}</span>
                    </div>
                </div>
            }
        });

    html! {
        <section class="testimonial-section">
            <div class="section-heading">
                <h2>{"Client Success Stories"}</h2>
                <p>{"Real results from brands scaling with our performance creatives."}</p>
            </div>
            <div class="marquee-viewport">
                <div class="marquee-track">{ for cards }</div>
            </div>
        </section>
    }
}

#[function_component(BrandShowcase)]
fn brand_showcase() -> Html {
    html! {
        <section class="showcase-section">
            <div class="section-heading">
                <h2>{"Creative Showcase"}</h2>
                <p>{"A preview of high-performing visual assets engineered for conversion."}</p>
            </div>
            <div class="results-showcase">
                <div class="showcase-badge">
                    { Icon::Sparkles.render(12) }
                    <span>{"Creative Preview"}</span>
                </div>
                <img
                    src="https://picsum.photos/seed/studio-showcase/1920/1080"
                    alt="Creative brand showcase"
                    loading="lazy"
                />
            </div>
        </section>
    }
}

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Discovery Call", "We analyze your product, audience psychology, and performance goals."),
    ("02", "Strategy & Script", "We build scroll-stopping hooks, angles, and conversion-focused scripts."),
    ("03", "Production & Launch", "We produce, edit, test, and deliver creatives optimized for scaling."),
];

#[function_component(ProcessSteps)]
fn process_steps() -> Html {
    html! {
        <section id="process" class="process-section">
            <div class="section-heading">
                <h2>{"How We Build Winners"}</h2>
            </div>
            <div class="process-grid">
                { for PROCESS_STEPS.iter().map(|(num, title, desc)| html! {
                    <div class="process-step" key={*num}>
                        <div class="process-num"><span class="gradient-text">{num}</span></div>
                        <h3>{title}</h3>
                        <p>{desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PricingSectionProps {
    on_start_project: Callback<Option<String>>,
}

#[function_component(PricingSection)]
fn pricing_section(props: &PricingSectionProps) -> Html {
    let selected = use_state(|| None::<&'static str>);

    let cards = PRICING_PLANS.iter().map(|plan| {
        let is_selected = *selected == Some(plan.name);
        let select_card = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(plan.name)))
        };
        let start = {
            let on_start = props.on_start_project.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_start.emit(Some(plan.name.to_string()));
            })
        };
        html! {
            <div
                key={plan.name}
                class={classes!(
                    "pricing-card",
                    is_selected.then_some("selected"),
                    plan.popular.then_some("popular"),
                )}
                onclick={select_card}
            >
                {
                    if plan.popular {
                        html! { <div class="popular-tag">{"Most Popular"}</div> }
                    } else {
                        html! {}
                    }
                }
                <h3>{plan.name}</h3>
                <div class="price">
                    <span class="amount gradient-text">{plan.price}</span>
                    <span class="period">{"/pkg"}</span>
                </div>
                <p class="plan-subtitle">{plan.subtitle}</p>
                <ul class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            { Icon::CheckCircle.render(14) }
                            <span>{feature}</span>
                        </li>
                    }) }
                </ul>
                <button class="button button-primary" onclick={start}>
                    { if is_selected { "Selected" } else { "Start Project" } }
                </button>
            </div>
        }
    });

    html! {
        <section id="services" class="pricing-section">
            <div class="section-heading">
                <h2>{"Services & Packages"}</h2>
                <p>{"Scalable creative solutions tailored for growth-focused brands."}</p>
            </div>
            <div class="pricing-grid">{ for cards }</div>
        </section>
    }
}

#[function_component(BigCta)]
fn big_cta(props: &StartProjectProps) -> Html {
    html! {
        <section class="big-cta">
            <h2>
                {"Ready to Scale With "}
                <span class="gradient-text">{"Scroll-Stopping"}</span>
                {" Creative?"}
            </h2>
            <p>{"Book your strategy call and let's build ads that convert."}</p>
            <button class="button button-gradient" onclick={props.on_start_project.clone()}>
                {"Start Your Project Now"}
                { Icon::ArrowRight.render(20) }
            </button>
        </section>
    }
}

const CONTACT_LINKS: &[(Icon, &str, &str, &str)] = &[
    (Icon::Mail, "Email Us", "hello@addycreative.studio", "mailto:hello@addycreative.studio"),
    (Icon::Instagram, "Instagram", "@addy_ugc_creative_", "https://www.instagram.com/addy_ugc_creative_"),
    (Icon::MessageSquare, "WhatsApp", "Chat with us", "https://wa.me/qr/ALMKIEKM6SOGO1"),
];

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let draft = use_state(ContactMessage::default);
    let status = use_state(|| SubmitStatus::Idle);

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            status.set(SubmitStatus::Submitting);
            let payload = (*draft).clone();
            let draft = draft.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = lead::submit(&payload, FailurePolicy::Surface).await;
                if outcome == SubmitStatus::Success {
                    draft.set(ContactMessage::default());
                }
                status.set(outcome);
            });
        })
    };

    let form = if *status == SubmitStatus::Success {
        let reset = {
            let status = status.clone();
            Callback::from(move |_: MouseEvent| status.set(SubmitStatus::Idle))
        };
        html! {
            <div class="contact-success">
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                <button class="link-button" onclick={reset}>{"Send another message"}</button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Name"}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="John Doe"
                            value={draft.name.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ContactMessage { name: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Email"}</label>
                        <input
                            type="email"
                            required=true
                            placeholder="john@brand.com"
                            value={draft.email.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ContactMessage { email: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Brand Name"}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="Your Brand"
                            value={draft.brand.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ContactMessage { brand: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Project Budget"}</label>
                        <select
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    draft.set(ContactMessage { budget: select.value(), ..(*draft).clone() });
                                }
                            }}
                        >
                            { for BUDGET_TIERS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={draft.budget == *value}>{label}</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label>{"Select Service"}</label>
                    <select
                        onchange={{
                            let draft = draft.clone();
                            move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                draft.set(ContactMessage { service: select.value(), ..(*draft).clone() });
                            }
                        }}
                    >
                        { for SERVICES.iter().map(|service| html! {
                            <option value={*service} selected={draft.service == *service}>{service}</option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label>{"Message"}</label>
                    <textarea
                        rows="3"
                        required=true
                        placeholder="Tell us about your goals..."
                        value={draft.contact_message.clone()}
                        onchange={{
                            let draft = draft.clone();
                            move |e: Event| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                draft.set(ContactMessage { contact_message: area.value(), ..(*draft).clone() });
                            }
                        }}
                    />
                </div>
                <button
                    type="submit"
                    class="button button-primary"
                    disabled={*status == SubmitStatus::Submitting}
                >
                    { if *status == SubmitStatus::Submitting { "Sending..." } else { "Start Project" } }
                </button>
                {
                    if *status == SubmitStatus::Error {
                        html! {
                            <p class="form-error">{"Something went wrong. Please try again or email us directly."}</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        }
    };

    html! {
        <section class="contact-section">
            <div class="contact-intro">
                <h2>{"Let's Build Your Next Winning Creative."}</h2>
                <p>
                    {"We help modern e-commerce brands scale with performance-driven creatives \
                      engineered for conversions, authority, and growth."}
                </p>
                <div class="contact-links">
                    { for CONTACT_LINKS.iter().map(|(icon, label, value, href)| html! {
                        <a key={*label} href={*href} target="_blank" rel="noopener noreferrer" class="contact-link">
                            <span class="contact-link-icon">{ icon.render(24) }</span>
                            <span>
                                <span class="contact-link-label">{label}</span>
                                <span class="contact-link-value">{value}</span>
                            </span>
                        </a>
                    }) }
                </div>
            </div>
            <div class="contact-card">{ form }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_about: Callback<()>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let nav_items = [
        ("Work", "work"),
        ("Services", "services"),
        ("About", ""),
        ("Process", "process"),
    ];

    let links = nav_items.map(|(label, section)| {
        let onclick = if label == "About" {
            let on_about = props.on_about.clone();
            Callback::from(move |_: MouseEvent| on_about.emit(()))
        } else {
            Callback::from(move |_: MouseEvent| scroll_to_section(section))
        };
        html! {
            <li key={label}>
                <button class="link-button" {onclick}>{label}</button>
            </li>
        }
    });

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="gradient-text">{"Addy"}</span>
                        {" UGC Creative"}
                    </div>
                    <p>
                        {"Performance-driven creative studio for modern e-commerce brands. \
                          We engineer ads that convert, scale, and dominate attention."}
                    </p>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <ul class="footer-nav">{ for links }</ul>
                </div>
                <div>
                    <h4>{"Social"}</h4>
                    <div class="footer-social">
                        { for CONTACT_LINKS.iter().map(|(icon, label, _, href)| html! {
                            <a key={*label} href={*href} target="_blank" rel="noopener noreferrer">
                                { icon.render(20) }
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2026 Addy UGC Creative. All rights reserved."}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::counter_tick;

    #[test]
    fn count_up_reaches_its_target_and_signals_done() {
        for target in [1, 15, 50, 120] {
            let mut current = 0;
            let mut ticks = 0;
            loop {
                let (next, done) = counter_tick(current, target);
                assert!(next > current, "tick stalled at {current} of {target}");
                current = next;
                ticks += 1;
                if done {
                    break;
                }
                assert!(ticks <= target, "runaway ticker for target {target}");
            }
            assert_eq!(current, target);
        }
    }

    #[test]
    fn a_tick_at_the_target_stays_there_and_is_done() {
        let (next, done) = counter_tick(120, 120);
        assert_eq!(next, 120);
        assert!(done);
    }
}
