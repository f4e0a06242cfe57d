use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::video_player::VideoPlayer;
use crate::content::PortfolioNiche;
use crate::state::ActiveVideo;

const TAGS: &[&str] = &["Performance Tested", "UGC Strategy", "Direct Response"];

#[derive(Properties, PartialEq)]
pub struct NicheDetailProps {
    pub niche: &'static PortfolioNiche,
    pub on_back: Callback<()>,
    pub on_expand_video: Callback<ActiveVideo>,
    pub on_start_project: Callback<Option<String>>,
}

/// Case-study screen for one portfolio niche: the first four video slots
/// plus a closing call to action.
#[function_component(NicheDetail)]
pub fn niche_detail(props: &NicheDetailProps) -> Html {
    // Fresh screen, start at the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.niche.id,
    );

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let start = {
        let on_start = props.on_start_project.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(None))
    };

    let niche = props.niche;
    let slots = niche.videos.iter().take(4).map(|video| {
        // Slots without a published video fall back to their static cover.
        let body = match video.source {
            Some(source) => html! {
                <VideoPlayer
                    source={AttrValue::from(source)}
                    title={video.title}
                    on_expand={props.on_expand_video.clone()}
                />
            },
            None => html! {
                <div class="detail-cover">
                    <img src={video.cover} alt={video.title} loading="lazy" />
                    <span class="detail-cover-label">{video.title}</span>
                </div>
            },
        };
        html! {
            <div class="detail-slot" key={video.id}>{ body }</div>
        }
    });

    html! {
        <main class="niche-detail">
            <button class="back-button" onclick={back}>
                { Icon::ArrowLeft.render(16) }
                {"Back to Portfolio"}
            </button>

            <div class="detail-grid">
                <div class="detail-intro">
                    <span class="eyebrow gradient-text">{niche.category}</span>
                    <h1>{niche.title}</h1>
                    <p>{niche.description}</p>
                    <div class="detail-tags">
                        { for TAGS.iter().map(|tag| html! {
                            <span class="tag" key={*tag}>{tag}</span>
                        }) }
                    </div>
                </div>
                <div class="detail-videos">{ for slots }</div>
            </div>

            <div class="detail-cta">
                <h2>
                    {"Ready to scale your "}
                    <span class="gradient-text">{niche.title.to_lowercase()}</span>
                    {" brand?"}
                </h2>
                <button class="button button-gradient" onclick={start}>
                    {"Book Strategy Call"}
                </button>
            </div>
        </main>
    }
}
