use web_sys::window;
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::visibility::use_visible_once;
use crate::state::ActiveVideo;
use crate::video::{self, EmbedOptions};

/// How far outside the viewport a slot may be and still start loading.
const PRELOAD_MARGIN_PX: i32 = 600;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    /// Raw source URL; `None` or an unresolvable value renders nothing.
    #[prop_or_default]
    pub source: Option<AttrValue>,
    pub title: AttrValue,
    /// When set, the slot shows an expand button that lifts the video into
    /// the lightbox.
    #[prop_or_default]
    pub on_expand: Option<Callback<ActiveVideo>>,
}

/// Lazy embed slot. Shows the static platform thumbnail until the slot nears
/// the viewport, then swaps in a muted looping player. The swap is one-way:
/// once loaded the slot stays loaded even if it scrolls back out of view.
#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let container = use_node_ref();
    let loaded = use_visible_once(container.clone(), PRELOAD_MARGIN_PX);

    let Some(id) = props.source.as_deref().and_then(video::video_id) else {
        return html! {};
    };

    let expand_button = match props.on_expand.as_ref() {
        Some(on_expand) => {
            let on_expand = on_expand.clone();
            let url = props.source.as_deref().unwrap_or_default().to_string();
            let title = props.title.to_string();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_expand.emit(ActiveVideo {
                    url: url.clone(),
                    title: title.clone(),
                });
            });
            html! {
                <button class="video-expand" title="Expand Video" {onclick}>
                    { Icon::Maximize.render(16) }
                </button>
            }
        }
        None => html! {},
    };

    let body = if loaded {
        let referrer = window().and_then(|w| w.location().href().ok());
        html! {
            <iframe
                class="video-frame"
                src={video::embed_url(id, &EmbedOptions::inline(referrer))}
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share; fullscreen"
                allowfullscreen=true
                loading="lazy"
                title={props.title.clone()}
            />
        }
    } else {
        html! {
            <div class="video-cover">
                <img
                    src={video::thumbnail_url(id)}
                    alt={props.title.clone()}
                    loading="lazy"
                    decoding="async"
                />
                <div class="video-cover-pulse" />
            </div>
        }
    };

    html! {
        <div ref={container} class="video-slot">
            { expand_button }
            { body }
        </div>
    }
}
