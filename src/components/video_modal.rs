use yew::prelude::*;

use crate::components::icons::Icon;
use crate::state::ActiveVideo;
use crate::video::{self, EmbedOptions};

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub video: ActiveVideo,
    pub on_close: Callback<()>,
}

/// Fullscreen lightbox layered over whatever screen is active. Resolves its
/// own embed address from the raw URL; an unresolvable URL leaves the frame
/// empty. Closes on the backdrop or the close button.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let frame = match video::video_id(&props.video.url) {
        Some(id) => html! {
            <iframe
                class="modal-frame"
                src={video::embed_url(id, &EmbedOptions::lightbox())}
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share; fullscreen"
                allowfullscreen=true
                title={props.video.title.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <button class="modal-close" onclick={close}>
                { Icon::Close.render(24) }
            </button>
            <div class="modal-body" onclick={keep_open}>
                { frame }
            </div>
        </div>
    }
}
