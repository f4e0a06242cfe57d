use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-way visibility latch shared by every lazy slot. Returns `false` until
/// the referenced element first enters the viewport (expanded by
/// `margin_px`), then `true` for the rest of the component's life. The
/// observer is disconnected as soon as the latch flips, and on unmount.
#[hook]
pub fn use_visible_once(node: NodeRef, margin_px: i32) -> bool {
    let visible = use_state(|| false);
    let seen = *visible;
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, seen)| {
                let mut registration = None;
                if !*seen {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let callback = Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry
                                        .dyn_ref::<IntersectionObserverEntry>()
                                        .map_or(false, |e| e.is_intersecting())
                                });
                                if intersecting {
                                    visible.set(true);
                                    observer.disconnect();
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                        let mut options = IntersectionObserverInit::new();
                        options.root_margin(&format!("{margin_px}px"));
                        options.threshold(&JsValue::from_f64(0.01));

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&element);
                            registration = Some((observer, callback));
                        }
                    }
                }
                move || {
                    if let Some((observer, _callback)) = registration {
                        observer.disconnect();
                    }
                }
            },
            (node, seen),
        );
    }
    seen
}
