use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

mod config;
mod content;
mod lead;
mod state;
mod video;

mod components {
    pub mod icons;
    pub mod video_modal;
    pub mod video_player;
    pub mod visibility;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod niche;
    pub mod project_form;
}

use components::video_modal::VideoModal;
use pages::about::About;
use pages::home::{scroll_to_section, Home};
use pages::niche::NicheDetail;
use pages::project_form::ProjectForm;
use state::{Action, AppState, View};

fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_go_home: Callback<()>,
    pub on_go_about: Callback<()>,
    pub on_start_project: Callback<()>,
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Work", "work"),
    ("Services", "services"),
    ("About", ""),
    ("Process", "process"),
];

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Section links first hop back to the home screen, then scroll once the
    // home sections exist again.
    let nav_click = |label: &'static str, section: &'static str| {
        let menu_open = menu_open.clone();
        let on_go_home = props.on_go_home.clone();
        let on_go_about = props.on_go_about.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if label == "About" {
                on_go_about.emit(());
            } else {
                on_go_home.emit(());
                Timeout::new(100, move || scroll_to_section(section)).forget();
            }
        })
    };

    let go_home = {
        let on_go_home = props.on_go_home.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_go_home.emit(());
        })
    };

    let start_project = {
        let on_start = props.on_start_project.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_start.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    <span class="gradient-text">{"Addy"}</span>
                    <span>{"UGC Creative"}</span>
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(label, section)| html! {
                        <button key={*label} class="nav-link" onclick={nav_click(label, section)}>
                            {label}
                        </button>
                    }) }
                    <button class="nav-cta" onclick={start_project}>
                        {"Start Project"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let app = use_reducer(AppState::default);

    let go_home = {
        let app = app.clone();
        Callback::from(move |_| {
            app.dispatch(Action::GoHome);
            scroll_to_top();
        })
    };
    let go_about = {
        let app = app.clone();
        Callback::from(move |_| {
            app.dispatch(Action::GoAbout);
            scroll_to_top();
        })
    };
    let start_project = {
        let app = app.clone();
        Callback::from(move |plan: Option<String>| {
            app.dispatch(Action::StartProject(plan));
            scroll_to_top();
        })
    };
    let start_project_blank = {
        let start_project = start_project.clone();
        Callback::from(move |_| start_project.emit(None))
    };
    let select_niche = {
        let app = app.clone();
        Callback::from(move |niche| app.dispatch(Action::SelectNiche(niche)))
    };
    let expand_video = {
        let app = app.clone();
        Callback::from(move |video| app.dispatch(Action::ExpandVideo(video)))
    };
    let close_video = {
        let app = app.clone();
        Callback::from(move |_| app.dispatch(Action::CloseVideo))
    };

    let page = match &app.view {
        View::Home => html! {
            <Home
                on_start_project={start_project.clone()}
                on_select_niche={select_niche}
                on_expand_video={expand_video.clone()}
                on_about={go_about.clone()}
            />
        },
        View::About => html! {
            <About on_back={go_home.clone()} />
        },
        View::ProjectForm { plan } => html! {
            <ProjectForm plan={plan.clone()} on_back={go_home.clone()} />
        },
        View::Niche(niche) => html! {
            <NicheDetail
                niche={*niche}
                on_back={go_home.clone()}
                on_expand_video={expand_video}
                on_start_project={start_project.clone()}
            />
        },
    };

    html! {
        <div class="app-shell">
            <Nav
                on_go_home={go_home}
                on_go_about={go_about}
                on_start_project={start_project_blank}
            />
            { page }
            {
                if let Some(video) = app.overlay.clone() {
                    html! { <VideoModal video={video} on_close={close_video} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
