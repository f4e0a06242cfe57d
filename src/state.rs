use std::rc::Rc;

use yew::prelude::*;

use crate::content::PortfolioNiche;

/// A video the lightbox should play, carrying the raw source URL so the
/// overlay can resolve its own embed address.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveVideo {
    pub url: String,
    pub title: String,
}

/// The single active screen. Exactly one variant is current at any time.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home,
    About,
    ProjectForm { plan: Option<String> },
    Niche(&'static PortfolioNiche),
}

/// Whole-app UI state: the current screen plus the optional video lightbox
/// layered over it. The two halves are independent; no view transition
/// touches the overlay and closing the overlay never changes the view.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub view: View,
    pub overlay: Option<ActiveVideo>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Home,
            overlay: None,
        }
    }
}

pub enum Action {
    GoHome,
    GoAbout,
    StartProject(Option<String>),
    SelectNiche(&'static PortfolioNiche),
    ExpandVideo(ActiveVideo),
    CloseVideo,
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let next = match action {
            Action::GoHome => Self {
                view: View::Home,
                overlay: self.overlay.clone(),
            },
            Action::GoAbout => Self {
                view: View::About,
                overlay: self.overlay.clone(),
            },
            Action::StartProject(plan) => Self {
                view: View::ProjectForm { plan },
                overlay: self.overlay.clone(),
            },
            Action::SelectNiche(niche) => Self {
                view: View::Niche(niche),
                overlay: self.overlay.clone(),
            },
            Action::ExpandVideo(video) => Self {
                view: self.view.clone(),
                overlay: Some(video),
            },
            Action::CloseVideo => Self {
                view: self.view.clone(),
                overlay: None,
            },
        };
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO_NICHES;

    fn reduce(state: AppState, action: Action) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_on_home_with_no_overlay() {
        let state = AppState::default();
        assert_eq!(state.view, View::Home);
        assert_eq!(state.overlay, None);
    }

    #[test]
    fn every_screen_is_reachable_from_home_and_back() {
        let home = AppState::default();

        let about = reduce(home.clone(), Action::GoAbout);
        assert_eq!(about.view, View::About);
        assert_eq!(reduce(about, Action::GoHome).view, View::Home);

        let form = reduce(home.clone(), Action::StartProject(Some("Growth Plan".into())));
        assert_eq!(
            form.view,
            View::ProjectForm {
                plan: Some("Growth Plan".into())
            }
        );
        assert_eq!(reduce(form, Action::GoHome).view, View::Home);

        let niche = &PORTFOLIO_NICHES[0];
        let detail = reduce(home, Action::SelectNiche(niche));
        assert_eq!(detail.view, View::Niche(niche));
        assert_eq!(reduce(detail, Action::GoHome).view, View::Home);
    }

    #[test]
    fn project_form_without_plan() {
        let state = reduce(AppState::default(), Action::StartProject(None));
        assert_eq!(state.view, View::ProjectForm { plan: None });
    }

    #[test]
    fn transitions_are_idempotent() {
        let once = reduce(AppState::default(), Action::GoAbout);
        let twice = reduce(once.clone(), Action::GoAbout);
        assert_eq!(once, twice);

        let closed = reduce(AppState::default(), Action::CloseVideo);
        assert_eq!(closed, AppState::default());
    }

    #[test]
    fn overlay_survives_view_changes() {
        let video = ActiveVideo {
            url: "https://youtu.be/abcdefghijk".into(),
            title: "Hook Test".into(),
        };
        let with_overlay = reduce(AppState::default(), Action::ExpandVideo(video.clone()));
        assert_eq!(with_overlay.overlay, Some(video.clone()));

        let after_nav = reduce(with_overlay, Action::GoAbout);
        assert_eq!(after_nav.view, View::About);
        assert_eq!(after_nav.overlay, Some(video));
    }

    #[test]
    fn closing_the_overlay_keeps_the_view() {
        let niche = &PORTFOLIO_NICHES[1];
        let mut state = reduce(AppState::default(), Action::SelectNiche(niche));
        state = reduce(
            state,
            Action::ExpandVideo(ActiveVideo {
                url: "https://youtube.com/shorts/abcdefghijk".into(),
                title: "Transformation".into(),
            }),
        );
        let closed = reduce(state, Action::CloseVideo);
        assert_eq!(closed.view, View::Niche(niche));
        assert_eq!(closed.overlay, None);
    }
}
