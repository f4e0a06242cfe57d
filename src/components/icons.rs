use yew::prelude::*;

/// Closed set of glyphs used across the site. Content tables reference these
/// variants directly, so a typo in a feature-block icon is a compile error
/// instead of a blank spot at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    FileText,
    Users,
    Scissors,
    Cpu,
    BarChart3,
    Target,
    Clock,
    ChevronRight,
    CheckCircle,
    ArrowRight,
    ArrowLeft,
    Instagram,
    Mail,
    MessageSquare,
    Close,
    Maximize,
    Star,
    Sparkles,
}

impl Icon {
    pub fn render(self, size: u32) -> Html {
        let size = size.to_string();
        match self {
            Icon::Zap => icon_svg(&size, false, &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"]),
            Icon::FileText => icon_svg(
                &size,
                false,
                &[
                    "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                    "M14 2v6h6",
                    "M16 13H8",
                    "M16 17H8",
                ],
            ),
            Icon::Users => icon_svg(
                &size,
                false,
                &[
                    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                    "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                    "M22 21v-2a4 4 0 0 0-3-3.87",
                    "M16 3.13a4 4 0 0 1 0 7.75",
                ],
            ),
            Icon::Scissors => icon_svg(
                &size,
                false,
                &[
                    "M9 6a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
                    "M9 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
                    "M20 4 8.12 15.88",
                    "M14.47 14.48 20 20",
                    "M8.12 9.12 12 13",
                ],
            ),
            Icon::Cpu => icon_svg(
                &size,
                false,
                &[
                    "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                    "M9 9h6v6H9z",
                    "M9 1v3",
                    "M15 1v3",
                    "M9 20v3",
                    "M15 20v3",
                    "M1 9h3",
                    "M1 15h3",
                    "M20 9h3",
                    "M20 15h3",
                ],
            ),
            Icon::BarChart3 => icon_svg(
                &size,
                false,
                &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            ),
            Icon::Target => icon_svg(
                &size,
                false,
                &[
                    "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                    "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                    "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
                ],
            ),
            Icon::Clock => icon_svg(
                &size,
                false,
                &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            ),
            Icon::ChevronRight => icon_svg(&size, false, &["m9 18 6-6-6-6"]),
            Icon::CheckCircle => icon_svg(
                &size,
                false,
                &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            ),
            Icon::ArrowRight => icon_svg(&size, false, &["M5 12h14", "m12 5 7 7-7 7"]),
            Icon::ArrowLeft => icon_svg(&size, false, &["M19 12H5", "m12 19-7-7 7-7"]),
            Icon::Instagram => icon_svg(
                &size,
                false,
                &[
                    "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                    "M16 11.37a4 4 0 1 1-7.914 1.173A4 4 0 0 1 16 11.37z",
                    "M17.5 6.5h.01",
                ],
            ),
            Icon::Mail => icon_svg(
                &size,
                false,
                &[
                    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                    "m22 7-10 5L2 7",
                ],
            ),
            Icon::MessageSquare => icon_svg(
                &size,
                false,
                &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            ),
            Icon::Close => icon_svg(&size, false, &["M18 6 6 18", "m6 6 12 12"]),
            Icon::Maximize => icon_svg(
                &size,
                false,
                &[
                    "M8 3H5a2 2 0 0 0-2 2v3",
                    "M21 8V5a2 2 0 0 0-2-2h-3",
                    "M3 16v3a2 2 0 0 0 2 2h3",
                    "M16 21h3a2 2 0 0 0 2-2v-3",
                ],
            ),
            Icon::Star => icon_svg(
                &size,
                true,
                &["m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"],
            ),
            Icon::Sparkles => icon_svg(
                &size,
                false,
                &[
                    "m12 3 1.9 5.8 5.8 1.9-5.8 1.9L12 18.4l-1.9-5.8-5.8-1.9 5.8-1.9z",
                    "M5 3v4",
                    "M19 17v4",
                    "M3 5h4",
                    "M17 19h4",
                ],
            ),
        }
    }
}

fn icon_svg(size: &str, filled: bool, paths: &[&str]) -> Html {
    let fill = if filled { "currentColor" } else { "none" };
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={d.to_string()} /> }) }
        </svg>
    }
}
