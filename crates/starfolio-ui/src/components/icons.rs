//! Inline Lucide icons.

use dioxus::prelude::*;

/// Lucide icon names used on the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
    ExternalLink,
}

impl IconKind {
    /// Map a Lucide name (as produced by `MobileMenu::icon`) to an icon.
    pub fn from_lucide(name: &str) -> Option<Self> {
        match name {
            "menu" => Some(IconKind::Menu),
            "x" => Some(IconKind::Close),
            "chevron-left" => Some(IconKind::ChevronLeft),
            "chevron-right" => Some(IconKind::ChevronRight),
            "external-link" => Some(IconKind::ExternalLink),
            _ => None,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {match kind {
                IconKind::Menu => rsx! {
                    line { x1: "4", x2: "20", y1: "12", y2: "12" }
                    line { x1: "4", x2: "20", y1: "6", y2: "6" }
                    line { x1: "4", x2: "20", y1: "18", y2: "18" }
                },
                IconKind::Close => rsx! {
                    path { d: "M18 6 6 18" }
                    path { d: "m6 6 12 12" }
                },
                IconKind::ChevronLeft => rsx! {
                    path { d: "m15 18-6-6 6-6" }
                },
                IconKind::ChevronRight => rsx! {
                    path { d: "m9 18 6-6-6-6" }
                },
                IconKind::ExternalLink => rsx! {
                    path { d: "M15 3h6v6" }
                    path { d: "M10 14 21 3" }
                    path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lucide_names() {
        assert_eq!(IconKind::from_lucide("x"), Some(IconKind::Close));
        assert_eq!(IconKind::from_lucide("menu"), Some(IconKind::Menu));
        assert_eq!(IconKind::from_lucide("rocket"), None);
    }
}
