use dioxus::prelude::*;
use starfolio_ui::use_page_provider;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page state context.
#[component]
pub fn App() -> Element {
    let settings = crate::settings();
    use_page_provider(settings.config, settings.force_reduced_motion);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
