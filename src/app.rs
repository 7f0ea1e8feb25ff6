use dioxus::prelude::*;

use crate::context::get_launch;
use crate::pages::CardPage;
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the card content, launch settings and the live
/// session to the card page.
#[component]
pub fn App() -> Element {
    let palette = palette_css();

    let Some(launch) = get_launch() else {
        tracing::error!("Card launched without content");
        return rsx! {
            style { {palette} }
            style { {GLOBAL_STYLES} }
            main { class: "card-unavailable", "This card could not be opened." }
        };
    };

    let session = use_signal(|| launch.session.clone());

    use_context_provider(|| launch.content.clone());
    use_context_provider(|| launch.config.clone());
    use_context_provider(|| session);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        CardPage {}
    }
}
