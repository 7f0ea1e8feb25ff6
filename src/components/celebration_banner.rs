//! Celebration Banner
//!
//! Shown over the card when the last section is reached. The card page
//! removes it once the banner timer expires.

use dioxus::prelude::*;

#[component]
pub fn CelebrationBanner(title: String) -> Element {
    rsx! {
        div {
            class: "celebration-banner",
            role: "status",
            span { class: "celebration-heart", "\u{2665}" }
            span { class: "celebration-text", "{title}" }
            span { class: "celebration-heart", "\u{2665}" }
        }
    }
}
