//! Section Card Component
//!
//! One message section: title in the section accent colour, body text and
//! the optional embedded widget.

use dioxus::prelude::*;
use keepsake_core::{Section, SectionWidget};

use crate::components::{GiftReveal, PhotoGallery, Signatures};

/// Renders the section currently shown by the walker
///
/// Keyed by section index at the call site so every section mounts fresh
/// and replays the `section-enter` animation.
#[component]
pub fn SectionCard(
    /// The section to render
    section: Section,
    /// Position of the section in the card
    index: usize,
) -> Element {
    let accent = section.accent_color.clone();
    let widget = match section.widget.clone() {
        Some(SectionWidget::PhotoGallery) => rsx! { PhotoGallery {} },
        Some(SectionWidget::GiftBox) => rsx! { GiftReveal {} },
        Some(SectionWidget::Signatures { names }) => rsx! { Signatures { names: names } },
        None => VNode::empty(),
    };

    rsx! {
        article {
            class: "section-card",
            "data-section": "{index}",
            style: "--accent: {accent};",

            h2 { class: "section-title", "{section.title}" }

            if !section.body.is_empty() {
                p { class: "section-body", "{section.body}" }
            }

            {widget}
        }
    }
}
