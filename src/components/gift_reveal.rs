//! Gift Reveal Component
//!
//! A wrapped box that pops open with a sparkle burst on the first click.
//! Further clicks do nothing; the box stays open until the card wraps.

use dioxus::prelude::*;
use keepsake_ui::SparkleBurst;

use crate::components::expire_after;
use crate::context::{use_card_config, use_session};

/// Message revealed inside the box
const GIFT_MESSAGE: &str = "A lifetime of love, and a big hug from all of us!";

#[component]
pub fn GiftReveal() -> Element {
    let config = use_card_config();
    let mut session = use_session();
    let lifetime = config.sparkle_duration();

    let (revealed, sparkles) = {
        let s = session.read();
        (s.gift().is_revealed(), s.sparkles().to_vec())
    };

    let open_gift = move |_| {
        let ticket = session.write().open_gift();
        if let Some(ticket) = ticket {
            expire_after(lifetime, move || {
                session.write().expire_sparkles(ticket);
            });
        }
    };

    rsx! {
        div { class: "gift-stage",
            button {
                class: if revealed { "gift-box opened" } else { "gift-box" },
                r#type: "button",
                "aria-label": if revealed { "Gift opened" } else { "Open the gift" },
                "aria-pressed": if revealed { "true" } else { "false" },
                onclick: open_gift,
                span { class: "gift-lid" }
                span { class: "gift-ribbon" }
                span { class: "gift-body" }
            }

            SparkleBurst { particles: sparkles }

            if revealed {
                p { class: "gift-message", "{GIFT_MESSAGE}" }
            } else {
                p { class: "gift-hint", "Click to open" }
            }
        }
    }
}
