//! Signatures - the "From All Of Us" list of names.

use dioxus::prelude::*;

#[component]
pub fn Signatures(names: Vec<String>) -> Element {
    rsx! {
        div { class: "signatures",
            h3 { class: "signatures-from", "From:" }
            for (index, name) in names.iter().enumerate() {
                {
                    let delay_ms = index * 300;
                    rsx! {
                        p {
                            key: "{name}",
                            class: "signature",
                            style: "animation-delay: {delay_ms}ms;",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
