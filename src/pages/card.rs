//! Card page - the whole greeting card.
//!
//! Floating hearts in the background, the current message section in the
//! middle, progress dots and the "next" control below it. Confetti and the
//! celebration banner float above everything while they are active.

use dioxus::prelude::*;
use keepsake_core::{EndPolicy, Walker};
use keepsake_ui::{Button, ButtonVariant, ConfettiLayer, HeartLayer, ProgressDots};

use crate::components::{expire_after, CelebrationBanner, SectionCard};
use crate::context::{use_card_config, use_content, use_session};

/// How the button under the section looks for a given walker position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NextControl {
    label: &'static str,
    variant: ButtonVariant,
    disabled: bool,
}

impl NextControl {
    fn for_walker(walker: &Walker) -> Self {
        match (walker.is_last(), walker.policy()) {
            (true, EndPolicy::Wrap) => Self {
                label: "Start Over",
                variant: ButtonVariant::Ghost,
                disabled: false,
            },
            (is_last, _) => Self {
                label: "Next",
                variant: ButtonVariant::Next,
                disabled: is_last,
            },
        }
    }
}

/// Card page component.
///
/// Bursts the opening confetti on mount (unless disabled at launch) and
/// walks the sections on "next".
#[component]
pub fn CardPage() -> Element {
    let content = use_content();
    let config = use_card_config();
    let mut session = use_session();

    let confetti_lifetime = config.confetti_duration();
    let banner_lifetime = config.banner_duration();
    let opening_confetti = config.opening_confetti;

    // Opening confetti, once per mount
    use_effect(move || {
        if opening_confetti {
            let ticket = session.write().burst_confetti();
            expire_after(confetti_lifetime, move || {
                session.write().expire_confetti(ticket);
            });
        }
    });

    let next_section = move |_| {
        let change = session.write().next_section();
        if let Some(ticket) = change.confetti {
            expire_after(confetti_lifetime, move || {
                session.write().expire_confetti(ticket);
            });
        }
        if let Some(ticket) = change.banner {
            expire_after(banner_lifetime, move || {
                session.write().expire_banner(ticket);
            });
        }
    };

    let (current, control, hearts, confetti, banner_visible) = {
        let s = session.read();
        let walker = s.walker();
        (
            walker.current(),
            NextControl::for_walker(walker),
            s.hearts().to_vec(),
            s.confetti().to_vec(),
            s.banner_visible(),
        )
    };

    let Some(section) = content.sections.get(current).cloned() else {
        return VNode::empty();
    };
    let accents: Vec<String> = content
        .sections
        .iter()
        .map(|s| s.accent_color.clone())
        .collect();
    rsx! {
        main { class: "card-page",
            HeartLayer { particles: hearts }

            div { class: "card-container",
                header { class: "card-header",
                    h1 { class: "card-title", "{content.title}" }
                }

                SectionCard { key: "{current}", section: section, index: current }

                footer { class: "card-footer",
                    ProgressDots { current: current, colors: accents }

                    Button {
                        variant: control.variant,
                        disabled: control.disabled,
                        onclick: next_section,
                        "{control.label}"
                    }
                }
            }

            if banner_visible {
                CelebrationBanner { title: content.title.clone() }
            }

            ConfettiLayer { particles: confetti }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_control_walks_then_disables_at_end() {
        let mut walker = Walker::new(2, EndPolicy::Halt).unwrap();
        let first = NextControl::for_walker(&walker);
        assert_eq!(first.label, "Next");
        assert_eq!(first.variant, ButtonVariant::Next);
        assert!(!first.disabled);

        walker.advance();
        let last = NextControl::for_walker(&walker);
        assert_eq!(last.label, "Next");
        assert!(last.disabled);
    }

    #[test]
    fn next_control_offers_start_over_when_wrapping() {
        let mut walker = Walker::new(2, EndPolicy::Wrap).unwrap();
        walker.advance();
        let last = NextControl::for_walker(&walker);
        assert_eq!(last.label, "Start Over");
        assert_eq!(last.variant, ButtonVariant::Ghost);
        assert!(!last.disabled);
    }
}
