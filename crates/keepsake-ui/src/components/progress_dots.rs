//! Progress Dots
//!
//! One dot per section; visited dots fill with the section accent colour.

use dioxus::prelude::*;

/// Renders the walker position as a row of dots
#[component]
pub fn ProgressDots(
    /// Zero-based index of the current section
    current: usize,
    /// Accent colour of each section, in order
    colors: Vec<String>,
) -> Element {
    let total = colors.len();
    let position = current + 1;

    rsx! {
        div {
            class: "progress-dots",
            role: "progressbar",
            "aria-valuemin": "1",
            "aria-valuemax": "{total}",
            "aria-valuenow": "{position}",
            for (index, color) in colors.iter().enumerate() {
                span {
                    key: "{index}",
                    class: dot_class(index, current),
                    style: dot_style(index, current, color),
                }
            }
        }
    }
}

fn dot_class(index: usize, current: usize) -> &'static str {
    if index == current {
        "progress-dot current"
    } else if index < current {
        "progress-dot visited"
    } else {
        "progress-dot"
    }
}

fn dot_style(index: usize, current: usize, color: &str) -> String {
    if index <= current {
        format!("background: {};", color)
    } else {
        String::new()
    }
}
