//! Pill Group Component
//!
//! Horizontal row of mutually exclusive pills, used for the photo filter
//! and the carousel/timeline switch.

use dioxus::prelude::*;

/// Properties for the PillGroup component
#[derive(Clone, PartialEq, Props)]
pub struct PillGroupProps {
    /// Pill labels, in display order
    pub labels: Vec<String>,
    /// Index of the selected pill
    pub selected: usize,
    /// Handler called with the index of the clicked pill
    pub on_select: EventHandler<usize>,
    /// Accessible name of the group
    pub aria_label: String,
}

/// Displays a row of selectable pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PillGroup {
///         labels: PhotoFilter::all().iter().map(|f| f.label().to_string()).collect(),
///         selected: filter_index,
///         on_select: move |i| set_filter(PhotoFilter::all()[i]),
///         aria_label: "Photo filter".to_string(),
///     }
/// }
/// ```
#[component]
pub fn PillGroup(props: PillGroupProps) -> Element {
    rsx! {
        div {
            class: "pill-group",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for (index, label) in props.labels.iter().enumerate() {
                {
                    let on_select = props.on_select;
                    let is_selected = index == props.selected;
                    rsx! {
                        button {
                            key: "{label}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(index),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}
