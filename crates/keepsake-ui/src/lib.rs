//! Keepsake UI Components
//!
//! Dioxus primitives for the Mother's Day card, styled by the global
//! stylesheet of the desktop app.
//!
//! ## Palette
//!
//! - **Hot pink (#FF69B4)**: titles, active controls, timeline line
//! - **Deep pink (#FF1493)**: hover and pressed states
//! - **Lavender blush (#FFF0F5)**: page background
//!
//! Motion lives in CSS keyframes; components only emit the per-particle
//! inline parameters (position, size, colour, delay).

pub mod components;

pub use components::*;
