//! Card context provider for Keepsake.
//!
//! Provides the card content, launch settings and the live session to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! let change = session.write().next_section();
//! ```

use dioxus::prelude::*;
use keepsake_core::{CardConfig, CardContent, CardSession};

/// Everything the window needs, prepared before launch.
#[derive(Debug, Clone)]
pub struct Launch {
    pub content: CardContent,
    pub config: CardConfig,
    /// Initial session; each mounted card starts from a clone of it
    pub session: CardSession,
}

/// Get the launch state.
pub fn get_launch() -> Option<&'static Launch> {
    crate::get_launch()
}

/// Hook to access the card content from context.
pub fn use_content() -> CardContent {
    use_context::<CardContent>()
}

/// Hook to access the launch settings from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to access the live card session.
///
/// Returns a Signal so handlers can `write()` transitions and renders
/// re-run when they do.
pub fn use_session() -> Signal<CardSession> {
    use_context::<Signal<CardSession>>()
}
