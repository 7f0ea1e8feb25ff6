//! Keepsake Core Library
//!
//! State machines and effect generators behind the Mother's Day card.
//!
//! ## Overview
//!
//! The card is a short sequence of message sections with a photo gallery,
//! a gift box and a few decorative effects. Everything here is plain owned
//! state with synchronous transitions; the UI crate drives it from click
//! handlers and one-shot timers.
//!
//! - [`Walker`]: which section is showing, and the finale celebration
//! - [`Gallery`]: photo paging, swipe gestures, filter and view mode
//! - [`effects`]: particle generators, the gift box and ticketed effect slots
//! - [`CardSession`]: all of the above for one open card
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepsake_core::{CardConfig, CardContent, CardSession};
//!
//! let content = CardContent::builtin()?;
//! let mut session = CardSession::new(&content, &CardConfig::default())?;
//!
//! let change = session.next_section();
//! if let Some(ticket) = change.confetti {
//!     // after the confetti lifetime:
//!     session.expire_confetti(ticket);
//! }
//! ```

pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod session;
pub mod walker;

// Re-exports
pub use config::CardConfig;
pub use content::{CardContent, Photo, Section, SectionWidget};
pub use effects::{EffectSlot, EffectTicket, GiftBox, Particle, ParticleKind};
pub use error::{CardError, CardResult};
pub use gallery::{
    swipe_direction, timeline_order, Direction, Gallery, PhotoFilter, ViewMode,
    SWIPE_CONFIDENCE_THRESHOLD,
};
pub use session::{CardSession, SectionChange};
pub use walker::{EndPolicy, Step, Walker};
