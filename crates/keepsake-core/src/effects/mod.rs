//! Ephemeral decorative effects: confetti, hearts, sparkles.
//!
//! ## Lifetimes
//!
//! | Effect | Count | Lifetime |
//! |--------|-------|----------|
//! | Confetti | 120 | 5 s |
//! | Floating hearts | 30 | background, never expires |
//! | Sparkle burst | 18 | 1.5 s |
//! | Celebration banner | 1 | 4 s |

mod gift;
pub mod particles;
mod timer;

pub use gift::GiftBox;
pub use particles::{confetti, hearts, sparkles, Particle, ParticleKind};
pub use timer::{EffectSlot, EffectTicket};
