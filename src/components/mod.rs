//! UI Components for Keepsake.
//!
//! Card-specific components; generic primitives live in `keepsake-ui`.

mod celebration_banner;
mod gift_reveal;
mod photo_gallery;
mod section_card;
mod signatures;
mod timers;

pub use celebration_banner::CelebrationBanner;
pub use gift_reveal::GiftReveal;
pub use photo_gallery::PhotoGallery;
pub use section_card::SectionCard;
pub use signatures::Signatures;
pub use timers::expire_after;
