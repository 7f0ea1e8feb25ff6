//! Page components for Keepsake.

mod card;

pub use card::CardPage;
