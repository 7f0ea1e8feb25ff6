//! Color constants for the card palette.
//!
//! Soft pinks on a lavender-blush page.

// === PINKS (Titles, Accents) ===
pub const HOT_PINK: &str = "#FF69B4";
pub const DEEP_PINK: &str = "#FF1493";
pub const LIGHT_PINK: &str = "#FFB6C1";
pub const PINK: &str = "#FFC0CB";
pub const PINK_GLOW: &str = "rgba(255, 105, 180, 0.2)";

// === BACKGROUNDS ===
pub const LAVENDER_BLUSH: &str = "#FFF0F5";
pub const MISTY_ROSE: &str = "#FFE4E1";
pub const CARD_SURFACE: &str = "rgba(255, 255, 255, 0.8)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#4a2c3a";
pub const TEXT_MUTED: &str = "#666666";

// === SPARKLE ===
pub const GOLD: &str = "#FFD700";
