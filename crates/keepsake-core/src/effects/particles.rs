//! Particle generators for the decorative effects.
//!
//! Every generator draws its parameters once from the supplied RNG. There is
//! no simulation step; motion is left to CSS animations.

use rand::Rng;

/// Confetti pieces per burst.
pub const CONFETTI_COUNT: usize = 120;
/// Background hearts.
pub const HEART_COUNT: usize = 30;
/// Sparkles in a gift-box burst.
pub const SPARKLE_COUNT: usize = 18;

/// Confetti palette: the card's pinks plus a few accents.
pub const CONFETTI_COLORS: &[&str] = &[
    "#FF69B4", "#FF1493", "#FFB6C1", "#FFC0CB", "#FFD700", "#DA70D6", "#87CEFA",
];
/// Alternating heart colours.
pub const HEART_COLORS: [&str; 2] = ["#FFB6C1", "#FFC0CB"];
/// Sparkle palette.
pub const SPARKLE_COLORS: &[&str] = &["#FFD700", "#FFF8DC", "#FF69B4", "#FFFFFF"];

/// Which effect a particle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Confetti,
    Heart,
    Sparkle,
}

/// One decorative particle.
///
/// Positions are percentages of the containing box. For sparkles, `x`/`y`
/// are the end offset of the burst relative to its centre, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f32,
    pub y: f32,
    /// Size in the unit that suits the kind: px for confetti and sparkles,
    /// rem for hearts.
    pub size: f32,
    pub color: &'static str,
    pub delay_ms: u32,
    /// Degrees; confetti spin start, zero elsewhere
    pub rotation: f32,
}

/// A burst of confetti falling from above the top edge.
pub fn confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            kind: ParticleKind::Confetti,
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(-20.0..0.0),
            size: rng.random_range(6.0..12.0),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            delay_ms: rng.random_range(0..1500),
            rotation: rng.random_range(0.0..360.0),
        })
        .collect()
}

/// Hearts rising through the background, alternating two soft pinks.
pub fn hearts<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            kind: ParticleKind::Heart,
            x: rng.random_range(0.0..100.0),
            y: 100.0,
            size: rng.random_range(1.5..3.0),
            color: HEART_COLORS[i % 2],
            delay_ms: rng.random_range(0..4000),
            rotation: 0.0,
        })
        .collect()
}

/// A radial burst: evenly spaced angles with some jitter, random reach.
pub fn sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    let step = std::f32::consts::TAU / count.max(1) as f32;
    (0..count)
        .map(|i| {
            let angle = step * i as f32 + rng.random_range(-0.2..0.2);
            let distance = rng.random_range(60.0..140.0);
            Particle {
                kind: ParticleKind::Sparkle,
                x: angle.cos() * distance,
                y: angle.sin() * distance,
                size: rng.random_range(4.0..10.0),
                color: SPARKLE_COLORS[rng.random_range(0..SPARKLE_COLORS.len())],
                delay_ms: rng.random_range(0..200),
                rotation: 0.0,
            }
        })
        .collect()
}
