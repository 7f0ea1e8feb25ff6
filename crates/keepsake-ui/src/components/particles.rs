//! Particle Layers
//!
//! Turn generated particles into absolutely positioned spans. Each span only
//! carries its own parameters; the falling, floating and bursting motion is
//! done by the `confetti-fall`, `float-up` and `sparkle-burst` keyframes.

use dioxus::prelude::*;
use keepsake_core::{Particle, ParticleKind};

/// Properties shared by the particle layers
#[derive(Clone, PartialEq, Props)]
pub struct ParticleLayerProps {
    /// Particles to render; an empty list renders nothing
    pub particles: Vec<Particle>,
}

/// Floating hearts behind the whole card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HeartLayer { particles: session.read().hearts().to_vec() }
/// }
/// ```
#[component]
pub fn HeartLayer(props: ParticleLayerProps) -> Element {
    rsx! {
        div {
            class: "heart-layer",
            "aria-hidden": "true",
            for (index, heart) in props.particles.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "floating-heart",
                    style: particle_style(heart),
                    "\u{2665}"
                }
            }
        }
    }
}

/// Full-window confetti burst
#[component]
pub fn ConfettiLayer(props: ParticleLayerProps) -> Element {
    if props.particles.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "confetti-layer",
            "aria-hidden": "true",
            for (index, piece) in props.particles.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "confetti-piece",
                    style: particle_style(piece),
                }
            }
        }
    }
}

/// Radial sparkle burst centred on its parent
#[component]
pub fn SparkleBurst(props: ParticleLayerProps) -> Element {
    if props.particles.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "sparkle-burst",
            "aria-hidden": "true",
            for (index, sparkle) in props.particles.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "sparkle",
                    style: particle_style(sparkle),
                }
            }
        }
    }
}

/// Inline style for one particle.
pub fn particle_style(p: &Particle) -> String {
    match p.kind {
        ParticleKind::Heart => format!(
            "left: {:.2}%; color: {}; font-size: {:.2}rem; animation-delay: {}ms; opacity: 0.7;",
            p.x, p.color, p.size, p.delay_ms
        ),
        ParticleKind::Confetti => format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
             animation-delay: {}ms; --spin: {:.0}deg;",
            p.x,
            p.y,
            p.size,
            p.size * 0.4,
            p.color,
            p.delay_ms,
            p.rotation
        ),
        ParticleKind::Sparkle => format!(
            "width: {:.1}px; height: {:.1}px; background: {}; animation-delay: {}ms; \
             --dx: {:.1}px; --dy: {:.1}px;",
            p.size, p.size, p.color, p.delay_ms, p.x, p.y
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::effects::{confetti, hearts, sparkles};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heart_style_uses_percent_and_rem() {
        let mut rng = StdRng::seed_from_u64(1);
        let heart = &hearts(&mut rng, 1)[0];
        let style = particle_style(heart);
        assert!(style.starts_with("left: "));
        assert!(style.contains("rem;"));
        assert!(style.contains("color: #FFB6C1;"));
    }

    #[test]
    fn confetti_style_carries_spin() {
        let mut rng = StdRng::seed_from_u64(1);
        let piece = &confetti(&mut rng, 1)[0];
        let style = particle_style(piece);
        assert!(style.contains("--spin: "));
        assert!(style.contains(&format!("background: {};", piece.color)));
    }

    #[test]
    fn sparkle_style_carries_offsets() {
        let mut rng = StdRng::seed_from_u64(1);
        let sparkle = &sparkles(&mut rng, 1)[0];
        let style = particle_style(sparkle);
        assert!(style.contains("--dx: "));
        assert!(style.contains("--dy: "));
    }
}
