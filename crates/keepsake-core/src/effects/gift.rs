//! Gift box reveal.

use rand::Rng;

use super::particles::{sparkles, Particle, SPARKLE_COUNT};

/// A gift box that opens once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftBox {
    revealed: bool,
}

impl GiftBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Open the box. Only the first click produces a sparkle burst.
    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vec<Particle>> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        tracing::info!("Gift box opened");
        Some(sparkles(rng, SPARKLE_COUNT))
    }

    /// Close the box again so it can be re-opened.
    pub fn reset(&mut self) {
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_open_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gift = GiftBox::new();
        let burst = gift.open(&mut rng).unwrap();
        assert_eq!(burst.len(), 18);
        assert!(gift.is_revealed());
        assert!(gift.open(&mut rng).is_none());
    }

    #[test]
    fn test_reset_allows_reopen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gift = GiftBox::new();
        gift.open(&mut rng);
        gift.reset();
        assert!(!gift.is_revealed());
        assert!(gift.open(&mut rng).is_some());
    }
}
