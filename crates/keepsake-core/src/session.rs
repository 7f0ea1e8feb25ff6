//! Card session: all in-memory state behind one open card.
//!
//! The UI keeps a single `CardSession` in a signal and calls the transition
//! methods from its event handlers. Timed effects hand back an
//! [`EffectTicket`]; the UI sleeps for the effect's lifetime and then calls
//! the matching `expire_*` method with that ticket.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CardConfig;
use crate::content::CardContent;
use crate::effects::particles::{CONFETTI_COUNT, HEART_COUNT};
use crate::effects::{confetti, hearts, EffectSlot, EffectTicket, GiftBox, Particle};
use crate::error::CardResult;
use crate::gallery::Gallery;
use crate::walker::{Step, Walker};

/// Timers the UI must start after a section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub step: Step,
    pub confetti: Option<EffectTicket>,
    pub banner: Option<EffectTicket>,
}

#[derive(Debug, Clone)]
pub struct CardSession {
    walker: Walker,
    gallery: Gallery,
    gift: GiftBox,
    rng: StdRng,
    hearts: Vec<Particle>,
    confetti: Vec<Particle>,
    sparkles: Vec<Particle>,
    confetti_slot: EffectSlot,
    sparkle_slot: EffectSlot,
    banner_slot: EffectSlot,
}

impl CardSession {
    pub fn new(content: &CardContent, config: &CardConfig) -> CardResult<Self> {
        let walker = Walker::new(content.sections.len(), config.end_policy)?;
        let gallery = Gallery::new(content.photos.len())?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let hearts = hearts(&mut rng, HEART_COUNT);

        Ok(Self {
            walker,
            gallery,
            gift: GiftBox::new(),
            rng,
            hearts,
            confetti: Vec::new(),
            sparkles: Vec::new(),
            confetti_slot: EffectSlot::new(),
            sparkle_slot: EffectSlot::new(),
            banner_slot: EffectSlot::new(),
        })
    }

    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    pub fn gift(&self) -> &GiftBox {
        &self.gift
    }

    pub fn hearts(&self) -> &[Particle] {
        &self.hearts
    }

    pub fn confetti(&self) -> &[Particle] {
        &self.confetti
    }

    pub fn sparkles(&self) -> &[Particle] {
        &self.sparkles
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_slot.is_active()
    }

    /// Drop a fresh confetti burst over the card.
    pub fn burst_confetti(&mut self) -> EffectTicket {
        self.confetti = confetti(&mut self.rng, CONFETTI_COUNT);
        self.confetti_slot.arm()
    }

    /// Advance to the next section.
    ///
    /// Leaving a section cancels its sparkle burst and closes a fullscreen
    /// photo. Reaching the last section starts confetti and the banner.
    /// Wrapping to the start closes the gift box again.
    pub fn next_section(&mut self) -> SectionChange {
        let step = self.walker.advance();
        let mut change = SectionChange {
            step,
            confetti: None,
            banner: None,
        };

        if !step.moved() {
            return change;
        }

        self.sparkle_slot.cancel();
        self.sparkles.clear();
        self.gallery.close_fullscreen();

        match step {
            Step::Finale { .. } => {
                change.confetti = Some(self.burst_confetti());
                change.banner = Some(self.banner_slot.arm());
            }
            Step::Wrapped => {
                self.gift.reset();
                self.banner_slot.cancel();
            }
            Step::Moved { .. } | Step::AtEnd => {}
        }
        change
    }

    /// Open the gift box. Returns a ticket only for the first click.
    pub fn open_gift(&mut self) -> Option<EffectTicket> {
        let burst = self.gift.open(&mut self.rng)?;
        self.sparkles = burst;
        Some(self.sparkle_slot.arm())
    }

    pub fn expire_confetti(&mut self, ticket: EffectTicket) -> bool {
        let cleared = self.confetti_slot.expire(ticket);
        if cleared {
            self.confetti.clear();
        }
        cleared
    }

    pub fn expire_sparkles(&mut self, ticket: EffectTicket) -> bool {
        let cleared = self.sparkle_slot.expire(ticket);
        if cleared {
            self.sparkles.clear();
        }
        cleared
    }

    pub fn expire_banner(&mut self, ticket: EffectTicket) -> bool {
        self.banner_slot.expire(ticket)
    }
}
