//! Timed effect slots.
//!
//! A slot is owned by the view that shows the effect. Arming it hands out a
//! ticket; the timer that later expires the effect must present that ticket.
//! Re-arming or cancelling bumps the generation so stale timers are ignored.

/// Generation token returned by [`EffectSlot::arm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectTicket(u64);

/// One self-expiring effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectSlot {
    generation: u64,
    active: bool,
}

impl EffectSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start (or restart) the effect.
    pub fn arm(&mut self) -> EffectTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        EffectTicket(self.generation)
    }

    /// Expire the effect if `ticket` is still current.
    ///
    /// Returns `true` when the effect was cleared by this call.
    pub fn expire(&mut self, ticket: EffectTicket) -> bool {
        if !self.active || ticket.0 != self.generation {
            tracing::trace!(?ticket, "Ignoring stale effect timer");
            return false;
        }
        self.active = false;
        true
    }

    /// Clear the effect now and invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
    }
}
