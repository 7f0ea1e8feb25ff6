//! Section walker: which message section of the card is on screen.
//!
//! The walker only moves forward. What happens past the last section is
//! decided by [`EndPolicy`].

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Behaviour of `advance()` once the last section is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EndPolicy {
    /// Stay on the last section; further advances are no-ops
    #[default]
    Halt,
    /// Start over from the first section
    Wrap,
}

impl EndPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndPolicy::Halt => "halt",
            EndPolicy::Wrap => "wrap",
        }
    }
}

/// Outcome of a single `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to an intermediate section
    Moved { to: usize },
    /// Arrived at the last section; the celebration should run now
    Finale { to: usize },
    /// Already on the last section under `Halt`; nothing changed
    AtEnd,
    /// Went from the last section back to the first under `Wrap`
    Wrapped,
}

impl Step {
    /// Whether this step changed the visible section.
    pub fn moved(&self) -> bool {
        !matches!(self, Step::AtEnd)
    }

    /// Whether this step should trigger the celebration.
    pub fn is_finale(&self) -> bool {
        matches!(self, Step::Finale { .. })
    }
}

/// Linear walker over `len` sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    current: usize,
    len: usize,
    policy: EndPolicy,
    celebrated: bool,
}

impl Walker {
    /// Create a walker positioned on the first section.
    pub fn new(len: usize, policy: EndPolicy) -> CardResult<Self> {
        if len == 0 {
            return Err(CardError::EmptySections);
        }
        Ok(Self {
            current: 0,
            len,
            policy,
            celebrated: false,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn section_count(&self) -> usize {
        self.len
    }

    pub fn policy(&self) -> EndPolicy {
        self.policy
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Whether the "next" control should be enabled.
    pub fn can_advance(&self) -> bool {
        !self.is_last() || self.policy == EndPolicy::Wrap
    }

    /// Whether the celebration for the current lap has already fired.
    pub fn celebrated(&self) -> bool {
        self.celebrated
    }

    /// 1-based position and total, for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.len)
    }

    /// Move to the next section.
    ///
    /// The celebration fires once per arrival at the last section. Under
    /// `Halt` that means once per walker; under `Wrap` once per lap.
    pub fn advance(&mut self) -> Step {
        if self.is_last() {
            return match self.policy {
                EndPolicy::Halt => Step::AtEnd,
                EndPolicy::Wrap => {
                    self.current = 0;
                    self.celebrated = false;
                    tracing::debug!("Walker wrapped to first section");
                    Step::Wrapped
                }
            };
        }

        self.current += 1;
        tracing::debug!(section = self.current, "Walker advanced");

        if !self.is_last() {
            return Step::Moved { to: self.current };
        }
        self.celebrated = true;
        tracing::info!("Final section reached");
        Step::Finale { to: self.current }
    }
}
