//! Pulse width classification.
//!
//! A pulse width maps to exactly one [`Direction`]. The three meaningful bands are
//! separated by dead zones that absorb jitter around the neutral position:
//!
//! ```text
//!   0 ..< backward_below   Backward
//!   backward_below ..= neutral_above   Undefined (gap)
//!   neutral_above <.. neutral_below    Neutral
//!   neutral_below ..= forward_above    Undefined (gap)
//!   forward_above <.. MAX  Forward
//! ```

use crate::types::{BandError, Direction, PulseTicks};

/// Fixed thresholds separating the stick positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseBands {
    backward_below: PulseTicks,
    neutral_above: PulseTicks,
    neutral_below: PulseTicks,
    forward_above: PulseTicks,
}

impl PulseBands {
    /// Bands calibrated for [`TICK_HZ`](crate::TICK_HZ).
    pub const REFERENCE: PulseBands = PulseBands {
        backward_below: 19,
        neutral_above: 20,
        neutral_below: 26,
        forward_above: 27,
    };

    /// Creates a validated set of bands.
    ///
    /// All bounds are exclusive. Each neighbouring pair of bands must leave at least
    /// one unclassified width between them.
    ///
    /// # Errors
    /// * `EmptyNeutral` - No width satisfies `neutral_above < p < neutral_below`
    /// * `BackwardOverlapsNeutral` - `backward_below > neutral_above`
    /// * `NeutralOverlapsForward` - `neutral_below > forward_above`
    pub const fn new(
        backward_below: PulseTicks,
        neutral_above: PulseTicks,
        neutral_below: PulseTicks,
        forward_above: PulseTicks,
    ) -> Result<Self, BandError> {
        if neutral_below <= neutral_above.saturating_add(1) {
            return Err(BandError::EmptyNeutral);
        }
        if backward_below > neutral_above {
            return Err(BandError::BackwardOverlapsNeutral);
        }
        if neutral_below > forward_above {
            return Err(BandError::NeutralOverlapsForward);
        }

        Ok(Self {
            backward_below,
            neutral_above,
            neutral_below,
            forward_above,
        })
    }

    /// Maps a pulse width to a direction. Total over the whole `PulseTicks` range.
    #[inline]
    pub const fn classify(&self, pulse: PulseTicks) -> Direction {
        if pulse > self.forward_above {
            Direction::Forward
        } else if pulse > self.neutral_above && pulse < self.neutral_below {
            Direction::Neutral
        } else if pulse < self.backward_below {
            Direction::Backward
        } else {
            Direction::Undefined
        }
    }
}

impl Default for PulseBands {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Classifies a pulse width against [`PulseBands::REFERENCE`].
#[inline]
pub const fn classify(pulse: PulseTicks) -> Direction {
    PulseBands::REFERENCE.classify(pulse)
}
