//! Core types shared by the classifier, the gesture machine and the switch bank.

/// Width of one measured high phase, in ticks of the capture counter.
pub type PulseTicks = u16;

/// Stick position derived from a single pulse width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pulse fell into a dead zone. Never remembered as a last direction.
    #[default]
    Undefined,

    /// Stick pulled back (short pulse).
    Backward,

    /// Stick centered.
    Neutral,

    /// Stick pushed forward (long pulse).
    Forward,
}

impl Direction {
    /// Returns true for every direction except `Undefined`.
    #[inline]
    pub fn is_defined(self) -> bool {
        self != Direction::Undefined
    }
}

/// Logic level of one latching output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    #[default]
    Off,
    On,
}

impl SwitchState {
    /// Returns the opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            SwitchState::Off => SwitchState::On,
            SwitchState::On => SwitchState::Off,
        }
    }

    #[inline]
    pub fn is_on(self) -> bool {
        self == SwitchState::On
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { SwitchState::On } else { SwitchState::Off }
    }
}

/// Pulse band validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandError {
    /// Backward band reaches into the neutral band.
    BackwardOverlapsNeutral,

    /// Neutral band reaches into the forward band.
    NeutralOverlapsForward,

    /// Neutral band contains no pulse width at all.
    EmptyNeutral,
}

impl core::fmt::Display for BandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BandError::BackwardOverlapsNeutral => {
                write!(f, "backward band overlaps the neutral band")
            }
            BandError::NeutralOverlapsForward => {
                write!(f, "neutral band overlaps the forward band")
            }
            BandError::EmptyNeutral => {
                write!(f, "neutral band is empty")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BandError {}
