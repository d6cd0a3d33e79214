//! Latching switch bank abstraction.

use crate::types::SwitchState;

/// Trait for abstracting a fixed bank of latching outputs.
///
/// Implement this for your output pins (GPIO, shift register, I/O expander, etc.).
/// Channels are addressed `0..channels()`. Out-of-range channels are ignored.
/// Handle any hardware errors internally - these methods cannot fail.
pub trait SwitchBank {
    /// Number of addressable channels.
    fn channels(&self) -> usize;

    /// Drives one channel to the given state.
    fn set(&mut self, channel: usize, state: SwitchState);

    /// Inverts one channel.
    ///
    /// Returns the new state if the implementation tracks it, `None` otherwise
    /// (and for out-of-range channels).
    fn toggle(&mut self, channel: usize) -> Option<SwitchState>;

    /// Turns every channel off.
    fn clear_all(&mut self) {
        for channel in 0..self.channels() {
            self.set(channel, SwitchState::Off);
        }
    }
}

/// In-memory bank, useful as a software mirror or for running the gesture logic off-target.
impl<const N: usize> SwitchBank for [SwitchState; N] {
    fn channels(&self) -> usize {
        N
    }

    fn set(&mut self, channel: usize, state: SwitchState) {
        if let Some(slot) = self.get_mut(channel) {
            *slot = state;
        }
    }

    fn toggle(&mut self, channel: usize) -> Option<SwitchState> {
        let slot = self.get_mut(channel)?;
        *slot = slot.toggled();
        Some(*slot)
    }
}
