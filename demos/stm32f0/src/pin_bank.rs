use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};
use heapless::Vec;
use ppm_switch::{SwitchBank, SwitchState};

/// Error returned when building a [`PinBank`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinBankError {
    /// More pins than the bank can hold
    CapacityExceeded,
}

/// Switch bank backed by push-pull GPIO outputs
///
/// This wrapper implements the SwitchBank trait required by the controller.
/// Toggling reads back the output data register, so the bank keeps whatever
/// levels the pins had at startup and never resets them.
pub struct PinBank<P, const CAP: usize>
where
    P: OutputPin + StatefulOutputPin,
{
    pins: Vec<P, CAP>,
}

impl<P, const CAP: usize> PinBank<P, CAP>
where
    P: OutputPin + StatefulOutputPin,
{
    /// Create a bank from already configured output pins
    ///
    /// # Arguments
    /// * `pins` - Output pins in channel order (channel 0 first)
    pub fn from_pins<I>(pins: I) -> Result<Self, PinBankError>
    where
        I: IntoIterator<Item = P>,
    {
        let mut bank = Vec::new();
        for pin in pins {
            bank.push(pin).map_err(|_| PinBankError::CapacityExceeded)?;
        }
        Ok(Self { pins: bank })
    }

    /// Current level of one channel, read back from the pin
    pub fn state(&self, channel: usize) -> Option<SwitchState> {
        let pin = self.pins.get(channel)?;
        pin.is_set_high().ok().map(SwitchState::from)
    }
}

// Implement the SwitchBank trait required by the controller
impl<P, const CAP: usize> SwitchBank for PinBank<P, CAP>
where
    P: OutputPin + StatefulOutputPin,
{
    fn channels(&self) -> usize {
        self.pins.len()
    }

    fn set(&mut self, channel: usize, state: SwitchState) {
        if let Some(pin) = self.pins.get_mut(channel) {
            // Pin errors have nowhere to go; the switch simply stays as it was
            let _ = match state {
                SwitchState::On => pin.set_high(),
                SwitchState::Off => pin.set_low(),
            };
        }
    }

    fn toggle(&mut self, channel: usize) -> Option<SwitchState> {
        let next = self.state(channel)?.toggled();
        self.set(channel, next);
        Some(next)
    }
}
