//! Main-loop side of the switch: classification, gesture decoding and bank updates.
//!
//! Provides [`SwitchController`], the single long-lived context owned by the main loop.
//! The interrupt side only ever touches the [`PulseSlot`].

use embedded_hal::blocking::delay::DelayMs;

use crate::bank::SwitchBank;
use crate::capture::PulseSlot;
use crate::classify::PulseBands;
use crate::gesture::{GestureEvent, GestureMachine, GestureState};
use crate::types::{Direction, PulseTicks};

/// Poll interval of [`SwitchController::wait_for_sample`], well under one PPM frame.
pub const POLL_INTERVAL_MS: u8 = 1;

/// Drives a switch bank from classified pulse samples.
///
/// # Type Parameters
/// * `B` - Switch bank implementation type
pub struct SwitchController<B: SwitchBank> {
    bank: B,
    bands: PulseBands,
    gesture: GestureMachine,
}

impl<B: SwitchBank> SwitchController<B> {
    /// Creates a controller using the reference bands.
    ///
    /// The bank is left as the hardware provides it.
    pub fn new(bank: B) -> Self {
        Self::with_bands(bank, PulseBands::REFERENCE)
    }

    /// Creates a controller for a different counter calibration.
    pub fn with_bands(bank: B, bands: PulseBands) -> Self {
        Self {
            bank,
            bands,
            gesture: GestureMachine::new(),
        }
    }

    /// Blocks until the interrupt side publishes a sample, then consumes it.
    ///
    /// Polls the slot every [`POLL_INTERVAL_MS`]. Never returns if the signal is gone.
    pub fn wait_for_sample<D: DelayMs<u8>>(slot: &PulseSlot, delay: &mut D) -> PulseTicks {
        loop {
            if let Some(ticks) = slot.take() {
                return ticks;
            }
            delay.delay_ms(POLL_INTERVAL_MS);
        }
    }

    /// Classifies one pulse width and feeds it to the gesture machine.
    pub fn process(&mut self, ticks: PulseTicks) -> Option<GestureEvent> {
        let direction = self.bands.classify(ticks);
        self.process_direction(direction)
    }

    /// Feeds an already classified direction.
    pub fn process_direction(&mut self, direction: Direction) -> Option<GestureEvent> {
        self.gesture.feed(direction, &mut self.bank)
    }

    /// Waits for the next sample and processes it.
    pub fn step<D: DelayMs<u8>>(
        &mut self,
        slot: &PulseSlot,
        delay: &mut D,
    ) -> (PulseTicks, Option<GestureEvent>) {
        let ticks = Self::wait_for_sample(slot, delay);
        (ticks, self.process(ticks))
    }

    /// Returns the current gesture state.
    pub fn state(&self) -> GestureState {
        self.gesture.state()
    }

    /// Returns a reference to the bank.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Gives the bank back.
    pub fn release(self) -> B {
        self.bank
    }
}
