use rtt_target::rprintln;
use stm32f0xx_hal::delay::Delay;

use ppm_switch::{GestureEvent, PulseSlot, SwitchController};

use crate::hardware_setup::SwitchPins;

/// Application state containing all runtime data owned by the main loop
pub struct AppState {
    controller: SwitchController<SwitchPins>,
    delay: Delay,
    slot: &'static PulseSlot,
}

impl AppState {
    /// Take over the switch bank; the bank is not reset
    pub fn new(bank: SwitchPins, delay: Delay, slot: &'static PulseSlot) -> Self {
        Self {
            controller: SwitchController::new(bank),
            delay,
            slot,
        }
    }

    /// Report what a sample did
    fn log_event(&self, ticks: u16, event: GestureEvent) {
        match event {
            GestureEvent::Selected(selection) => {
                rprintln!("[{}] selection -> {}", ticks, selection);
            }
            GestureEvent::Toggled { channel, state } => {
                rprintln!("[{}] channel {} toggled: {:?}", ticks, channel, state);
            }
            GestureEvent::ClearedAll => {
                rprintln!("[{}] all channels off", ticks);
            }
            GestureEvent::SelectionDropped => {
                rprintln!("[{}] selection past last channel, dropped", ticks);
            }
        }
    }

    /// Run the main application loop
    ///
    /// Idles in the poll when the signal disappears; switches keep their state.
    pub fn run(&mut self) -> ! {
        loop {
            let (ticks, event) = self.controller.step(self.slot, &mut self.delay);
            if let Some(event) = event {
                self.log_event(ticks, event);
            }
        }
    }
}
