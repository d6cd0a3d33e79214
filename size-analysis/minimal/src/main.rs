#![no_std]
#![no_main]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use panic_halt as _;
use ppm_switch::{
    Edge, EdgeTimer, PulseCapture, PulseSlot, PulseTicks, SwitchBank, SwitchController,
    SwitchState,
};

// ============================================================================
// Minimal Hardware Types
// ============================================================================

/// Zero-size bank implementation for measuring library overhead
pub struct MinimalBank;

impl SwitchBank for MinimalBank {
    fn channels(&self) -> usize {
        7
    }

    fn set(&mut self, channel: usize, state: SwitchState) {
        core::hint::black_box((channel, state));
    }

    fn toggle(&mut self, channel: usize) -> Option<SwitchState> {
        core::hint::black_box(channel);
        None
    }
}

/// Edge timer backed by plain fields
pub struct MinimalTimer {
    armed: Edge,
    counter: PulseTicks,
}

impl EdgeTimer for MinimalTimer {
    fn armed_edge(&self) -> Edge {
        self.armed
    }

    fn arm(&mut self, edge: Edge) {
        self.armed = edge;
    }

    fn reset_counter(&mut self) {
        self.counter = 0;
    }

    fn listen(&mut self) {}

    fn read_counter(&self) -> PulseTicks {
        core::hint::black_box(self.counter)
    }
}

pub struct MinimalDelay;

impl DelayMs<u8> for MinimalDelay {
    fn delay_ms(&mut self, ms: u8) {
        core::hint::black_box(ms);
    }
}

static SLOT: PulseSlot = PulseSlot::new();

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_switch() {
    let mut capture = PulseCapture::new(MinimalTimer {
        armed: Edge::Rising,
        counter: 23,
    });
    capture.listen();
    let mut controller = SwitchController::new(MinimalBank);

    // 7-channel in-memory bank
    let mut mirror = SwitchController::new([SwitchState::Off; 7]);

    for _ in 0..4 {
        capture.on_edge(&SLOT);
        capture.on_edge(&SLOT);
        let (ticks, event) = controller.step(&SLOT, &mut MinimalDelay);
        core::hint::black_box(event);
        core::hint::black_box(mirror.process(ticks));
    }

    core::hint::black_box(controller.state());
    core::hint::black_box(mirror.release());
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_switch();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
