#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{self, interrupt};

use ppm_switch::{PulseCapture, PulseSlot};
use stm32f0_ppm_switch::edge_timer::ExtiEdgeTimer;

mod app_state;
mod hardware_setup;

use app_state::AppState;

/// Latest pulse width, written by EXTI0_1 and consumed by the main loop
static PULSE_SLOT: PulseSlot = PulseSlot::new();

/// Capture state, only ever touched inside EXTI0_1 after startup
static CAPTURE: Mutex<RefCell<Option<PulseCapture<ExtiEdgeTimer>>>> =
    Mutex::new(RefCell::new(None));

/// PPM input edge handler (PA0)
#[interrupt]
fn EXTI0_1() {
    critical_section::with(|cs| {
        if let Some(capture) = CAPTURE.borrow_ref_mut(cs).as_mut() {
            capture.timer().clear_pending();
            capture.on_edge(&PULSE_SLOT);
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== PPM Memory Switch ===");
    rprintln!("Starting initialization...");

    let mut hw = hardware_setup::init_hardware();
    hardware_setup::run_startup_sequence(&mut hw.aux, &mut hw.delay);

    let mut capture = hw.capture;
    capture.listen();
    critical_section::with(|cs| {
        *CAPTURE.borrow_ref_mut(cs) = Some(capture);
    });

    // NOTE(unsafe) the capture is installed, nothing else shares this interrupt
    unsafe {
        NVIC::unpend(pac::Interrupt::EXTI0_1);
        NVIC::unmask(pac::Interrupt::EXTI0_1);
    }

    rprintln!("=== System Ready ===");
    rprintln!("Stick center -> forward: select next channel");
    rprintln!("Stick center -> backward: toggle selected channel, or all off");

    let mut app = AppState::new(hw.bank, hw.delay, &PULSE_SLOT);
    app.run()
}
