use embedded_hal::PwmPin;
use embedded_hal::blocking::delay::DelayMs;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    delay::Delay,
    gpio::{Floating, Input, Output, Pin, PushPull, gpioa},
    pac,
    prelude::*,
    pwm,
    time::Hertz,
};

use ppm_switch::{PulseCapture, REFERENCE_CHANNELS, TICK_HZ};
use stm32f0_ppm_switch::edge_timer::ExtiEdgeTimer;
use stm32f0_ppm_switch::pin_bank::PinBank;

/// Switch bank type: up to 8 erased push-pull outputs
pub type SwitchPins = PinBank<Pin<Output<PushPull>>, 8>;

/// Auxiliary PWM output (PA8, TIM1_CH1)
pub type AuxPwm = pwm::PwmChannels<pac::TIM1, pwm::C1>;

/// Settle time before the auxiliary ramp
const STARTUP_DELAY_MS: u16 = 2_000;

/// Auxiliary output period in timer counts; duties below are fractions of it
const AUX_PERIOD: u16 = 60;
const AUX_KICK_DUTY: u16 = 50;
const AUX_KICK_MS: u16 = 500;
const AUX_IDLE_DUTY: u16 = 3;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub bank: SwitchPins,
    pub capture: PulseCapture<ExtiEdgeTimer>,
    pub aux: AuxPwm,
    pub delay: Delay,
}

/// Initialize all hardware peripherals
///
/// This function handles the input and output configuration in one place:
/// - System clock configuration
/// - PPM input on PA0 with EXTI line 0, rising edge first
/// - TIM14 free-running at `TICK_HZ`
/// - Seven switch outputs
/// - Auxiliary PWM on PA8
///
/// The edge interrupt is still masked in the NVIC when this returns.
///
/// # Returns
/// A `HardwareContext` containing all initialized peripherals ready for use
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    let pclk = rcc.clocks.pclk().0;
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let _ppm_in = cortex_m::interrupt::free(|cs| gpioa.pa0.into_pull_down_input(cs));
    let capture = PulseCapture::new(ExtiEdgeTimer::new(dp.EXTI, dp.TIM14, pclk));
    rprintln!("PPM input on PA0, TIM14 at {} Hz", TICK_HZ);

    let aux = setup_aux_pwm(gpioa.pa8, dp.TIM1, &mut rcc);

    let pins = cortex_m::interrupt::free(|cs| {
        [
            gpioa.pa1.into_push_pull_output(cs).downgrade(),
            gpioa.pa4.into_push_pull_output(cs).downgrade(),
            gpioa.pa5.into_push_pull_output(cs).downgrade(),
            gpioa.pa6.into_push_pull_output(cs).downgrade(),
            gpioa.pa7.into_push_pull_output(cs).downgrade(),
            gpiob.pb0.into_push_pull_output(cs).downgrade(),
            gpiob.pb1.into_push_pull_output(cs).downgrade(),
        ]
    });
    let bank = SwitchPins::from_pins(pins).unwrap();
    rprintln!("{} switch outputs configured", REFERENCE_CHANNELS);

    let delay = Delay::new(cp.SYST, &rcc);

    HardwareContext {
        bank,
        capture,
        aux,
        delay,
    }
}

/// Configure TIM1 channel 1 as the auxiliary PWM output
fn setup_aux_pwm(
    pa8: gpioa::PA8<Input<Floating>>,
    tim1: pac::TIM1,
    rcc: &mut stm32f0xx_hal::rcc::Rcc,
) -> AuxPwm {
    let pin = cortex_m::interrupt::free(|cs| pa8.into_alternate_af2(cs));

    // 60-count phase-correct period at 1 MHz
    let mut aux = pwm::tim1(tim1, pin, rcc, Hertz(8_333));
    aux.set_duty(0);
    aux.enable();

    rprintln!("Auxiliary PWM configured on TIM1 (PA8)");
    aux
}

/// Fixed startup sequence: settle, kick the auxiliary output, drop it to idle duty
pub fn run_startup_sequence(aux: &mut AuxPwm, delay: &mut Delay) {
    let max_duty = aux.get_max_duty();
    let duty = |fraction: u16| (max_duty as u32 * fraction as u32 / AUX_PERIOD as u32) as u16;

    delay.delay_ms(STARTUP_DELAY_MS);

    aux.set_duty(duty(AUX_KICK_DUTY));
    delay.delay_ms(AUX_KICK_MS);
    aux.set_duty(duty(AUX_IDLE_DUTY));

    rprintln!("Startup sequence done");
}
