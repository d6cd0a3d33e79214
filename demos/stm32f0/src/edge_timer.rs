use ppm_switch::{Edge, EdgeTimer, PulseTicks, TICK_HZ};
use stm32f0xx_hal::pac;

/// EXTI line of the PPM input (PA0, EXTI0_1 interrupt)
///
/// Line 0 maps to port A after reset, so SYSCFG_EXTICR1 is left alone.
const PPM_LINE: u32 = 1 << 0;

/// Edge trigger on EXTI line 0 plus TIM14 as the free-running pulse counter
///
/// TIM14 is prescaled to [`TICK_HZ`] so the reference pulse bands apply unchanged.
pub struct ExtiEdgeTimer {
    exti: pac::EXTI,
    tim: pac::TIM14,
    armed: Edge,
}

impl ExtiEdgeTimer {
    /// Start TIM14 and arm EXTI line 0 on the rising edge
    ///
    /// The EXTI line stays masked until [`EdgeTimer::listen`]; unmask `EXTI0_1` in the
    /// NVIC after that.
    ///
    /// # Arguments
    /// * `exti` - EXTI peripheral
    /// * `tim` - TIM14 peripheral
    /// * `timer_clock_hz` - Clock feeding TIM14 (PCLK with APB prescaler 1)
    pub fn new(exti: pac::EXTI, tim: pac::TIM14, timer_clock_hz: u32) -> Self {
        // NOTE(unsafe) single read-modify-write of an enable bit nothing else touches
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim14en().set_bit());

        let prescaler = (timer_clock_hz / TICK_HZ).saturating_sub(1) as u16;

        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.psc.write(|w| unsafe { w.psc().bits(prescaler) });
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });
        // load the prescaler now instead of at the first overflow
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        let mut timer = Self {
            exti,
            tim,
            armed: Edge::Rising,
        };
        timer.arm(Edge::Rising);
        timer
    }

    /// Acknowledge the pending EXTI line; call first thing in the interrupt handler
    pub fn clear_pending(&self) {
        self.exti.pr.write(|w| unsafe { w.bits(PPM_LINE) });
    }
}

impl EdgeTimer for ExtiEdgeTimer {
    fn armed_edge(&self) -> Edge {
        self.armed
    }

    fn arm(&mut self, edge: Edge) {
        let (rising, falling) = match edge {
            Edge::Rising => (PPM_LINE, 0),
            Edge::Falling => (0, PPM_LINE),
        };
        self.exti
            .rtsr
            .modify(|r, w| unsafe { w.bits((r.bits() & !PPM_LINE) | rising) });
        self.exti
            .ftsr
            .modify(|r, w| unsafe { w.bits((r.bits() & !PPM_LINE) | falling) });
        self.armed = edge;
    }

    fn reset_counter(&mut self) {
        self.tim.cnt.write(|w| unsafe { w.bits(0) });
    }

    fn read_counter(&self) -> PulseTicks {
        self.tim.cnt.read().bits() as PulseTicks
    }

    fn listen(&mut self) {
        self.clear_pending();
        self.exti
            .imr
            .modify(|r, w| unsafe { w.bits(r.bits() | PPM_LINE) });
    }
}
