//! Interrupt-driven pulse width capture and the handoff to the main loop.
//!
//! The edge interrupt alternates between two phases:
//!
//! - **Rising edge**: reset the free-running counter, arm the falling edge.
//! - **Falling edge**: read the counter, publish it to the [`PulseSlot`], arm the rising edge.
//!
//! The slot is the only state shared between interrupt and main loop. It holds the
//! most recent complete measurement; a newer pulse overwrites an unconsumed one.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::types::PulseTicks;

/// Edge the trigger fires on next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Trait for abstracting the edge trigger and the counter backing a capture.
///
/// Implement this for your external interrupt line and timer peripheral.
pub trait EdgeTimer {
    /// Edge the trigger is currently configured for.
    fn armed_edge(&self) -> Edge;

    /// Reconfigures the trigger to fire on `edge` next.
    fn arm(&mut self, edge: Edge);

    /// Resets the free-running counter to zero.
    fn reset_counter(&mut self);

    /// Reads the free-running counter.
    fn read_counter(&self) -> PulseTicks;

    /// Drops any edge latched so far and starts delivering edge interrupts.
    fn listen(&mut self);
}

const READY: u32 = 1 << 16;
const TICKS_MASK: u32 = 0xFFFF;

/// Single-slot, single-producer/single-consumer handoff for pulse samples.
///
/// Sample and ready flag share one word, so a reader can never see a flag without
/// its sample or a half-written sample. Only atomic loads and stores are used,
/// which keeps the slot usable on cores without compare-and-swap (ARMv6-M).
pub struct PulseSlot {
    word: AtomicU32,
}

impl PulseSlot {
    /// Creates an empty slot. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            word: AtomicU32::new(0),
        }
    }

    /// Publishes a sample and marks it ready. Producer side (interrupt context).
    #[inline]
    pub fn publish(&self, ticks: PulseTicks) {
        self.word.store(READY | ticks as u32, Ordering::Release);
    }

    /// Takes the pending sample, if any, and clears the ready flag. Consumer side.
    ///
    /// A pulse that completes between the load and the clearing store is dropped.
    #[inline]
    pub fn take(&self) -> Option<PulseTicks> {
        let word = self.word.load(Ordering::Acquire);
        if word & READY == 0 {
            return None;
        }
        self.word.store(0, Ordering::Release);
        Some((word & TICKS_MASK) as PulseTicks)
    }

    /// Returns true if a sample is waiting.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.word.load(Ordering::Acquire) & READY != 0
    }
}

impl Default for PulseSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side capture state machine.
///
/// Owns the edge timer; call [`on_edge`](Self::on_edge) from the edge interrupt handler
/// and nowhere else.
pub struct PulseCapture<T: EdgeTimer> {
    timer: T,
}

impl<T: EdgeTimer> PulseCapture<T> {
    /// Takes over the timer and arms the rising edge.
    pub fn new(mut timer: T) -> Self {
        timer.arm(Edge::Rising);
        Self { timer }
    }

    /// Handles one edge interrupt.
    ///
    /// Returns the published pulse width on a falling edge, `None` on a rising edge.
    pub fn on_edge(&mut self, slot: &PulseSlot) -> Option<PulseTicks> {
        match self.timer.armed_edge() {
            Edge::Rising => {
                self.timer.reset_counter();
                self.timer.arm(Edge::Falling);
                None
            }
            Edge::Falling => {
                let ticks = self.timer.read_counter();
                slot.publish(ticks);
                self.timer.arm(Edge::Rising);
                Some(ticks)
            }
        }
    }

    /// Starts capturing from a clean rising edge.
    ///
    /// Call once, right before the edge interrupt is unmasked. Edges seen while the
    /// line was idle (startup, debugger halts) are discarded instead of being measured.
    pub fn listen(&mut self) {
        self.timer.arm(Edge::Rising);
        self.timer.listen();
    }

    /// Returns a reference to the underlying timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Returns a mutable reference to the underlying timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Gives the timer back.
    pub fn release(self) -> T {
        self.timer
    }
}
