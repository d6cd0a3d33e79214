//! Shared test infrastructure for ppm-switch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::blocking::delay::DelayMs;
use ppm_switch::{Edge, EdgeTimer, PulseSlot, PulseTicks, SwitchBank, SwitchState};

// ============================================================================
// Mock Switch Bank
// ============================================================================

/// A single mutation seen by the mock bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankOp {
    Set(usize, SwitchState),
    Toggle(usize),
}

/// Mock bank that records every mutation for testing
pub struct MockBank<const N: usize> {
    states: [SwitchState; N],
    history: heapless::Vec<BankOp, 64>,
}

impl<const N: usize> MockBank<N> {
    pub fn new(initial: SwitchState) -> Self {
        Self {
            states: [initial; N],
            history: heapless::Vec::new(),
        }
    }

    pub fn with_states(states: [SwitchState; N]) -> Self {
        Self {
            states,
            history: heapless::Vec::new(),
        }
    }

    pub fn states(&self) -> [SwitchState; N] {
        self.states
    }

    pub fn history(&self) -> &[BankOp] {
        &self.history
    }

    /// Number of toggles seen so far
    pub fn toggle_count(&self) -> usize {
        self.history
            .iter()
            .filter(|op| matches!(op, BankOp::Toggle(_)))
            .count()
    }
}

impl<const N: usize> SwitchBank for MockBank<N> {
    fn channels(&self) -> usize {
        N
    }

    fn set(&mut self, channel: usize, state: SwitchState) {
        let _ = self.history.push(BankOp::Set(channel, state));
        if let Some(slot) = self.states.get_mut(channel) {
            *slot = state;
        }
    }

    fn toggle(&mut self, channel: usize) -> Option<SwitchState> {
        let _ = self.history.push(BankOp::Toggle(channel));
        let slot = self.states.get_mut(channel)?;
        *slot = slot.toggled();
        Some(*slot)
    }
}

// ============================================================================
// Mock Edge Timer
// ============================================================================

/// Mock edge trigger + counter with a settable counter value
pub struct MockEdgeTimer {
    armed: Edge,
    counter: PulseTicks,
    resets: u32,
    arm_calls: u32,
    latched: bool,
    listening: bool,
}

impl MockEdgeTimer {
    pub fn new() -> Self {
        Self {
            armed: Edge::Falling,
            counter: 0,
            resets: 0,
            arm_calls: 0,
            latched: false,
            listening: false,
        }
    }

    /// Let the counter run for the given number of ticks
    pub fn advance(&mut self, ticks: PulseTicks) {
        self.counter = self.counter.wrapping_add(ticks);
    }

    pub fn counter(&self) -> PulseTicks {
        self.counter
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn arm_calls(&self) -> u32 {
        self.arm_calls
    }

    /// Record an edge the hardware latched while interrupts were not delivered
    pub fn latch_edge(&mut self) {
        self.latched = true;
    }

    pub fn latched(&self) -> bool {
        self.latched
    }

    pub fn listening(&self) -> bool {
        self.listening
    }
}

impl EdgeTimer for MockEdgeTimer {
    fn armed_edge(&self) -> Edge {
        self.armed
    }

    fn arm(&mut self, edge: Edge) {
        self.armed = edge;
        self.arm_calls += 1;
    }

    fn reset_counter(&mut self) {
        self.counter = 0;
        self.resets += 1;
    }

    fn read_counter(&self) -> PulseTicks {
        self.counter
    }

    fn listen(&mut self) {
        self.latched = false;
        self.listening = true;
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that publishes a sample to the slot after a number of polls,
/// standing in for the edge interrupt firing while the main loop waits
pub struct PublishingDelay<'a> {
    slot: &'a PulseSlot,
    pending: Option<PulseTicks>,
    polls_before_publish: u32,
    polls: u32,
}

impl<'a> PublishingDelay<'a> {
    pub fn new(slot: &'a PulseSlot, ticks: PulseTicks, polls_before_publish: u32) -> Self {
        Self {
            slot,
            pending: Some(ticks),
            polls_before_publish,
            polls: 0,
        }
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl DelayMs<u8> for PublishingDelay<'_> {
    fn delay_ms(&mut self, ms: u8) {
        assert_eq!(ms, ppm_switch::controller::POLL_INTERVAL_MS);
        self.polls += 1;
        if self.polls >= self.polls_before_publish {
            if let Some(ticks) = self.pending.take() {
                self.slot.publish(ticks);
            }
        }
    }
}

// ============================================================================
// Representative pulse widths (reference bands, 64 us ticks)
// ============================================================================

pub const BACKWARD: PulseTicks = 15;
pub const NEUTRAL: PulseTicks = 23;
pub const FORWARD: PulseTicks = 31;
pub const DEAD_LOW: PulseTicks = 20;
pub const DEAD_HIGH: PulseTicks = 26;
