#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PulseTicks`**: Width of one measured high phase, in counter ticks
//! - **`PulseBands`**: The fixed thresholds that map a pulse width to a `Direction`
//! - **`Direction`**: Stick position (`Backward`, `Neutral`, `Forward`) or `Undefined`
//! - **`PulseSlot`**: Single-slot handoff between the edge interrupt and the main loop
//! - **`PulseCapture`**: Interrupt-side edge protocol driving an `EdgeTimer`
//! - **`EdgeTimer`**: Trait to implement for your edge trigger and free-running counter
//! - **`SwitchBank`**: Trait to implement for your latching outputs
//! - **`GestureMachine`**: Turns direction changes into select/toggle/clear actions
//! - **`SwitchController`**: Owns the bank and the gesture state; fed once per sample
//!
//! The classifier and the gesture machine never touch hardware types, so the whole
//! decision path runs off-target in tests.

pub mod types;
pub mod classify;
pub mod bank;
pub mod capture;
pub mod gesture;
pub mod controller;

pub use types::{BandError, Direction, PulseTicks, SwitchState};
pub use classify::{PulseBands, classify};
pub use bank::SwitchBank;
pub use capture::{Edge, EdgeTimer, PulseCapture, PulseSlot};
pub use gesture::{GestureEvent, GestureMachine, GestureState};
pub use controller::SwitchController;

/// Counter rate the reference bands are calibrated against (1 MHz clock, prescaler 64).
///
/// Changing the tick rate means re-deriving [`PulseBands`]; the thresholds do not scale
/// automatically.
pub const TICK_HZ: u32 = 15_625;

/// Number of switch channels wired in the reference configuration.
pub const REFERENCE_CHANNELS: usize = 7;
