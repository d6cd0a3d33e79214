//! Stick gesture state machine.
//!
//! Only moves that start from the centered stick count:
//!
//! | last    | current  | action                                                    |
//! |---------|----------|-----------------------------------------------------------|
//! | Neutral | Forward  | advance selection (stops one past the last channel)       |
//! | Neutral | Backward | toggle selected channel, or clear all if none is selected; selection back to 0 |
//! | any     | Undefined| nothing, last direction kept                              |
//! | other   | other    | nothing, last direction updated                           |
//!
//! A sweep from Forward straight to Backward therefore does nothing; the stick has to
//! return to center first.

use crate::bank::SwitchBank;
use crate::types::{Direction, SwitchState};

/// Gesture memory: the last meaningful direction and the selection counter.
///
/// `selection` 0 means nothing selected; `1..=N` selects channel `selection - 1`;
/// `N + 1` is the saturated "past the end" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureState {
    pub last_direction: Direction,
    pub selection: usize,
}

/// What a single direction sample caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    /// Selection advanced to this value.
    Selected(usize),

    /// Selected channel was toggled. `state` is `None` if the bank does not report it.
    Toggled {
        channel: usize,
        state: Option<SwitchState>,
    },

    /// No channel was selected, every channel was switched off.
    ClearedAll,

    /// Selection was past the last channel; it was reset without touching the bank.
    SelectionDropped,
}

/// Edge-triggered gesture decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    /// Creates a machine with no remembered direction and nothing selected.
    pub const fn new() -> Self {
        Self {
            state: GestureState {
                last_direction: Direction::Undefined,
                selection: 0,
            },
        }
    }

    /// Resumes from a known state.
    pub const fn from_state(state: GestureState) -> Self {
        Self { state }
    }

    /// Returns the current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Feeds one classified sample, mutating `bank` on a qualifying transition.
    pub fn feed<B: SwitchBank + ?Sized>(
        &mut self,
        current: Direction,
        bank: &mut B,
    ) -> Option<GestureEvent> {
        let event = match (self.state.last_direction, current) {
            (Direction::Neutral, Direction::Forward) => self.advance(bank.channels()),
            (Direction::Neutral, Direction::Backward) => Some(self.commit(bank)),
            _ => None,
        };

        if current.is_defined() {
            self.state.last_direction = current;
        }

        event
    }

    fn advance(&mut self, channels: usize) -> Option<GestureEvent> {
        if self.state.selection <= channels {
            self.state.selection += 1;
            Some(GestureEvent::Selected(self.state.selection))
        } else {
            None
        }
    }

    fn commit<B: SwitchBank + ?Sized>(&mut self, bank: &mut B) -> GestureEvent {
        let selection = self.state.selection;
        self.state.selection = 0;

        if selection == 0 {
            bank.clear_all();
            GestureEvent::ClearedAll
        } else if selection <= bank.channels() {
            let channel = selection - 1;
            let state = bank.toggle(channel);
            GestureEvent::Toggled { channel, state }
        } else {
            GestureEvent::SelectionDropped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SwitchState::{Off, On};

    fn neutral_with_selection(selection: usize) -> GestureMachine {
        GestureMachine::from_state(GestureState {
            last_direction: Direction::Neutral,
            selection,
        })
    }

    #[test]
    fn forward_from_neutral_advances_selection() {
        let mut bank = [Off; 7];
        let mut machine = neutral_with_selection(0);

        assert_eq!(
            machine.feed(Direction::Forward, &mut bank),
            Some(GestureEvent::Selected(1))
        );
        assert_eq!(machine.state().selection, 1);
        assert_eq!(machine.state().last_direction, Direction::Forward);
        assert_eq!(bank, [Off; 7]);
    }

    #[test]
    fn selection_stops_one_past_last_channel() {
        let mut bank = [Off; 7];
        let mut machine = neutral_with_selection(8);

        assert_eq!(machine.feed(Direction::Forward, &mut bank), None);
        assert_eq!(machine.state().selection, 8);
    }

    #[test]
    fn backward_from_saturated_selection_only_resets() {
        let mut bank = [On; 7];
        let mut machine = neutral_with_selection(8);

        assert_eq!(
            machine.feed(Direction::Backward, &mut bank),
            Some(GestureEvent::SelectionDropped)
        );
        assert_eq!(machine.state().selection, 0);
        assert_eq!(bank, [On; 7]);
    }

    #[test]
    fn selection_reaches_channels_beyond_u8_range() {
        let mut bank = [Off; 300];
        let mut machine = neutral_with_selection(279);

        assert_eq!(
            machine.feed(Direction::Forward, &mut bank),
            Some(GestureEvent::Selected(280))
        );
        machine.feed(Direction::Neutral, &mut bank);
        assert_eq!(
            machine.feed(Direction::Backward, &mut bank),
            Some(GestureEvent::Toggled {
                channel: 279,
                state: Some(On)
            })
        );
        assert_eq!(bank.iter().filter(|s| s.is_on()).count(), 1);
        assert!(bank[279].is_on());
    }

    #[test]
    fn undefined_keeps_last_direction() {
        let mut bank = [Off; 7];
        let mut machine = neutral_with_selection(3);

        assert_eq!(machine.feed(Direction::Undefined, &mut bank), None);
        assert_eq!(
            machine.state(),
            GestureState {
                last_direction: Direction::Neutral,
                selection: 3
            }
        );
    }

    #[test]
    fn empty_bank_clears_and_drops() {
        let mut bank: [SwitchState; 0] = [];
        let mut machine = neutral_with_selection(0);

        assert_eq!(
            machine.feed(Direction::Forward, &mut bank),
            Some(GestureEvent::Selected(1))
        );
        machine.feed(Direction::Neutral, &mut bank);
        assert_eq!(machine.feed(Direction::Forward, &mut bank), None);
        machine.feed(Direction::Neutral, &mut bank);
        assert_eq!(
            machine.feed(Direction::Backward, &mut bank),
            Some(GestureEvent::SelectionDropped)
        );
    }
}
