//! Type definitions for command selection and menu state.
//!
//! This module defines the types the navigator works with: the user's
//! choice, the keys it reacts to, the selection state and the frame it asks
//! a [`super::Screen`] to draw.

use std::fmt::{Display, Formatter};

use walrus_prompt_core::catalog::CommandSpec;

/// Represents the user's command selection choice.
#[derive(Debug, Clone, Copy)]
pub enum CommandChoice<'c> {
    Command(&'c CommandSpec),
    Exit,
}

impl Display for CommandChoice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandChoice::Command(spec) => f.write_str(&spec.name),
            CommandChoice::Exit => f.write_str(walrus_prompt_core::catalog::EXIT_COMMAND),
        }
    }
}

/// Keys the navigator reacts to, already decoded from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    Quit,
    /// Ctrl-C.
    Interrupt,
    /// Anything that only needs the menu drawn again (resize, unbound keys).
    Redraw,
}

/// Direction to cycle through commands in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// The highlighted row of the menu.
///
/// Always `0 <= selected < len`; moving past either end wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSelection {
    selected: usize,
    len: usize,
}

impl SessionSelection {
    /// # Panics
    ///
    /// Panics if `len` is zero; a menu always has at least its exit row.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a menu needs at least one row");
        Self { selected: 0, len }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cycle(&mut self, direction: CycleDirection) {
        self.selected = match direction {
            CycleDirection::Up => (self.selected + self.len - 1) % self.len,
            CycleDirection::Down => (self.selected + 1) % self.len,
        };
    }

    /// First visible row for a viewport of `height` rows, chosen so the
    /// highlighted row is always on screen.
    #[must_use]
    pub fn window_start(&self, height: usize) -> usize {
        (self.selected + 1).saturating_sub(height.max(1))
    }
}

/// One rendered menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub text: String,
    pub is_selected: bool,
}

/// Everything the screen needs to draw the menu once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: String,
    pub help: String,
    pub rows: Vec<MenuRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_at_zero() {
        let selection = SessionSelection::new(3);
        assert_eq!(selection.selected(), 0);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_cycle_down_wraps_to_first() {
        let mut selection = SessionSelection::new(3);
        selection.cycle(CycleDirection::Down);
        selection.cycle(CycleDirection::Down);
        assert_eq!(selection.selected(), 2);
        selection.cycle(CycleDirection::Down);
        assert_eq!(selection.selected(), 0);
    }

    #[test]
    fn test_cycle_up_wraps_to_last() {
        let mut selection = SessionSelection::new(5);
        selection.cycle(CycleDirection::Up);
        assert_eq!(selection.selected(), 4);
        selection.cycle(CycleDirection::Up);
        assert_eq!(selection.selected(), 3);
    }

    #[test]
    fn test_single_row_stays_put() {
        let mut selection = SessionSelection::new(1);
        selection.cycle(CycleDirection::Up);
        assert_eq!(selection.selected(), 0);
        selection.cycle(CycleDirection::Down);
        assert_eq!(selection.selected(), 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut selection = SessionSelection::new(7);
        for step in 0..50 {
            let direction = if step % 3 == 0 {
                CycleDirection::Up
            } else {
                CycleDirection::Down
            };
            selection.cycle(direction);
            assert!(selection.selected() < 7);
        }
    }

    #[test]
    fn test_window_start() {
        let mut selection = SessionSelection::new(20);
        assert_eq!(selection.window_start(5), 0);

        for _ in 0..4 {
            selection.cycle(CycleDirection::Down);
        }
        assert_eq!(selection.window_start(5), 0);

        selection.cycle(CycleDirection::Down);
        assert_eq!(selection.selected(), 5);
        assert_eq!(selection.window_start(5), 1);

        selection.cycle(CycleDirection::Up);
        selection.cycle(CycleDirection::Up);
        selection.cycle(CycleDirection::Up);
        selection.cycle(CycleDirection::Up);
        selection.cycle(CycleDirection::Up);
        selection.cycle(CycleDirection::Up);
        assert_eq!(selection.selected(), 19);
        assert_eq!(selection.window_start(5), 15);
    }

    #[test]
    fn test_window_start_with_no_room() {
        let mut selection = SessionSelection::new(3);
        selection.cycle(CycleDirection::Down);
        assert_eq!(selection.window_start(0), 1);
    }
}
