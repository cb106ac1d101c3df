//! Interactive command selection and line input.
//!
//! This module provides the terminal side of `wp`: the scrolling menu the
//! user picks a subcommand from, and the raw-mode line reader the prompts use.
//!
//! # User Interface
//!
//! The menu supports:
//! - Arrow keys or vim-style (j/k) navigation, wrapping at both ends
//! - Enter to select a command
//! - 'q' to quit, Ctrl-C to cancel
//!
//! Drawing and key reading sit behind the [`Screen`] trait so the navigation
//! logic runs the same against a real terminal or a scripted one.

pub mod input;
pub mod types;
pub mod ui;

pub use input::{console_input, ConsoleInput, TerminalLines};
pub use types::{CommandChoice, CycleDirection, Frame, MenuKey, MenuRow, SessionSelection};
pub use ui::CrosstermScreen;

use log::debug;
use walrus_prompt_core::catalog::{Catalog, EXIT_COMMAND};
use walrus_prompt_core::error::{Error, Result};

/// Rows reserved above and below the command list.
pub const HEADER_ROWS: u16 = 4;

const TITLE: &str = "Walrus CLI Menu";
const HELP: &str = "Use ↑/↓ or j/k to navigate, Enter to select, q to quit";
const EXIT_DESCRIPTION: &str = "Exit the program";

/// What the navigator needs from a terminal.
pub trait Screen {
    /// Terminal size as `(columns, rows)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    fn size(&self) -> Result<(u16, u16)>;

    /// Replaces the screen contents with `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Blocks until the next key the menu cares about.
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events fails.
    fn read_key(&mut self) -> Result<MenuKey>;
}

struct MenuEntry<'c> {
    name: &'c str,
    description: &'c str,
    choice: CommandChoice<'c>,
}

fn menu_entries(catalog: &Catalog) -> Vec<MenuEntry<'_>> {
    catalog
        .commands()
        .map(|spec| MenuEntry {
            name: &spec.name,
            description: &spec.description,
            choice: CommandChoice::Command(spec),
        })
        .chain(std::iter::once(MenuEntry {
            name: EXIT_COMMAND,
            description: EXIT_DESCRIPTION,
            choice: CommandChoice::Exit,
        }))
        .collect()
}

/// Cuts `text` to at most `width` characters.
fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn build_frame(entries: &[MenuEntry<'_>], selection: &SessionSelection, size: (u16, u16)) -> Frame {
    let (width, height) = size;
    let width = usize::from(width);
    let viewport = usize::from(height.saturating_sub(HEADER_ROWS)).max(1);
    let start = selection.window_start(viewport);

    let rows = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(viewport)
        .map(|(i, entry)| {
            let is_selected = i == selection.selected();
            let marker = if is_selected { '>' } else { ' ' };
            MenuRow {
                text: truncate(
                    &format!("{marker} {}: {}", entry.name, entry.description),
                    width.saturating_sub(3),
                ),
                is_selected,
            }
        })
        .collect();

    Frame {
        header: format!("{TITLE:^width$}"),
        help: truncate(HELP, width),
        rows,
    }
}

/// Runs the menu until the user picks a command, quits or cancels.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] on Ctrl-C, or any error from the screen.
pub fn prompt_for_command_choice<'c, S: Screen>(
    screen: &mut S,
    catalog: &'c Catalog,
) -> Result<CommandChoice<'c>> {
    let entries = menu_entries(catalog);
    let mut selection = SessionSelection::new(entries.len());

    loop {
        let frame = build_frame(&entries, &selection, screen.size()?);
        screen.draw(&frame)?;

        match screen.read_key()? {
            MenuKey::Up => selection.cycle(CycleDirection::Up),
            MenuKey::Down => selection.cycle(CycleDirection::Down),
            MenuKey::Confirm => {
                let choice = entries[selection.selected()].choice;
                debug!("Selected `{}` from the menu", choice);
                return Ok(choice);
            }
            MenuKey::Quit => return Ok(CommandChoice::Exit),
            MenuKey::Interrupt => return Err(Error::Cancelled),
            MenuKey::Redraw => {}
        }
    }
}
