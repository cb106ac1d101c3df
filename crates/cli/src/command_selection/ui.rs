use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color::{Green, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use walrus_prompt_core::error::Result;

use super::types::{Frame, MenuKey};
use super::Screen;

/// Column the command rows start at.
const ROW_INDENT: u16 = 2;
/// Row of the first command, below the title and help lines.
const FIRST_ROW: u16 = 2;

/// The menu's view of the real terminal.
///
/// Creating one switches to the alternate screen in raw mode with the cursor
/// hidden; dropping it puts the terminal back, whichever way the menu ends.
pub struct CrosstermScreen {
    stdout: Stdout,
}

impl CrosstermScreen {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched into menu mode.
    pub fn new() -> Result<Self> {
        let mut screen = Self { stdout: stdout() };

        screen.stdout.execute(EnterAlternateScreen)?;
        enable_raw_mode()?;
        screen.stdout.execute(cursor::Hide)?;

        Ok(screen)
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(
            self.stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetForegroundColor(Green),
            SetAttribute(Attribute::Bold),
            Print(&frame.header),
            SetAttribute(Attribute::Reset),
            MoveTo(0, 1),
            SetForegroundColor(Yellow),
            Print(&frame.help),
            SetForegroundColor(Reset),
        )?;

        for (row, menu_row) in (FIRST_ROW..).zip(&frame.rows) {
            queue!(self.stdout, MoveTo(ROW_INDENT, row))?;

            if menu_row.is_selected {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(&menu_row.text),
                    SetAttribute(Attribute::Reset),
                )?;
            } else {
                queue!(self.stdout, Print(&menu_row.text))?;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => return Ok(decode_key(code, modifiers)),
                Event::Resize(_, _) => return Ok(MenuKey::Redraw),
                _ => {}
            }
        }
    }
}

fn decode_key(code: KeyCode, modifiers: KeyModifiers) -> MenuKey {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => MenuKey::Interrupt,
        KeyCode::Up | KeyCode::Char('k') => MenuKey::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuKey::Down,
        KeyCode::Enter => MenuKey::Confirm,
        KeyCode::Char('q') => MenuKey::Quit,
        _ => MenuKey::Redraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_navigation_keys() {
        assert_eq!(decode_key(KeyCode::Up, KeyModifiers::NONE), MenuKey::Up);
        assert_eq!(decode_key(KeyCode::Char('k'), KeyModifiers::NONE), MenuKey::Up);
        assert_eq!(decode_key(KeyCode::Down, KeyModifiers::NONE), MenuKey::Down);
        assert_eq!(decode_key(KeyCode::Char('j'), KeyModifiers::NONE), MenuKey::Down);
    }

    #[test]
    fn test_decode_actions() {
        assert_eq!(decode_key(KeyCode::Enter, KeyModifiers::NONE), MenuKey::Confirm);
        assert_eq!(decode_key(KeyCode::Char('q'), KeyModifiers::NONE), MenuKey::Quit);
        assert_eq!(
            decode_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            MenuKey::Interrupt
        );
    }

    #[test]
    fn test_decode_other_keys_redraw() {
        assert_eq!(decode_key(KeyCode::Char('c'), KeyModifiers::NONE), MenuKey::Redraw);
        assert_eq!(decode_key(KeyCode::Esc, KeyModifiers::NONE), MenuKey::Redraw);
        assert_eq!(decode_key(KeyCode::Char('x'), KeyModifiers::NONE), MenuKey::Redraw);
    }
}
