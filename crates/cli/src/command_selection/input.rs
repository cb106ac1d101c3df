use std::io::{stdin, stdout, IsTerminal, StdinLock, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use unicode_width::UnicodeWidthStr;
use walrus_prompt_core::error::{Error, Result};
use walrus_prompt_core::prompt::{LineInput, ReaderLines};

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// What a key press does to the line being edited.
#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    Insert(char),
    Erase,
    Submit,
    Cancel,
    Ignore,
}

fn decode_line_key(code: KeyCode, modifiers: KeyModifiers, line_is_empty: bool) -> LineEdit {
    let control = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('c') if control => LineEdit::Cancel,
        KeyCode::Char('d') if control && line_is_empty => LineEdit::Cancel,
        KeyCode::Char(_) if control => LineEdit::Ignore,
        KeyCode::Char(c) => LineEdit::Insert(c),
        KeyCode::Backspace => LineEdit::Erase,
        KeyCode::Enter => LineEdit::Submit,
        _ => LineEdit::Ignore,
    }
}

/// Screen cell where the answer being typed begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineOrigin {
    column: u16,
    row: u16,
}

impl LineOrigin {
    /// Moves the origin up by however many rows the terminal scrolled to fit
    /// an answer `width` cells wide.
    fn settle(&mut self, width: usize, (columns, rows): (u16, u16)) {
        let columns = usize::from(columns.max(1));
        let last_row = usize::from(rows.max(1) - 1);
        // A line that exactly fills the last column has not wrapped yet
        let cells = usize::from(self.column) + width;
        let end_row = usize::from(self.row) + cells.saturating_sub(1) / columns;
        let scrolled = end_row.saturating_sub(last_row);
        self.row = self.row.saturating_sub(u16::try_from(scrolled).unwrap_or(u16::MAX));
    }
}

/// Reads answer lines from the terminal in raw mode so Ctrl-C reaches the
/// prompt as a cancellation instead of killing the process.
pub struct TerminalLines;

impl LineInput for TerminalLines {
    fn read_line(&mut self) -> Result<String> {
        let _raw_mode_guard = RawModeGuard::enable()?;
        let mut stdout = stdout();
        let mut line = String::new();
        let (column, row) = cursor::position()?;
        let mut origin = LineOrigin { column, row };

        loop {
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            else {
                continue;
            };

            match decode_line_key(code, modifiers, line.is_empty()) {
                LineEdit::Insert(c) => {
                    line.push(c);
                    queue!(stdout, Print(c))?;
                    origin.settle(line.width(), terminal::size()?);
                }
                LineEdit::Erase => {
                    // Redraw from the start of the answer
                    if line.pop().is_some() {
                        queue!(
                            stdout,
                            MoveTo(origin.column, origin.row),
                            Clear(ClearType::FromCursorDown),
                            Print(&line)
                        )?;
                    }
                }
                LineEdit::Submit => {
                    queue!(stdout, Print("\r\n"))?;
                    stdout.flush()?;
                    return Ok(line);
                }
                LineEdit::Cancel => {
                    queue!(stdout, Print("\r\n"))?;
                    stdout.flush()?;
                    return Err(Error::Cancelled);
                }
                LineEdit::Ignore => {}
            }

            stdout.flush()?;
        }
    }
}

/// Where prompt answers come from for this run.
pub enum ConsoleInput {
    Terminal(TerminalLines),
    Piped(ReaderLines<StdinLock<'static>>),
}

impl LineInput for ConsoleInput {
    fn read_line(&mut self) -> Result<String> {
        match self {
            ConsoleInput::Terminal(lines) => lines.read_line(),
            ConsoleInput::Piped(lines) => lines.read_line(),
        }
    }
}

/// Picks raw terminal input when stdin is a terminal, buffered stdin otherwise.
///
/// Piped input ends the session as a cancellation once it runs out. Ctrl-C
/// typed while stdin is piped is not seen here: the terminal sends SIGINT and
/// the process exits without the cancellation message.
pub fn console_input() -> ConsoleInput {
    let stdin = stdin();
    if stdin.is_terminal() {
        ConsoleInput::Terminal(TerminalLines)
    } else {
        ConsoleInput::Piped(ReaderLines::new(stdin.lock()))
    }
}
