//! Line-based prompt primitives.
//!
//! Every question the front-end asks after the menu goes through a
//! [`Prompter`], which writes the prompt to any [`Write`] and reads answers
//! from a [`LineInput`]. Invalid answers are handled here by asking again;
//! the only way out of a prompt without an answer is [`Error::Cancelled`].

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// A source of answer lines.
pub trait LineInput {
    /// Reads one line without its terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] when the user interrupts or the input is
    /// exhausted.
    fn read_line(&mut self) -> Result<String>;
}

impl<T: LineInput + ?Sized> LineInput for &mut T {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}

/// Line input over any buffered reader (piped stdin, test buffers).
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ReaderLines<R> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub struct Prompter<I, W> {
    input: I,
    output: W,
}

impl<I: LineInput, W: Write> Prompter<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let line = self.input.read_line()?;
        Ok(line.trim().to_string())
    }

    /// Asks until a non-empty answer is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the user interrupts, or an I/O error.
    pub fn required(&mut self, label: &str) -> Result<String> {
        loop {
            let value = self.ask(&format!("{label}: "))?;
            if !value.is_empty() {
                return Ok(value);
            }

            self.say("This input is required. Please try again.")?;
        }
    }

    /// Asks once; an empty answer means "not set".
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the user interrupts, or an I/O error.
    pub fn optional(&mut self, label: &str) -> Result<Option<String>> {
        let value = self.ask(&format!("{label}: "))?;
        Ok((!value.is_empty()).then_some(value))
    }

    /// Asks a yes/no question. An empty answer means no.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the user interrupts, or an I/O error.
    pub fn yes_no(&mut self, label: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{label} (y/N): "))?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.say("Please answer 'y' or 'n'")?,
            }
        }
    }

    /// Asks until the answer is one of `tokens`, returning its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the user interrupts, or an I/O error.
    pub fn choice(&mut self, label: &str, tokens: &[&str]) -> Result<usize> {
        loop {
            let answer = self.ask(&format!("{label}: "))?;
            if let Some(position) = tokens.iter().position(|token| *token == answer) {
                return Ok(position);
            }

            self.say("Invalid choice. Please try again.")?;
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<ReaderLines<Cursor<Vec<u8>>>, Vec<u8>> {
        Prompter::new(
            ReaderLines::new(Cursor::new(input.as_bytes().to_vec())),
            Vec::new(),
        )
    }

    fn written(prompter: &Prompter<ReaderLines<Cursor<Vec<u8>>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output().clone()).unwrap()
    }

    #[test]
    fn test_required_skips_empty_answers() {
        let mut p = prompter("\n   \n\t\n  value  \n");
        assert_eq!(p.required("Enter FILE_PATH").unwrap(), "value");

        let output = written(&p);
        assert_eq!(output.matches("Enter FILE_PATH: ").count(), 4);
        assert_eq!(
            output
                .matches("This input is required. Please try again.")
                .count(),
            3
        );
    }

    #[test]
    fn test_required_cancelled_on_end_of_input() {
        let mut p = prompter("\n\n");
        assert!(matches!(p.required("Enter blob ID"), Err(Error::Cancelled)));
    }

    #[test]
    fn test_optional_empty_is_unset() {
        let mut p = prompter("\n  42 \n");
        assert_eq!(p.optional("Amount").unwrap(), None);
        assert_eq!(p.optional("Amount").unwrap(), Some("42".to_string()));
    }

    #[test]
    fn test_yes_no_answers() {
        let mut p = prompter("y\nYES\nYes\n\nn\nNO\nnO\n");
        assert!(p.yes_no("q").unwrap());
        assert!(p.yes_no("q").unwrap());
        assert!(p.yes_no("q").unwrap());
        assert!(!p.yes_no("q").unwrap());
        assert!(!p.yes_no("q").unwrap());
        assert!(!p.yes_no("q").unwrap());
        assert!(!p.yes_no("q").unwrap());
    }

    #[test]
    fn test_yes_no_reprompts_on_other_input() {
        let mut p = prompter("maybe\nyep\ny\n");
        assert!(p.yes_no("Make blob deletable?").unwrap());

        let output = written(&p);
        assert_eq!(output.matches("Make blob deletable? (y/N): ").count(), 3);
        assert_eq!(output.matches("Please answer 'y' or 'n'").count(), 2);
    }

    #[test]
    fn test_yes_no_maybe_then_end_of_input_does_not_answer() {
        let mut p = prompter("maybe\n");
        assert!(matches!(p.yes_no("q"), Err(Error::Cancelled)));
    }

    #[test]
    fn test_choice_reprompts_until_valid() {
        let mut p = prompter("0\n4\nfile\n 3 \n");
        assert_eq!(p.choice("Enter your choice (1-3)", &["1", "2", "3"]).unwrap(), 2);

        let output = written(&p);
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 3);
    }

    #[test]
    fn test_reader_lines_strips_terminators() {
        let mut lines = ReaderLines::new(Cursor::new(b"one\r\ntwo\nthree".to_vec()));
        assert_eq!(lines.read_line().unwrap(), "one");
        assert_eq!(lines.read_line().unwrap(), "two");
        assert_eq!(lines.read_line().unwrap(), "three");
        assert!(matches!(lines.read_line(), Err(Error::Cancelled)));
    }
}
