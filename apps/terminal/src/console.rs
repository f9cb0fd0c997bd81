//! # Console
//!
//! Line-oriented prompt/response over any `BufRead` + `Write` pair.
//! The binary uses locked stdin/stdout; tests use a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{TerminalError, TerminalResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> TerminalResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes preformatted text as-is (e.g. a rendered receipt).
    pub fn print(&mut self, text: &str) -> TerminalResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> TerminalResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Shows `label` without a newline and reads the answer.
    ///
    /// The trailing line ending is stripped; other whitespace is kept for
    /// the caller to interpret. Bytes that are not UTF-8 become U+FFFD, so
    /// such a line reaches the caller as unparseable text instead of an
    /// I/O error.
    ///
    /// ## Errors
    /// `InputClosed` at end of input.
    pub fn prompt(&mut self, label: &str) -> TerminalResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(TerminalError::InputClosed);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Gives back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }
}
