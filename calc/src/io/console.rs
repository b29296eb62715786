//! Line-oriented console capabilities.
//!
//! The session never touches stdin/stdout directly. It asks a [`LineSource`]
//! for input and writes through a [`LineSink`], so tests can drive it with a
//! scripted console instead of a terminal.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use anyhow::{Context, Result, bail};

/// Something that can prompt for and return one line of text.
pub trait LineSource {
    /// Show `prompt` and block until one line is available.
    ///
    /// The returned line has its terminator stripped. End of input is an
    /// error, never an empty line.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Something that accepts whole output lines.
pub trait LineSink {
    fn write_line(&mut self, text: &str) -> Result<()>;
}

/// Console over one reader and one writer, held for the whole run.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Release the handles, returning the writer (useful for inspecting output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Terminal<StdinLock<'static>, StdoutLock<'static>> {
    /// Lock the process stdin and stdout for the lifetime of the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> LineSource for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.writer
            .write_all(prompt.as_bytes())
            .context("write prompt")?;
        self.writer.flush().context("flush prompt")?;

        // Decoded lossily so invalid UTF-8 reaches the retry loops as bad input.
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("read line")?;
        if read == 0 {
            bail!("input closed before a line was entered");
        }
        Ok(strip_line_ending(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead, W: Write> LineSink for Terminal<R, W> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}").context("write line")?;
        self.writer.flush().context("flush line")?;
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
