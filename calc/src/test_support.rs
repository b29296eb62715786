//! Test-only console that replays scripted input lines.

use std::collections::VecDeque;

use anyhow::{Result, bail};

use crate::io::console::{LineSink, LineSource};

/// Scripted [`LineSource`] + [`LineSink`] that records every prompt and line.
///
/// Once the script is exhausted, reads fail the same way a closed terminal does.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines written so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of read attempts, including the one that hit end of input.
    pub fn reads(&self) -> usize {
        self.prompts.len()
    }
}

impl LineSource for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.input.pop_front() {
            Some(line) => Ok(line),
            None => bail!("input closed before a line was entered"),
        }
    }
}

impl LineSink for ScriptedConsole {
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
