//! Prompting with validation and retry.
//!
//! Each request keeps asking until the user supplies something valid. Every
//! rejected attempt writes exactly one notice line. By default there is no
//! attempt cap; a [`RetryPolicy::Limited`] turns exhaustion into an error.

use anyhow::{Result, bail};
use tracing::debug;

use crate::core::number::parse_leading_number;
use crate::core::operation::Operation;
use crate::io::config::CalcConfig;
use crate::io::console::{LineSink, LineSource};

pub const OPERATION_PROMPT: &str = "Please enter an arithmetic operation: sum, sub, mul or div: ";
pub const OPERATION_RETRY_PROMPT: &str =
    "Please enter an arithmetic operation: sum, sub, mul, or div: ";
pub const FIRST_NUMBER_PROMPT: &str = "Please enter the first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Please enter the second number: ";

pub const INVALID_OPERATION_NOTICE: &str = "Invalid operation. Please retype your choice.";
pub const INVALID_NUMBER_NOTICE: &str = "Invalid input. Please retype your choice.";

/// How many attempts a single request may take.
///
/// `Unbounded` is the interactive behaviour: prompts repeat until the input
/// is valid. `Limited` departs from that and is only used when
/// `max_attempts` is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Keep asking until the input is valid.
    #[default]
    Unbounded,
    /// Allow at most this many attempts per request.
    Limited(u32),
}

impl RetryPolicy {
    pub fn from_config(config: &CalcConfig) -> Self {
        match config.max_attempts {
            Some(max) => RetryPolicy::Limited(max),
            None => RetryPolicy::Unbounded,
        }
    }
}

/// Ask for an operation until one of the known keywords is entered.
pub fn request_operation<C>(console: &mut C, policy: RetryPolicy) -> Result<Operation>
where
    C: LineSource + LineSink,
{
    let mut prompt = OPERATION_PROMPT;
    let mut attempt = 1;
    loop {
        ensure_attempt_allowed(policy, attempt)?;
        let line = console.read_line(prompt)?;
        match line.parse::<Operation>() {
            Ok(operation) => {
                debug!(%operation, attempt, "operation accepted");
                return Ok(operation);
            }
            Err(err) => {
                debug!(%err, attempt, "operation rejected");
                console.write_line(INVALID_OPERATION_NOTICE)?;
            }
        }
        prompt = OPERATION_RETRY_PROMPT;
        attempt += 1;
    }
}

/// Ask for a finite number, re-using `prompt` on every retry.
pub fn request_number<C>(console: &mut C, prompt: &str, policy: RetryPolicy) -> Result<f64>
where
    C: LineSource + LineSink,
{
    let mut attempt = 1;
    loop {
        ensure_attempt_allowed(policy, attempt)?;
        let line = console.read_line(prompt)?;
        if let Some(value) = parse_leading_number(&line) {
            debug!(value, attempt, "number accepted");
            return Ok(value);
        }
        debug!(input = %line, attempt, "number rejected");
        console.write_line(INVALID_NUMBER_NOTICE)?;
        attempt += 1;
    }
}

/// Ask for the first operand, then the second.
pub fn request_operands<C>(console: &mut C, policy: RetryPolicy) -> Result<(f64, f64)>
where
    C: LineSource + LineSink,
{
    let lhs = request_number(console, FIRST_NUMBER_PROMPT, policy)?;
    let rhs = request_number(console, SECOND_NUMBER_PROMPT, policy)?;
    Ok((lhs, rhs))
}

fn ensure_attempt_allowed(policy: RetryPolicy, attempt: u32) -> Result<()> {
    match policy {
        RetryPolicy::Limited(max) if attempt > max => {
            bail!("retry limit of {max} attempts exhausted")
        }
        _ => Ok(()),
    }
}
