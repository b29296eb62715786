//! One interactive calculation: banner, prompts, calculation, report.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::calculator::{Outcome, calculate, calculate_keyword};
use crate::core::operation::Operation;
use crate::input::{RetryPolicy, request_operands, request_operation};
use crate::io::config::CalcConfig;
use crate::io::console::{LineSink, LineSource};

pub const BANNER: &str = "[ssgs-calc] initialized.";
pub const CALCULATION_FAILED: &str =
    "Calculation could not be performed due to an invalid operation.";

/// What a completed session calculated and reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReport {
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
    pub outcome: Outcome,
}

/// Run the full prompt, calculate, report sequence against `console`.
///
/// Retry notices and outcome diagnostics are written as they happen. Errors
/// are reserved for failures of the console itself or an exhausted retry
/// limit; division by zero still completes the session.
pub fn run_session<C>(console: &mut C, config: &CalcConfig) -> Result<SessionReport>
where
    C: LineSource + LineSink,
{
    let policy = RetryPolicy::from_config(config);
    console.write_line(BANNER)?;

    let operation = request_operation(console, policy)?;
    let (lhs, rhs) = request_operands(console, policy)?;

    let outcome = evaluate(console, operation, lhs, rhs)?;
    report_outcome(console, operation.keyword(), outcome)?;
    info!(%operation, lhs, rhs, ?outcome, "session complete");

    Ok(SessionReport {
        operation,
        lhs,
        rhs,
        outcome,
    })
}

/// Calculate and write the outcome's diagnostic line, if it has one.
pub fn evaluate<S: LineSink>(
    sink: &mut S,
    operation: Operation,
    lhs: f64,
    rhs: f64,
) -> Result<Outcome> {
    let outcome = calculate(operation, lhs, rhs);
    emit_diagnostic(sink, outcome)?;
    Ok(outcome)
}

/// Like [`evaluate`], for an operation keyword that was never validated.
pub fn evaluate_keyword<S: LineSink>(
    sink: &mut S,
    keyword: &str,
    lhs: f64,
    rhs: f64,
) -> Result<Outcome> {
    let outcome = calculate_keyword(keyword, lhs, rhs);
    emit_diagnostic(sink, outcome)?;
    Ok(outcome)
}

/// Write the final line for `outcome`, labelled with the operation keyword.
pub fn report_outcome<S: LineSink>(sink: &mut S, keyword: &str, outcome: Outcome) -> Result<()> {
    match outcome.display_value() {
        Some(value) => {
            sink.write_line(&format!("The result of the {keyword} operation is: {value}"))
        }
        None => sink.write_line(CALCULATION_FAILED),
    }
}

fn emit_diagnostic<S: LineSink>(sink: &mut S, outcome: Outcome) -> Result<()> {
    if let Some(line) = outcome.diagnostic() {
        debug!(?outcome, "calculation produced no value");
        sink.write_line(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::{DIVISION_BY_ZERO, INVALID_OPERATION};
    use crate::input::{INVALID_NUMBER_NOTICE, INVALID_OPERATION_NOTICE};
    use crate::test_support::ScriptedConsole;

    fn run(lines: &[&str]) -> (SessionReport, Vec<String>) {
        let mut console = ScriptedConsole::new(lines.iter().copied());
        let report = run_session(&mut console, &CalcConfig::default()).expect("session");
        (report, console.output().to_vec())
    }

    #[test]
    fn sum_reports_result() {
        let (report, output) = run(&["sum", "5", "3"]);
        assert_eq!(report.outcome, Outcome::Value(8.0));
        assert_eq!(output, [BANNER, "The result of the sum operation is: 8"]);
    }

    #[test]
    fn division_by_zero_reports_undefined() {
        let (report, output) = run(&["div", "6", "0"]);
        assert_eq!(report.outcome, Outcome::DivisionByZero);
        assert_eq!(
            output,
            [
                BANNER,
                DIVISION_BY_ZERO,
                "The result of the div operation is: undefined"
            ]
        );
    }

    #[test]
    fn invalid_operation_is_retried() {
        let (report, output) = run(&["bogus", "mul", "5", "3"]);
        assert_eq!(report.operation, Operation::Multiply);
        assert_eq!(
            output,
            [
                BANNER,
                INVALID_OPERATION_NOTICE,
                "The result of the mul operation is: 15"
            ]
        );
    }

    #[test]
    fn invalid_number_is_retried() {
        let (report, output) = run(&["sub", "abc", "5", "3"]);
        assert_eq!((report.lhs, report.rhs), (5.0, 3.0));
        assert_eq!(
            output,
            [
                BANNER,
                INVALID_NUMBER_NOTICE,
                "The result of the sub operation is: 2"
            ]
        );
    }

    #[test]
    fn fractional_result_uses_shortest_digits() {
        let (_, output) = run(&["div", "10", "4"]);
        assert_eq!(output[1], "The result of the div operation is: 2.5");
    }

    #[test]
    fn retry_limit_aborts_session() {
        let mut console = ScriptedConsole::new(["x", "y"]);
        let config = CalcConfig {
            max_attempts: Some(1),
        };
        let err = run_session(&mut console, &config).expect_err("limit");
        assert!(err.to_string().contains("retry limit"));
        assert_eq!(console.output(), [BANNER, INVALID_OPERATION_NOTICE]);
    }

    #[test]
    fn evaluate_writes_one_diagnostic_for_division_by_zero() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let outcome = evaluate(&mut console, Operation::Divide, 5.0, 0.0).expect("evaluate");
        assert_eq!(outcome, Outcome::DivisionByZero);
        assert_eq!(console.output(), [DIVISION_BY_ZERO]);
    }

    #[test]
    fn evaluate_writes_nothing_for_values() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let outcome = evaluate(&mut console, Operation::Sum, 1.0, 2.0).expect("evaluate");
        assert_eq!(outcome, Outcome::Value(3.0));
        assert!(console.output().is_empty());
    }

    #[test]
    fn unknown_keyword_reports_failure_line() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let outcome = evaluate_keyword(&mut console, "invalid", 5.0, 3.0).expect("evaluate");
        report_outcome(&mut console, "invalid", outcome).expect("report");
        assert_eq!(outcome, Outcome::InvalidOperation);
        assert_eq!(console.output(), [INVALID_OPERATION, CALCULATION_FAILED]);
    }
}
