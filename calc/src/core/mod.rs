//! Deterministic, pure logic for the calculator.
//!
//! Core modules must be free of I/O side effects. Prompting and reporting
//! live in [`crate::input`] and [`crate::session`].

pub mod calculator;
pub mod number;
pub mod operation;
