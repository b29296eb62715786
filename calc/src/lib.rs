//! Interactive arithmetic calculator.
//!
//! A session prompts for an operation (`sum`, `sub`, `mul`, `div`) and two
//! operands, re-prompting until each input is valid, then prints the result.
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (operation keywords, lenient number parsing,
//!   the calculator and its tagged outcome). No I/O.
//! - **[`io`]**: The console capabilities and configuration loading.
//!
//! [`input`] and [`session`] coordinate the two to implement the CLI.

pub mod core;
pub mod exit_codes;
pub mod input;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
