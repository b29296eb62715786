//! I/O helpers for the interactive session.

pub mod config;
pub mod console;
