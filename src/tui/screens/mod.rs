//! TUI screen implementations.

pub mod calculator;
pub mod help;

pub use calculator::{CalculatorState, draw_calculator, tip_label};
pub use help::{HelpState, draw_help};
