#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal tip calculator.
//!
//! The calculation itself lives in [`model`] and is a pure function of the
//! bill total, tip percentage, and round-up flag. [`tui`] hosts the
//! single-screen form that feeds it.

pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
