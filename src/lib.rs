//! Return-on-investment projection for adopting AI tooling.
//!
//! [`services::roi_calculation::compute`] is the pure core; the remaining
//! modules load scenarios, render reports and charts, and drive the CLI.

pub mod commands;
pub mod domain;
pub mod logging;
pub mod services;
