//! Employee Hours Utilization Engine
//!
//! This crate computes, per employee and date range, how many expected working
//! hours were billed, logged as non-billable, or left untracked. Expected hours
//! account for weekends, holiday lists and changes in employment degree.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
