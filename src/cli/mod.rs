//! Command-line interface for the `emap` binary.

pub mod commands;
