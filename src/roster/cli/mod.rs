//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It plays the part of
//! the form, the table and the pager buttons: each session line is a user
//! intent, forwarded to [`roster::api::RosterApi`], and the page is redrawn
//! after it.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Reads stdin and writes stdout/stderr
//! - Handles argument parsing (process arguments and session lines alike)
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions for the process and for session lines
//! - `commands`: `run()`, the session loop and per-intent handlers
//! - `print`: table, form and message rendering

mod commands;
mod print;
mod setup;

pub use commands::run;
