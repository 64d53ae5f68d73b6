//! # Roster Architecture
//!
//! Roster is a **UI-agnostic person-record library**: a form captures people,
//! a table lists them, and a pager windows the table into fixed-size pages.
//! The terminal client in `cli/` is one possible front end; the same core could
//! sit behind a browser page or a REST API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, renders the table    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session state container: store + pager + form            │
//! │  - Re-clamps the page after every mutation                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns CmdResult                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`pagination`] and [`form`] are leaf modules used by the layers above: the
//! first derives the visible window, the second validates input and tracks
//! edit mode.
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never prints and never exits. Notices travel back as leveled
//! [`commands::CmdMessage`]s for the UI to show.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all intents
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`pagination`]: Window derivation and page navigation
//! - [`form`]: Form values, edit mode and validation
//! - [`model`]: Core data types (`Person`, `PersonFields`, `Country`)
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod pagination;
pub mod store;
