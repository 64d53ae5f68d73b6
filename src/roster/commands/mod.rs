//! # Command Layer
//!
//! The **core business logic** of roster. Each operation lives in its own
//! submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Paging state**: commands never touch the current page; the session
//!   re-clamps it after a mutation
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected`: records created, updated or deleted
//! - `listed`: records to display
//! - `messages`: leveled notices (info, success, warning, error)
//!
//! A missing id is never an `Err`. It comes back as a `Warning` message so the
//! UI can show it (or not) without the session failing.
//!
//! ## Testing Strategy
//!
//! **This is where most testing lives.** Tests run against `InMemoryStore`
//! and assert on `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a record
//! - [`update`]: Replace a record's fields
//! - [`delete`]: Remove a record
//! - [`get`]: Fetch one record
//! - [`list`]: The visible page of records
//! - [`submit`]: Validate the form and dispatch create or update

use crate::model::Person;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod submit;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Person>,
    pub listed: Vec<Person>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Person>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Person>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

pub(crate) fn not_found(id: crate::model::PersonId) -> CmdMessage {
    CmdMessage::warning(format!("Record not found: #{}", id))
}
