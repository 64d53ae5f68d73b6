//! # API Facade
//!
//! [`RosterApi`] is the one state container of a session: the record store,
//! the pager and the form. It is built once at startup and handed by `&mut`
//! to whatever UI drives it. There are no globals.
//!
//! ## Intents
//!
//! | UI intent | Method |
//! |-----------|--------|
//! | submit the form | [`RosterApi::submit_form`] |
//! | click "Edit" on a row | [`RosterApi::request_edit`] |
//! | click "Delete" on a row | [`RosterApi::request_delete`] |
//! | next / prev page | [`RosterApi::request_next_page`], [`RosterApi::request_prev_page`] |
//!
//! Every intent that can change the record set re-clamps the pager before
//! returning, so the current page is always within `1..=total_pages`.
//!
//! ## Render State
//!
//! [`RosterApi::view`] derives everything a UI shows from the current store
//! and page. Nothing in it is cached.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr, or formatting

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::form::{FieldLimits, FormInput, FormState, FormValues};
use crate::model::{Person, PersonId};
use crate::pagination::{PageWindow, Pager};
use crate::store::DataStore;
use serde::Serialize;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub records: Vec<Person>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    /// How many rows the table shows ("Showing N Entries").
    pub showing: usize,
    pub form: FormValues,
    pub edit_mode: bool,
    pub submit_label: String,
}

/// The session facade, generic over the record store.
pub struct RosterApi<S: DataStore> {
    store: S,
    pager: Pager,
    form: FormState,
    limits: FieldLimits,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, pager: Pager, limits: FieldLimits) -> Self {
        Self {
            store,
            pager,
            form: FormState::new(),
            limits,
        }
    }

    pub fn from_config(store: S, config: &RosterConfig) -> Result<Self> {
        Ok(Self::new(
            store,
            Pager::new(config.page_size()?),
            config.field_limits(),
        ))
    }

    /// Apply `input` to the form, then submit it.
    ///
    /// Validation failures come back as `Err` with the form left as typed.
    pub fn submit_form(&mut self, input: FormInput) -> Result<CmdResult> {
        self.form.apply(input);
        let mut result = commands::submit::run(&mut self.store, &mut self.form, &self.limits)?;
        self.reclamp(&mut result);
        Ok(result)
    }

    /// Load a record into the form and switch to edit mode.
    pub fn request_edit(&mut self, id: PersonId) -> CmdResult {
        let mut result = commands::get::run(&self.store, id);
        if let Some(person) = result.listed.first().cloned() {
            self.form.load_record(&person);
            result.add_message(CmdMessage::info(format!(
                "Editing #{}: {}",
                person.id,
                person.full_name()
            )));
        }
        result
    }

    pub fn request_delete(&mut self, id: PersonId) -> CmdResult {
        let mut result = commands::delete::run(&mut self.store, id);
        if self.form.edit_target() == Some(id) && !result.affected.is_empty() {
            self.form.reset();
            result.add_message(CmdMessage::info("Record being edited was deleted; form cleared"));
        }
        self.reclamp(&mut result);
        result
    }

    pub fn request_next_page(&mut self) -> CmdResult {
        let before = self.pager.current_page();
        let after = self.pager.next(self.store.len());
        self.page_change_result(before, after)
    }

    pub fn request_prev_page(&mut self) -> CmdResult {
        let before = self.pager.current_page();
        let after = self.pager.prev();
        self.page_change_result(before, after)
    }

    /// Drop any edit in progress and clear the form.
    pub fn cancel_edit(&mut self) -> CmdResult {
        let was_editing = self.form.edit_target();
        self.form.reset();
        match was_editing {
            Some(id) => CmdResult::default()
                .with_message(CmdMessage::info(format!("Stopped editing #{}", id))),
            None => CmdResult::default(),
        }
    }

    pub fn window(&self) -> PageWindow<Person> {
        commands::list::window(&self.store, &self.pager)
    }

    pub fn view(&self) -> SessionView {
        let window = self.window();
        SessionView {
            showing: window.visible.len(),
            records: window.visible,
            current_page: window.page,
            total_pages: window.total_pages,
            total_records: window.total_records,
            form: self.form.values().clone(),
            edit_mode: self.form.edit_mode(),
            submit_label: self.form.submit_label().to_string(),
        }
    }

    pub fn list_all(&self) -> Vec<Person> {
        self.store.list_all()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn reclamp(&mut self, result: &mut CmdResult) {
        let before = self.pager.current_page();
        if self.pager.clamp(self.store.len()) {
            result.add_message(CmdMessage::info(format!(
                "Moved from page {} to page {}",
                before,
                self.pager.current_page()
            )));
        }
    }

    fn page_change_result(&self, before: usize, after: usize) -> CmdResult {
        let total = self.pager.total_pages(self.store.len());
        let message = if before == after {
            CmdMessage::info(format!("Already on page {} of {}", after, total))
        } else {
            CmdMessage::info(format!("Page {} of {}", after, total))
        };
        CmdResult::default().with_message(message)
    }
}

pub use crate::commands::MessageLevel;
pub use crate::form::FieldError;
