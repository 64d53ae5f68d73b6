//! # Storage Layer
//!
//! The [`DataStore`] trait is the sole authority over the record set and over
//! identity assignment. Nothing else in the crate mints ids or reorders records.
//!
//! ## Identity
//!
//! A new record gets `1 + max(existing ids)`, or `1` on an empty store. The
//! store also remembers the highest id it ever issued so that deleting the
//! newest record and creating again never hands the same id out twice:
//!
//! ```text
//! create ×3        -> 1, 2, 3
//! delete 2, create -> 4
//! delete 4, create -> 5   (not 4)
//! ```
//!
//! ## Ordering
//!
//! - `create` appends.
//! - `update` replaces in place, position unchanged.
//! - `delete` removes, the remainder keeps its order.
//!
//! ## Missing ids
//!
//! Neither `update` nor `delete` treats an unknown id as an error. They return
//! `None` / `false` and leave it to the caller to surface the miss.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. Records live as long as the
//!   process does.

use crate::model::{Person, PersonFields, PersonId};

pub mod memory;

/// Abstract interface for person storage.
pub trait DataStore {
    /// Assign a fresh id and append a new record.
    fn create(&mut self, fields: PersonFields) -> Person;

    /// Replace every field but the id. `None` when no record has `id`.
    fn update(&mut self, id: PersonId, fields: PersonFields) -> Option<Person>;

    /// Remove a record. Returns whether anything was removed.
    fn delete(&mut self, id: PersonId) -> bool;

    /// Snapshot of all records in order.
    fn list_all(&self) -> Vec<Person>;

    /// Copy of a single record.
    fn get(&self, id: PersonId) -> Option<Person>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
