use super::DataStore;
use crate::model::{Person, PersonFields, PersonId};

/// In-memory record store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Person>,
    // Highest id ever issued, so ids are never recycled after a delete.
    last_issued: PersonId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> PersonId {
        let current_max = self.records.iter().map(|p| p.id).max().unwrap_or(0);
        current_max.max(self.last_issued) + 1
    }

    fn position(&self, id: PersonId) -> Option<usize> {
        self.records.iter().position(|p| p.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn create(&mut self, fields: PersonFields) -> Person {
        let person = Person::new(self.next_id(), fields);
        self.last_issued = person.id;
        self.records.push(person.clone());
        person
    }

    fn update(&mut self, id: PersonId, fields: PersonFields) -> Option<Person> {
        let pos = self.position(id)?;
        let slot = &mut self.records[pos];
        slot.fields = fields;
        Some(slot.clone())
    }

    fn delete(&mut self, id: PersonId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }

    fn list_all(&self) -> Vec<Person> {
        self.records.clone()
    }

    fn get(&self, id: PersonId) -> Option<Person> {
        self.records.iter().find(|p| p.id == id).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Country;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                let fields = PersonFields::new(
                    format!("Person {}", n),
                    format!("person{}@example.com", n),
                    format!("{} Main St", n),
                )
                .with_city("Toronto")
                .with_country(Country::Canada);
                self.store.create(fields);
            }
            self
        }

        pub fn with_person(mut self, full_name: &str) -> Self {
            let fields = PersonFields::new(full_name, "someone@example.com", "1 Elm St")
                .with_country(Country::America);
            self.store.create(fields);
            self
        }
    }
}
