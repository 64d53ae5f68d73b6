use crate::commands::{not_found, CmdResult};
use crate::model::PersonId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: PersonId) -> CmdResult {
    match store.get(id) {
        Some(person) => CmdResult::default().with_listed(vec![person]),
        None => CmdResult::default().with_message(not_found(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_existing_record() {
        let store = StoreFixture::new().with_people(2).store;
        let result = run(&store, 2);
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].full_name(), "Person 2");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_on_missing_record() {
        let store = StoreFixture::new().store;
        let result = run(&store, 1);
        assert!(result.listed.is_empty());
        assert!(result.has_warnings());
    }
}
