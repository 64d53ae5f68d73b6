use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::{PersonFields, PersonId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: PersonId, fields: PersonFields) -> CmdResult {
    match store.update(id, fields) {
        Some(person) => {
            let message = CmdMessage::success(format!(
                "Record updated (#{}): {}",
                person.id,
                person.full_name()
            ));
            CmdResult::default()
                .with_affected(vec![person])
                .with_message(message)
        }
        None => CmdResult::default().with_message(not_found(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_in_place() {
        let mut store = StoreFixture::new().with_people(3).store;
        let mut fields = store.get(2).unwrap().fields;
        fields.full_name = "Second".into();

        let result = run(&mut store, 2, fields);
        assert_eq!(result.affected[0].id, 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let names: Vec<String> = store
            .list_all()
            .iter()
            .map(|p| p.full_name().to_string())
            .collect();
        assert_eq!(names, vec!["Person 1", "Second", "Person 3"]);
    }

    #[test]
    fn missing_id_warns_without_changes() {
        let mut store = StoreFixture::new().with_people(1).store;
        let before = store.list_all();

        let result = run(&mut store, 9, PersonFields::new("X", "x@x", "addr"));
        assert!(result.affected.is_empty());
        assert!(result.has_warnings());
        assert_eq!(result.messages[0].content, "Record not found: #9");
        assert_eq!(store.list_all(), before);
    }
}
