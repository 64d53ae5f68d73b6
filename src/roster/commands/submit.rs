use crate::commands::{create, update, CmdResult};
use crate::error::Result;
use crate::form::{FieldLimits, FormIntent, FormState};
use crate::store::DataStore;

/// Validate the form and hand it to the store.
///
/// In edit mode the bound id is updated, otherwise a new record is created.
/// On a validation failure nothing changes, form included. Otherwise the form
/// is reset, even when the record being edited has since disappeared.
pub fn run<S: DataStore>(
    store: &mut S,
    form: &mut FormState,
    limits: &FieldLimits,
) -> Result<CmdResult> {
    let fields = form.validate(limits)?;

    let result = match form.intent(fields) {
        FormIntent::Create(fields) => create::run(store, fields),
        FormIntent::Update(id, fields) => update::run(store, id, fields),
    };

    form.reset();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::form::{Field, FormInput};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn input(name: &str) -> FormInput {
        FormInput {
            full_name: Some(name.into()),
            email: Some("x@example.com".into()),
            address: Some("1 Main St".into()),
            city: Some("Denver".into()),
            country: Some("America".into()),
        }
    }

    #[test]
    fn creates_when_not_editing() {
        let mut store = InMemoryStore::new();
        let mut form = FormState::new();
        form.apply(input("Alice"));

        let result = run(&mut store, &mut form, &FieldLimits::default()).unwrap();
        assert_eq!(result.affected[0].id, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn updates_bound_record_and_leaves_edit_mode() {
        let mut store = StoreFixture::new().with_people(3).store;
        let mut form = FormState::new();
        form.load_record(&store.get(2).unwrap());
        form.apply(FormInput {
            full_name: Some("Edited".into()),
            ..Default::default()
        });

        let result = run(&mut store, &mut form, &FieldLimits::default()).unwrap();
        assert_eq!(result.affected[0].id, 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.list_all()[1].full_name(), "Edited");
        assert_eq!(store.list_all()[1].fields.email, "person2@example.com");
        assert!(!form.edit_mode());
    }

    #[test]
    fn invalid_form_changes_nothing() {
        let mut store = StoreFixture::new().with_people(1).store;
        let mut form = FormState::new();
        form.apply(FormInput {
            email: None,
            ..input("Bob")
        });
        let form_before = form.clone();

        match run(&mut store, &mut form, &FieldLimits::default()) {
            Err(RosterError::Validation(errors)) => {
                assert!(errors.for_field(Field::Email).is_some());
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(form, form_before);
    }

    #[test]
    fn missing_city_is_not_stored() {
        let mut store = InMemoryStore::new();
        let mut form = FormState::new();
        form.apply(FormInput {
            city: Some(String::new()),
            ..input("Carol")
        });

        match run(&mut store, &mut form, &FieldLimits::default()) {
            Err(RosterError::Validation(errors)) => {
                assert_eq!(errors.errors().len(), 1);
                assert!(errors.for_field(Field::City).is_some());
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_edit_keeps_edit_mode() {
        let mut store = StoreFixture::new().with_people(1).store;
        let mut form = FormState::new();
        form.load_record(&store.get(1).unwrap());
        form.apply(FormInput {
            full_name: Some(String::new()),
            ..Default::default()
        });

        assert!(run(&mut store, &mut form, &FieldLimits::default()).is_err());
        assert_eq!(form.edit_target(), Some(1));
        assert_eq!(store.get(1).unwrap().full_name(), "Person 1");
    }

    #[test]
    fn editing_a_vanished_record_warns_and_resets() {
        let mut store = StoreFixture::new().with_people(2).store;
        let mut form = FormState::new();
        form.load_record(&store.get(2).unwrap());
        store.delete(2);

        let result = run(&mut store, &mut form, &FieldLimits::default()).unwrap();
        assert!(result.has_warnings());
        assert!(result.affected.is_empty());
        assert_eq!(store.len(), 1);
        assert!(!form.edit_mode());
    }
}
