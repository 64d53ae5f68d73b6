use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::PersonId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: PersonId) -> CmdResult {
    // Look it up first so the message can name who was removed.
    let Some(person) = store.get(id) else {
        return CmdResult::default().with_message(not_found(id));
    };

    if !store.delete(id) {
        return CmdResult::default().with_message(not_found(id));
    }

    let message = CmdMessage::success(format!(
        "Record deleted (#{}): {}",
        person.id,
        person.full_name()
    ));
    CmdResult::default()
        .with_affected(vec![person])
        .with_message(message)
}
