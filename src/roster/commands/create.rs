use crate::commands::{CmdMessage, CmdResult};
use crate::model::PersonFields;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, fields: PersonFields) -> CmdResult {
    let person = store.create(fields);
    let message = CmdMessage::success(format!(
        "Record created (#{}): {}",
        person.id,
        person.full_name()
    ));
    CmdResult::default()
        .with_affected(vec![person])
        .with_message(message)
}
