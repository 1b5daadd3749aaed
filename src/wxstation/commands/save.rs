use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Records;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, records: &Records) -> Result<CmdResult> {
    store.save(records)?;

    let mut result = CmdResult::default();
    let noun = if records.len() == 1 { "record" } else { "records" };
    result.add_message(CmdMessage::success(format!(
        "Saved {} {}.",
        records.len(),
        noun
    )));
    Ok(result)
}
