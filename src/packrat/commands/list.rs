use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store.records();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("Inventory is empty."));
    }
    Ok(result.with_listed(records))
}
