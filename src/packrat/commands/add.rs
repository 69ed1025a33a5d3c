use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    store.insert(record.clone())?;

    let mut result = CmdResult::default().with_affected(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!("Added: {}", record)));
    result.add_message(CmdMessage::info(format!("{} stored", plural(store.len()))));
    Ok(result)
}

fn plural(n: usize) -> String {
    if n == 1 {
        "1 record".to_string()
    } else {
        format!("{} records", n)
    }
}
