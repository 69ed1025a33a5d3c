use crate::commands::{timed, CmdMessage, CmdResult, Metrics};
use crate::error::Result;
use crate::profile::SortOption;
use crate::store::BoundedStore;

pub fn run(store: &mut BoundedStore, option: SortOption) -> Result<CmdResult> {
    let (report, elapsed) = timed(|| store.sort(option.algorithm, option.key, option.order));

    let mut result = CmdResult::default()
        .with_metrics(Metrics {
            comparisons: report.comparisons,
            elapsed,
        })
        .with_sort(report)
        .with_listed(store.list().to_vec());
    result.add_message(CmdMessage::success(format!(
        "Sorted by {} ({}, {} sort)",
        report.key, report.order, report.algorithm
    )));
    Ok(result)
}
