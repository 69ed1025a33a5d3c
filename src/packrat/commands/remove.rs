use crate::commands::{timed, CmdMessage, CmdResult, Metrics};
use crate::error::{PackratError, Result};
use crate::store::RecordStore;

/// Removes the first record named `name`. A missing name is a warning, not
/// an error, so the scan cost still reaches the caller.
pub fn run<S: RecordStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let (outcome, elapsed) = timed(|| store.remove_by_name(name));

    match outcome {
        Ok(removed) => {
            let mut result = CmdResult::default().with_metrics(Metrics {
                comparisons: removed.comparisons,
                elapsed,
            });
            result.add_message(CmdMessage::success(format!("Removed: {}", removed.record)));
            Ok(result.with_affected(vec![removed.record]))
        }
        Err(PackratError::NotFound { key, comparisons }) => {
            let mut result = CmdResult::default().with_metrics(Metrics {
                comparisons,
                elapsed,
            });
            result.add_message(CmdMessage::warning(format!("Not found: {}", key)));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::{names, with_items};
    use crate::store::{BoundedStore, LinkedStore};

    #[test]
    fn removes_and_keeps_order() {
        let mut store = with_items(BoundedStore::fixed(5), &["a", "b", "c"]);
        let result = run(&mut store, "b").unwrap();
        assert_eq!(result.affected[0].name, "b");
        assert_eq!(result.comparisons(), Some(2));
        assert_eq!(names(&store), vec!["a", "c"]);
    }

    #[test]
    fn missing_name_is_a_warning_with_cost() {
        let mut store = with_items(LinkedStore::new(), &["a", "b"]);
        let result = run(&mut store, "nope").unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.comparisons(), Some(2));
        assert_eq!(store.len(), 2);
    }
}
