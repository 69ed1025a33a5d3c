use crate::commands::{timed, CmdMessage, CmdResult, Found, Metrics};
use crate::error::{PackratError, Result};
use crate::store::{BoundedStore, RecordStore};

/// Front-to-back scan by name.
pub fn linear<S: RecordStore>(store: &S, name: &str) -> Result<CmdResult> {
    let (lookup, elapsed) = timed(|| store.linear_search(name));
    let mut result = CmdResult::default().with_metrics(Metrics {
        comparisons: lookup.comparisons,
        elapsed,
    });

    match lookup.position {
        Some(position) => {
            let record = store.get(position).cloned().ok_or_else(|| PackratError::NotFound {
                key: name.to_string(),
                comparisons: lookup.comparisons,
            })?;
            result.add_message(CmdMessage::success(format!(
                "Found '{}' at position {}",
                name, position
            )));
            Ok(result.with_found(Found { position, record }))
        }
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' not found", name)));
            Ok(result)
        }
    }
}

/// Bisection by name. Fails with [`PackratError::Unsorted`] so the caller can
/// decide whether to sort first.
pub fn binary(store: &BoundedStore, name: &str) -> Result<CmdResult> {
    let (outcome, elapsed) = timed(|| store.binary_search(name));

    match outcome {
        Ok(hit) => {
            let mut result = CmdResult::default().with_metrics(Metrics {
                comparisons: hit.comparisons,
                elapsed,
            });
            result.add_message(CmdMessage::success(format!(
                "Found '{}' at index {}",
                name, hit.index
            )));
            let record = store.list()[hit.index].clone();
            Ok(result.with_found(Found {
                position: hit.index,
                record,
            }))
        }
        Err(PackratError::NotFound { key, comparisons }) => {
            let mut result = CmdResult::default().with_metrics(Metrics {
                comparisons,
                elapsed,
            });
            result.add_message(CmdMessage::warning(format!("'{}' not found", key)));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}
