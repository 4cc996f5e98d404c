//! Errors returned by store operations.

use thiserror::Error;

/// Errors that can occur during [`Store::dispatch`](crate::Store::dispatch).
///
/// Registering a subscriber twice or removing an unknown one is not an
/// error; those calls return `false`.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError<E>
where
    E: std::error::Error + 'static,
{
    /// The reducer could not compute a next state for the dispatched
    /// action. State was left unchanged and no subscriber was notified.
    #[error("Reducer failed: {0}")]
    Reducer(#[source] E),

    /// The dispatched action was applied and its subscribers notified, but
    /// an action queued by a subscriber then failed. `applied` counts the
    /// actions applied by this call, including the caller's own. The state
    /// is the one left by the last applied action, and the rest of the
    /// queue was discarded.
    #[error("Queued action failed after {applied} applied: {source}")]
    Queued {
        applied: usize,
        #[source]
        source: E,
    },
}

impl<E> StoreError<E>
where
    E: std::error::Error + 'static,
{
    /// Unwrap the reducer's own error.
    pub fn into_inner(self) -> E {
        match self {
            StoreError::Reducer(e) => e,
            StoreError::Queued { source, .. } => source,
        }
    }

    /// Whether the caller's own action was applied before the failure.
    pub fn is_queued(&self) -> bool {
        matches!(self, StoreError::Queued { .. })
    }
}
