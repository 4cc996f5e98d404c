use std::convert::Infallible;

use crate::reducer::Reducer;

/// State holding a single integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CounterState {
    pub value: i32,
}

impl CounterState {
    /// State holding `value`.
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

/// Actions understood by [`CounterReducer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterAction {
    /// Reset to `CounterState::default()`, discarding the prior value.
    Init,
    Increment,
    Decrement,
}

/// Reducer for [`CounterState`].
///
/// Arithmetic wraps at the bounds of `i32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterReducer;

impl Reducer<CounterState, CounterAction> for CounterReducer {
    type Error = Infallible;

    fn reduce(
        &self,
        state: &CounterState,
        action: &CounterAction,
    ) -> Result<CounterState, Self::Error> {
        let next = match action {
            CounterAction::Init => CounterState::default(),
            CounterAction::Increment => CounterState::new(state.value.wrapping_add(1)),
            CounterAction::Decrement => CounterState::new(state.value.wrapping_sub(1)),
        };
        Ok(next)
    }
}
