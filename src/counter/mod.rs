//! A counter state domain: the smallest useful reducer.

mod counter;

pub use counter::{CounterAction, CounterReducer, CounterState};
