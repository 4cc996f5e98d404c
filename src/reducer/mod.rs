//! State, action and reducer primitives.
//!
//! This module provides the pure half of the store:
//! - `State`: values the store owns and hands to subscribers
//! - `Action`: messages describing an intended transition
//! - `Reducer`: the only place where a next state is computed

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{fallible, scoped, Fallible, Reducer, Scoped};
pub use state::State;
