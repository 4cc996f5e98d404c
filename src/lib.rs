//! # Unistore
//!
//! A minimal unidirectional state store for Rust.
//!
//! Data flows one way:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! ## Reducers
//!
//! - `State` - Immutable values owned by a store
//! - `Action` - Messages describing an intended transition
//! - `Reducer` - Pure function computing the next state
//!
//! ## Store
//!
//! - `Store<S, A, R>` - Owns the state, dispatches actions, notifies subscribers
//! - `Subscriber` / `Subscription` - Callbacks run after every dispatch
//! - `StoreConfig` - Name and notification policy
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use unistore::{CounterAction, CounterReducer, CounterState, Store};
//!
//! let store = Store::new(CounterState::default(), CounterReducer);
//! let rendered = Arc::new(Mutex::new(Vec::new()));
//!
//! let _render = store.subscribe({
//!     let rendered = rendered.clone();
//!     move |state: &CounterState| rendered.lock().unwrap().push(state.value)
//! });
//!
//! store.dispatch(CounterAction::Init).unwrap();
//! store.dispatch(CounterAction::Increment).unwrap();
//! store.dispatch(CounterAction::Increment).unwrap();
//! store.dispatch(CounterAction::Decrement).unwrap();
//!
//! assert_eq!(*rendered.lock().unwrap(), vec![0, 1, 2, 1]);
//! assert_eq!(store.get_current(), CounterState::new(1));
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod reducer;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, NotifyPolicy, StoreConfig};
pub use counter::{CounterAction, CounterReducer, CounterState};
pub use error::StoreError;
pub use reducer::{fallible, scoped, Action, Fallible, Reducer, Scoped, State};
pub use store::{subscriber, Store, Subscriber, Subscription};
