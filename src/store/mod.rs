//! The store: state ownership, dispatch and subscriber notification.
//!
//! A store holds exactly one state value. The only way to change it is
//! `dispatch`, which runs the reducer and then synchronously notifies every
//! subscriber with the new state.

mod store;
mod subscription;

pub use store::Store;
pub use subscription::{subscriber, Subscriber, Subscription};
