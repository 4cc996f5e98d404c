/// Marker trait for action messages.
///
/// A closed set of actions is an enum; reducers match on its variants.
/// Actions are moved into `Store::dispatch` and may be queued, so they
/// must be `Send`.
pub trait Action: Send + 'static {}

impl<T> Action for T where T: Send + 'static {}
