/// Marker trait for values a store can hold.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting no-op transitions)
/// - Shareable across threads, since stores are `Send + Sync`
///
/// Implemented for every type meeting those bounds.
pub trait State: Clone + PartialEq + Send + Sync + 'static {}

impl<T> State for T where T: Clone + PartialEq + Send + Sync + 'static {}
