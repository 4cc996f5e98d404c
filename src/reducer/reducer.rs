use std::convert::Infallible;
use std::error::Error;
use std::marker::PhantomData;

use super::action::Action;
use super::state::State;

/// Reducer computes the next state from the current state and an action.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: `(&State, &Action) -> State`. It receives
/// the current state by reference and returns a fresh value, so it cannot
/// mutate what the store holds.
///
/// Any `Fn(&S, &A) -> S` closure is an infallible reducer:
///
/// ```
/// use unistore::Reducer;
///
/// let add = |state: &i32, action: &i32| state + action;
/// assert_eq!(add.reduce(&1, &2), Ok(3));
/// ```
pub trait Reducer<S: State, A: Action>: Send + Sync + 'static {
    /// Error returned when no next state can be computed.
    type Error: Error + Send + Sync + 'static;

    /// Process an action and return the new state.
    fn reduce(&self, state: &S, action: &A) -> Result<S, Self::Error>;
}

impl<S, A, F> Reducer<S, A> for F
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync + 'static,
{
    type Error = Infallible;

    fn reduce(&self, state: &S, action: &A) -> Result<S, Self::Error> {
        Ok(self(state, action))
    }
}

/// Reducer built from a closure that may fail. See [`fallible`].
pub struct Fallible<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Wrap a `Fn(&S, &A) -> Result<S, E>` closure as a reducer.
///
/// ```
/// use unistore::{fallible, Reducer};
///
/// let halve = fallible(|state: &u32, _: &()| {
///     if state % 2 == 0 {
///         Ok(state / 2)
///     } else {
///         Err(std::fmt::Error)
///     }
/// });
/// assert_eq!(halve.reduce(&4, &()), Ok(2));
/// assert!(halve.reduce(&3, &()).is_err());
/// ```
pub fn fallible<S, A, E, F>(f: F) -> Fallible<F, E>
where
    S: State,
    A: Action,
    E: Error + Send + Sync + 'static,
    F: Fn(&S, &A) -> Result<S, E> + Send + Sync + 'static,
{
    Fallible {
        f,
        _error: PhantomData,
    }
}

impl<S, A, E, F> Reducer<S, A> for Fallible<F, E>
where
    S: State,
    A: Action,
    E: Error + Send + Sync + 'static,
    F: Fn(&S, &A) -> Result<S, E> + Send + Sync + 'static,
{
    type Error = E;

    fn reduce(&self, state: &S, action: &A) -> Result<S, Self::Error> {
        (self.f)(state, action)
    }
}

/// Reducer over a narrow action type lifted to a wider one. See [`scoped`].
pub struct Scoped<R, F, A> {
    inner: R,
    select: F,
    _action: PhantomData<fn(&A)>,
}

/// Lift `inner` to handle a wider action type `B`.
///
/// `select` picks out the part of a `B` that `inner` understands. When it
/// returns `None` the action is not recognized and the state is returned
/// unchanged.
///
/// ```
/// use unistore::{scoped, Reducer};
///
/// enum AppAction {
///     Add(i32),
///     Rename(String),
/// }
///
/// let add = |state: &i32, n: &i32| state + n;
/// let reducer = scoped(add, |action: &AppAction| match action {
///     AppAction::Add(n) => Some(n),
///     _ => None,
/// });
///
/// assert_eq!(reducer.reduce(&1, &AppAction::Add(2)), Ok(3));
/// assert_eq!(reducer.reduce(&1, &AppAction::Rename("x".into())), Ok(1));
/// ```
pub fn scoped<S, A, B, R, F>(inner: R, select: F) -> Scoped<R, F, A>
where
    S: State,
    A: Action,
    B: Action,
    R: Reducer<S, A>,
    F: Fn(&B) -> Option<&A> + Send + Sync + 'static,
{
    Scoped {
        inner,
        select,
        _action: PhantomData,
    }
}

impl<S, A, B, R, F> Reducer<S, B> for Scoped<R, F, A>
where
    S: State,
    A: Action,
    B: Action,
    R: Reducer<S, A>,
    F: Fn(&B) -> Option<&A> + Send + Sync + 'static,
{
    type Error = R::Error;

    fn reduce(&self, state: &S, action: &B) -> Result<S, Self::Error> {
        match (self.select)(action) {
            Some(action) => self.inner.reduce(state, action),
            None => Ok(state.clone()),
        }
    }
}
