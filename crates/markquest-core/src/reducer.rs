//! Reducer abstraction.

use crate::action::Action;

/// A pure transition function from `(state, action)` to the next state.
///
/// Implementations must be total: every action, including ones the reducer
/// does not recognize, yields a state.
pub trait Reducer: Send + Sync + 'static {
    /// The state record this reducer transitions.
    type State: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static;

    /// The action type accepted by [`Reducer::reduce`].
    type Action: Action;

    /// Computes the next state without mutating `state`.
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}
