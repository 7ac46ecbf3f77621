use super::*;

/// An ordered pair of states delivered by the event source. Both ends are always present;
/// a transition exists only for the duration of the dispatch that carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub old: State,
    pub new: State,
}

impl Transition {
    pub fn new(old: State, new: State) -> Self {
        Self { old, new }
    }
}

/// Outcome of one handler invocation, deciding what happens to the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResult {
    /// Continue with the remaining handlers.
    Pass,
    /// The transition was handled exclusively; skip the remaining handlers.
    Consume,
    /// The transition was rejected; skip the remaining handlers.
    Reject,
}

/// An object that reacts to state transitions delivered by a [StateChangeBus].
pub trait TransitionHandler: Send + Sync {
    fn handle_transition(&self, transition: &Transition) -> HandlerResult;
}
