use super::*;

/// Observes every transition before the best-effort notification steps run (the original
/// use case toggles streamer-mode features off and on). Total by contract: there is no
/// guard around this call, so implementations must not panic.
pub trait ModeChangeObserver: Send + Sync {
    fn state_changed(&self, old: &State, new: &State);
}
