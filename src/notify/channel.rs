use super::*;

/// The outbound transport used to push state to a UI client. Owned and mutated elsewhere;
/// this crate only reads its open/closed status and issues sends.
pub trait MessageChannel: Send + Sync {
    /// Whether the channel can currently accept sends. Must not fail.
    fn is_open(&self) -> bool;

    /// Pushes one wire message. Only called while is_open() reports true, though the send
    /// can still fail (the channel may close at any time).
    fn send(&self, message: &str) -> Result<(), Box<dyn Error>>;
}
