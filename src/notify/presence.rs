use super::*;

/// Updates an external rich-presence indicator (Discord, in the original use case) to show
/// the state the player just entered. May fail; callers treat failure as non-fatal.
pub trait PresenceUpdater: Send + Sync {
    fn update(&self, state: &State) -> Result<(), Box<dyn Error>>;
}
