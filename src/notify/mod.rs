//! The stock reaction to a state change: best-effort notification of a fixed set of
//! external collaborators, each injected as a trait object so tests can substitute doubles.

use super::*;

mod channel;
mod message;
mod notifier;
mod observer;
mod presence;

pub use channel::MessageChannel;
pub use message::WebMessage;
pub use notifier::StateChangeNotifier;
pub use observer::ModeChangeObserver;
pub use presence::PresenceUpdater;
