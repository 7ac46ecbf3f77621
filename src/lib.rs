//! Best-effort state-change notification dispatch. An external source of state transitions
//! (a game client, in the original use case) pushes `(old, new)` pairs into a
//! [StateChangeBus]; attached handlers react to each transition in order. The stock handler,
//! [StateChangeNotifier], fans a transition out to a rich-presence updater and a UI message
//! channel, swallowing any failure so a missed notification never disturbs the event source.

#[macro_use]
extern crate log;

mod event;
mod helpers;
mod notify;
mod state;

pub use event::{
    AttachReport, DetachReport, EventError, EventResult, HandlerResult, Registration,
    StateChangeBus, Transition, TransitionHandler,
};
pub use notify::{
    MessageChannel, ModeChangeObserver, PresenceUpdater, StateChangeNotifier, WebMessage,
};
pub use state::{Node, Plot, PlotMode, State};

use helpers::*;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::{Arc, Mutex, Weak};
