//! The "state change" publish/subscribe surface: an ordered list of weakly-held handlers
//! invoked synchronously for each dispatched transition.

use super::*;

mod bus;
mod error;
mod handler;
mod handler_list;

pub use bus::{Registration, StateChangeBus};
pub use error::{EventError, EventResult};
pub use handler::{HandlerResult, Transition, TransitionHandler};
pub use handler_list::{AttachReport, DetachReport};

use handler_list::HandlerList;
