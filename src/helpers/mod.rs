//! General useful bits and bobs

#[cfg(test)]
use super::*;

mod or_log;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use or_log::OrLog;
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
