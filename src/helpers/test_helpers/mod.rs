use super::*;

mod mock_channel;
mod mock_handler;
mod mock_observer;
mod mock_presence;

pub use mock_channel::*;
pub use mock_handler::*;
pub use mock_observer::*;
pub use mock_presence::*;

/// Makes swallowed notification failures visible when tests run with RUST_LOG set.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
