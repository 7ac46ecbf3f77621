use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum EventError {
    /// The handler instance is already attached to this bus
    AlreadyAttached,
    /// The handler is not attached, or its registration was already torn down
    NotAttached,
}

pub type EventResult<T> = Result<T, EventError>;

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AlreadyAttached => write!(f, "handler attached multiple times"),
            Self::NotAttached => write!(f, "handler not attached"),
        }
    }
}

impl Error for EventError {}
