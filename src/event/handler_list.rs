use super::*;

/// Returned by HandlerList::add(), used instead of a raw bool for code readability
pub struct AttachReport {
    pub was_empty: bool,
}

/// Returned by HandlerList::remove(), used instead of a raw bool for code readability
pub struct DetachReport {
    pub is_now_empty: bool,
}

/// An ordered list of transition handlers. Conceptually a set of Weaks that remembers
/// attach order.
///
/// You can't hash or compare a Weak, so entries are keyed by the pointer obtained with
/// thin_ptr(), cast to usize because raw pointers aren't Sync. Most lists hold one or two
/// handlers and dispatch iterates far more often than attach mutates, so a Vec beats a map.
pub struct HandlerList(pub Vec<(usize, Weak<dyn TransitionHandler>)>);

impl HandlerList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, handler: &Arc<dyn TransitionHandler>) -> EventResult<AttachReport> {
        let handler_ptr = handler.thin_ptr() as usize;
        if self.0.iter().any(|(ptr, _handler)| *ptr == handler_ptr) {
            Err(EventError::AlreadyAttached)
        } else {
            let was_empty = self.0.is_empty();
            self.0.push((handler_ptr, Arc::downgrade(handler)));
            Ok(AttachReport { was_empty })
        }
    }

    pub fn remove(&mut self, handler: &Weak<dyn TransitionHandler>) -> EventResult<DetachReport> {
        let handler_ptr = handler.thin_ptr() as usize;
        match self
            .0
            .iter()
            .position(|(ptr, _handler)| *ptr == handler_ptr)
        {
            None => Err(EventError::NotAttached),
            Some(i) => {
                self.0.swap_remove(i);
                let is_now_empty = self.0.is_empty();
                Ok(DetachReport { is_now_empty })
            }
        }
    }
}
