use super::*;

/// The "state change" topic. Handlers attach explicitly and are invoked in attach order,
/// synchronously on whatever thread calls dispatch(). The bus adds no threads or queues of
/// its own; if callers dispatch concurrently, handler invocations interleave accordingly.
pub struct StateChangeBus {
    handlers: Mutex<HandlerList>,
    /// Always true when the list has handlers. Can be briefly true when it does not. Skips
    /// the lock in the common no-handler case.
    has_handlers: AtomicBool,
    /// The last transition pushed through dispatch(), kept for late-comers that want to
    /// know the current state without waiting for the next change.
    previous: Mutex<Option<Transition>>,
}

/// Handle returned by [StateChangeBus::attach]. Tearing it down stops delivery to the
/// handler. Dropping the handler without detaching is tolerated (the bus skips dead
/// handles) but logged as an error at dispatch time.
pub struct Registration {
    bus: Weak<StateChangeBus>,
    handler: Weak<dyn TransitionHandler>,
}

impl Registration {
    /// Detaches the handler from the bus. Errors if the registration was already torn down
    /// or the handler has been dropped.
    pub fn detach(self) -> EventResult<DetachReport> {
        match self.bus.upgrade() {
            Some(bus) => bus.detach(&self.handler),
            None => Err(EventError::NotAttached),
        }
    }
}

impl StateChangeBus {
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(HandlerList::new()),
            has_handlers: AtomicBool::new(false),
            previous: Mutex::new(None),
        }
    }

    /// Attaches a handler. Every subsequent dispatch() invokes it until the returned
    /// registration is torn down.
    pub fn attach(
        self: &Arc<Self>,
        handler: &Arc<dyn TransitionHandler>,
    ) -> EventResult<Registration> {
        self.has_handlers.store(true, SeqCst);
        let mut handlers = self.handlers.lock().expect("failed to lock handlers");
        match handlers.add(handler) {
            Ok(_report) => Ok(Registration {
                bus: Arc::downgrade(self),
                handler: Arc::downgrade(handler),
            }),
            Err(e) => {
                if handlers.0.is_empty() {
                    self.has_handlers.store(false, SeqCst);
                }
                Err(e)
            }
        }
    }

    fn detach(&self, handler: &Weak<dyn TransitionHandler>) -> EventResult<DetachReport> {
        let mut handlers = self.handlers.lock().expect("failed to lock handlers");
        let result = handlers.remove(handler);
        if let Ok(report) = &result {
            if report.is_now_empty {
                self.has_handlers.store(false, SeqCst);
            }
        }
        result
    }

    /// Delivers one transition to every attached handler in attach order. A Consume or
    /// Reject outcome stops the chain and becomes the returned result; otherwise Pass.
    pub fn dispatch(&self, old: State, new: State) -> HandlerResult {
        let transition = Transition::new(old, new);
        let mut result = HandlerResult::Pass;
        if self.has_handlers.load(SeqCst) {
            let handlers = self.handlers.lock().expect("failed to lock handlers");
            for (_ptr, handler) in &handlers.0 {
                if let Some(handler) = handler.upgrade() {
                    result = handler.handle_transition(&transition);
                    if result != HandlerResult::Pass {
                        break;
                    }
                } else {
                    error!("dead handler in bus; should have been detached before being dropped");
                }
            }
        }
        *self
            .previous
            .lock()
            .expect("failed to lock previous transition") = Some(transition);
        result
    }

    /// The most recently dispatched transition, if any.
    pub fn previous(&self) -> Option<Transition> {
        self.previous
            .lock()
            .expect("failed to lock previous transition")
            .clone()
    }
}
