use super::*;

/// Reacts to one state transition per invocation with a fixed, ordered sequence of
/// best-effort notifications: the mode-change observer first (unguarded, total by its own
/// contract), then the presence update, then a push of the new state over the message
/// channel when it is open.
///
/// The two fallible steps are guarded independently: a failure in either is logged and
/// dropped, never propagated, and never prevents the other from running. There is no retry;
/// a failed notification is simply missed. In all cases the handler acknowledges the
/// transition with [HandlerResult::Pass] so the rest of the chain runs.
pub struct StateChangeNotifier {
    presence: Arc<dyn PresenceUpdater>,
    channel: Arc<dyn MessageChannel>,
    observer: Arc<dyn ModeChangeObserver>,
}

impl StateChangeNotifier {
    pub fn new(
        presence: Arc<dyn PresenceUpdater>,
        channel: Arc<dyn MessageChannel>,
        observer: Arc<dyn ModeChangeObserver>,
    ) -> Self {
        Self {
            presence,
            channel,
            observer,
        }
    }

    /// Attaches this notifier to a bus. Convenience over [StateChangeBus::attach].
    pub fn attach(self: &Arc<Self>, bus: &Arc<StateChangeBus>) -> EventResult<Registration> {
        bus.attach(&(self.clone() as Arc<dyn TransitionHandler>))
    }

    fn push_state(&self, state: &State) -> Result<(), Box<dyn Error>> {
        let message = WebMessage::new("state", state.to_json()).build()?;
        self.channel.send(&message)
    }
}

impl TransitionHandler for StateChangeNotifier {
    fn handle_transition(&self, transition: &Transition) -> HandlerResult {
        self.observer
            .state_changed(&transition.old, &transition.new);
        self.presence
            .update(&transition.new)
            .or_log_error("updating presence");
        if self.channel.is_open() {
            self.push_state(&transition.new)
                .or_log_error("pushing state to channel");
        }
        HandlerResult::Pass
    }
}
