use super::*;

struct MockHandlerInner {
    count: Mutex<u32>,
    transitions: Mutex<Vec<Transition>>,
    result: HandlerResult,
    terrified: bool,
}

pub struct MockHandler(Arc<MockHandlerInner>);

impl MockHandler {
    pub fn new() -> Self {
        Self::new_with_result(HandlerResult::Pass)
    }

    pub fn new_with_result(result: HandlerResult) -> Self {
        Self(Arc::new(MockHandlerInner {
            count: Mutex::new(0),
            transitions: Mutex::new(Vec::new()),
            result,
            terrified: false,
        }))
    }

    pub fn new_terrified() -> Self {
        Self(Arc::new(MockHandlerInner {
            count: Mutex::new(0),
            transitions: Mutex::new(Vec::new()),
            result: HandlerResult::Pass,
            terrified: true,
        }))
    }

    pub fn get(&self) -> Arc<dyn TransitionHandler> {
        self.0.clone()
    }

    pub fn handle_count(&self) -> u32 {
        *self.0.count.lock().unwrap()
    }

    pub fn transitions(&self) -> Vec<Transition> {
        self.0.transitions.lock().unwrap().clone()
    }
}

impl TransitionHandler for MockHandlerInner {
    fn handle_transition(&self, transition: &Transition) -> HandlerResult {
        if self.terrified {
            panic!("mock handler should not have been invoked");
        }
        *self.count.lock().unwrap() += 1;
        self.transitions.lock().unwrap().push(transition.clone());
        self.result
    }
}
