use super::*;

struct MockObserverInner {
    calls: Mutex<Vec<(State, State)>>,
}

pub struct MockObserver(Arc<MockObserverInner>);

impl MockObserver {
    pub fn new() -> Self {
        Self(Arc::new(MockObserverInner {
            calls: Mutex::new(Vec::new()),
        }))
    }

    pub fn get(&self) -> Arc<dyn ModeChangeObserver> {
        self.0.clone()
    }

    pub fn call_count(&self) -> usize {
        self.0.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(State, State)> {
        self.0.calls.lock().unwrap().clone()
    }
}

impl ModeChangeObserver for MockObserverInner {
    fn state_changed(&self, old: &State, new: &State) {
        self.calls
            .lock()
            .unwrap()
            .push((old.clone(), new.clone()));
    }
}
