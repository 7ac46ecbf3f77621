use super::*;

struct MockPresenceInner {
    updates: Mutex<Vec<State>>,
    fail: bool,
}

pub struct MockPresence(Arc<MockPresenceInner>);

impl MockPresence {
    pub fn new() -> Self {
        Self::with_failure(false)
    }

    pub fn new_failing() -> Self {
        Self::with_failure(true)
    }

    fn with_failure(fail: bool) -> Self {
        Self(Arc::new(MockPresenceInner {
            updates: Mutex::new(Vec::new()),
            fail,
        }))
    }

    pub fn get(&self) -> Arc<dyn PresenceUpdater> {
        self.0.clone()
    }

    pub fn update_count(&self) -> usize {
        self.0.updates.lock().unwrap().len()
    }

    pub fn updates(&self) -> Vec<State> {
        self.0.updates.lock().unwrap().clone()
    }
}

impl PresenceUpdater for MockPresenceInner {
    fn update(&self, state: &State) -> Result<(), Box<dyn Error>> {
        self.updates.lock().unwrap().push(state.clone());
        if self.fail {
            Err("mock presence update failure".into())
        } else {
            Ok(())
        }
    }
}
