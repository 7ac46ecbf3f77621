use super::*;

struct MockChannelInner {
    open: bool,
    fail_sends: bool,
    sent: Mutex<Vec<String>>,
}

pub struct MockChannel(Arc<MockChannelInner>);

impl MockChannel {
    pub fn new_open() -> Self {
        Self::with_status(true, false)
    }

    pub fn new_closed() -> Self {
        Self::with_status(false, false)
    }

    pub fn new_open_failing() -> Self {
        Self::with_status(true, true)
    }

    fn with_status(open: bool, fail_sends: bool) -> Self {
        Self(Arc::new(MockChannelInner {
            open,
            fail_sends,
            sent: Mutex::new(Vec::new()),
        }))
    }

    pub fn get(&self) -> Arc<dyn MessageChannel> {
        self.0.clone()
    }

    pub fn send_count(&self) -> usize {
        self.0.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<String> {
        self.0.sent.lock().unwrap().clone()
    }
}

impl MessageChannel for MockChannelInner {
    fn is_open(&self) -> bool {
        self.open
    }

    fn send(&self, message: &str) -> Result<(), Box<dyn Error>> {
        self.sent.lock().unwrap().push(message.to_string());
        if self.fail_sends {
            Err("mock channel send failure".into())
        } else {
            Ok(())
        }
    }
}
