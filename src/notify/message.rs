use super::*;
use serde::ser::{SerializeStruct, Serializer};

/// A tagged wire message for the UI channel: `{"type": <tag>, "data": <payload>}`.
pub struct WebMessage {
    tag: &'static str,
    payload: serde_json::Value,
}

impl WebMessage {
    pub fn new(tag: &'static str, payload: serde_json::Value) -> Self {
        Self { tag, payload }
    }

    /// Builds the wire string.
    pub fn build(&self) -> Result<String, Box<dyn Error>> {
        let buffer = Vec::with_capacity(128);
        let mut serializer = serde_json::Serializer::new(buffer);
        let mut message = serializer.serialize_struct("WebMessage", 2)?;
        message.serialize_field("type", self.tag)?;
        message.serialize_field("data", &self.payload)?;
        message.end()?;
        Ok(String::from_utf8(serializer.into_inner())?)
    }
}
