use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A server node. Stored as the wire id (`"node4"`, `"beta"`), displayed as a human name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node(String);

impl Node {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Parses a display name such as `"Node 4"` back into a node.
    pub fn from_display_name(name: &str) -> Self {
        let name = name.strip_prefix("Node ").unwrap_or(name);
        match name.parse::<u32>() {
            Ok(number) => Self(format!("node{}", number)),
            Err(_) => Self(lowercase_first(name)),
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> String {
        // Only a non-empty all-digit suffix makes a numbered node; ids like "node" or
        // "nodex" fall through to plain capitalization so display names stay parseable
        let number = self
            .0
            .strip_prefix("node")
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));
        if let Some(number) = number {
            format!("Node {}", number)
        } else if self.0 == "beta" {
            "Node Beta".to_string()
        } else {
            capitalize_first(&self.0)
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display_name())
    }
}

/// A player-owned plot on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    pub name: String,
    pub owner: String,
    pub id: u32,
}

impl Serialize for Plot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut plot = serializer.serialize_struct("Plot", 3)?;
        plot.serialize_field("name", &self.name)?;
        plot.serialize_field("owner", &self.owner)?;
        plot.serialize_field("id", &self.id)?;
        plot.end()
    }
}

/// What the player is doing on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    Play,
    Build,
    Dev,
}

impl PlotMode {
    pub fn descriptor(self) -> &'static str {
        match self {
            Self::Play => "playing",
            Self::Build => "building",
            Self::Dev => "coding",
        }
    }
}

impl Serialize for PlotMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.descriptor())
    }
}

/// Where the player currently is. Immutable once produced by the event source; transitions
/// between these values are what the bus delivers. Serializes to a tagged JSON object for
/// transmission to UI clients.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Offline,
    AtSpawn {
        node: Node,
    },
    OnPlot {
        node: Node,
        plot: Plot,
        mode: PlotMode,
        status: Option<String>,
    },
}

impl State {
    pub fn to_json(&self) -> serde_json::Value {
        // Pure data with string keys, serialization can not actually fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Offline => {
                let mut state = serializer.serialize_struct("State", 1)?;
                state.serialize_field("context", "offline")?;
                state.end()
            }
            Self::AtSpawn { node } => {
                let mut state = serializer.serialize_struct("State", 2)?;
                state.serialize_field("context", "at_spawn")?;
                state.serialize_field("node", node)?;
                state.end()
            }
            Self::OnPlot {
                node,
                plot,
                mode,
                status,
            } => {
                let fields = if status.is_some() { 5 } else { 4 };
                let mut state = serializer.serialize_struct("State", fields)?;
                state.serialize_field("context", "on_plot")?;
                state.serialize_field("node", node)?;
                state.serialize_field("plot", plot)?;
                state.serialize_field("mode", mode)?;
                if let Some(status) = status {
                    state.serialize_field("status", status)?;
                }
                state.end()
            }
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
