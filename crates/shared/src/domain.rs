use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

pub const DEPARTING_RUNWAY: &str = "departing-runway";
pub const ARRIVAL_RUNWAY: &str = "arrival-runway";
pub const TAKE_OFF: &str = "take-off";
pub const LANDING: &str = "landing";

/// Logical name of an embedded frame, taken from its `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(String);

impl FrameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FrameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which performance page a request targets. Only the literal label
/// `"take off"` selects take-off; every other label means landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PerformanceAction {
    TakeOff,
    Landing,
}

impl PerformanceAction {
    pub fn from_label(label: &str) -> Self {
        if label == "take off" {
            Self::TakeOff
        } else {
            Self::Landing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TakeOff => "take off",
            Self::Landing => "landing",
        }
    }

    /// Frame id and path segment the action renders into.
    pub fn frame_id(self) -> &'static str {
        match self {
            Self::TakeOff => TAKE_OFF,
            Self::Landing => LANDING,
        }
    }
}

impl From<String> for PerformanceAction {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<PerformanceAction> for String {
    fn from(value: PerformanceAction) -> Self {
        value.label().to_string()
    }
}
