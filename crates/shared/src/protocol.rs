use serde::{Deserialize, Serialize};

use crate::{
    domain::{FrameId, PerformanceAction},
    records::{PerformanceRequest, RunwaySelectionRecord},
};

/// Messages an embedded page sends to the page that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ParentMessage {
    ResizeFrames,
    LoadAirport {
        value: String,
        target: FrameId,
    },
    LoadRunway {
        record: RunwaySelectionRecord,
    },
    LoadPerformance {
        action: PerformanceAction,
        request: PerformanceRequest,
    },
}

impl ParentMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResizeFrames => "resize_frames",
            Self::LoadAirport { .. } => "load_airport",
            Self::LoadRunway { .. } => "load_runway",
            Self::LoadPerformance { .. } => "load_performance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_tagged_snake_case_encoding() {
        let message = ParentMessage::LoadPerformance {
            action: PerformanceAction::TakeOff,
            request: PerformanceRequest {
                elevation: 500,
                headwind: 10,
                standard_temperature: 59,
                temperature: 70,
                is_grass: false,
            },
        };

        let json = serde_json::to_value(&message).expect("json");
        assert_eq!(json["type"], "load_performance");
        assert_eq!(json["payload"]["action"], "take off");
        assert_eq!(json["payload"]["request"]["standardTemperature"], 59);
    }

    #[test]
    fn unknown_action_labels_decode_as_landing() {
        let json = serde_json::json!({
            "type": "load_performance",
            "payload": {
                "action": "arrive",
                "request": {
                    "elevation": 0,
                    "headwind": 0,
                    "standardTemperature": 59,
                    "temperature": 59,
                    "isGrass": true
                }
            }
        });

        let message: ParentMessage = serde_json::from_value(json).expect("message");
        let ParentMessage::LoadPerformance { action, .. } = message else {
            panic!("expected load_performance");
        };
        assert_eq!(action, PerformanceAction::Landing);
    }
}
