//! Messages exchanged with the presentation shell.
//!
//! Both directions are JSON objects tagged by a `command` field:
//!
//! ```text
//! -> {"command":"getFrame","frameIndex":3}
//! <- {"command":"updateFrame","asciiFrame":"...","delay":80}
//! ```

use serde::{Deserialize, Serialize};

use crate::sequencer::{InitialRender, RenderedFrame};

/// Request sent by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    /// Render the frame at `frame_index` (wrapped into range).
    GetFrame { frame_index: i64 },
}

/// Response pushed to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Response {
    /// First frame, sent once without a request.
    Init {
        ascii_frame: String,
        width: u32,
        height: u32,
        frame_count: usize,
    },
    /// A requested frame and how long to show it, in milliseconds.
    UpdateFrame { ascii_frame: String, delay: u32 },
    /// The request could not be rendered.
    Error { message: String },
}

impl From<InitialRender> for Response {
    fn from(init: InitialRender) -> Self {
        Response::Init {
            ascii_frame: init.art,
            width: init.display_width,
            height: init.display_height,
            frame_count: init.frame_count,
        }
    }
}

impl From<RenderedFrame> for Response {
    fn from(frame: RenderedFrame) -> Self {
        Response::UpdateFrame {
            ascii_frame: frame.art,
            delay: frame.delay_ms,
        }
    }
}

impl Request {
    /// Parse one JSON message.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

impl Response {
    /// Serialize to a single line of JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_frame() {
        let req = Request::from_json(r#"{"command":"getFrame","frameIndex":-2}"#).unwrap();
        assert_eq!(req, Request::GetFrame { frame_index: -2 });
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Request::from_json(r#"{"command":"setSpeed","speed":2}"#).is_err());
        assert!(Request::from_json("not json").is_err());
    }

    #[test]
    fn test_update_frame_json() {
        let resp = Response::from(RenderedFrame {
            index: 1,
            art: "# \n".to_string(),
            delay_ms: 80,
        });
        let value: serde_json::Value = serde_json::from_str(&resp.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "command": "updateFrame",
                "asciiFrame": "# \n",
                "delay": 80
            })
        );
    }

    #[test]
    fn test_init_json() {
        let resp = Response::from(InitialRender {
            art: "@\n".to_string(),
            display_width: 10,
            display_height: 20,
            frame_count: 3,
        });
        let value: serde_json::Value = serde_json::from_str(&resp.to_json().unwrap()).unwrap();
        assert_eq!(value["command"], "init");
        assert_eq!(value["asciiFrame"], "@\n");
        assert_eq!(value["frameCount"], 3);
        assert_eq!(value["width"], 10);
    }
}
