//! WebSocket wire protocol
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": { ... }}`.

use mentor_domain::{MentorResponse, Mesh};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Messages sent by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    MentorQuery { query: String },
    ExecuteCode { code: String },
}

/// Messages sent to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    MentorResponse {
        guidance: String,
        #[serde(rename = "modelData")]
        model_data: Mesh,
    },
    ExecutionResult {
        result: String,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("binary frames are not supported")]
    BinaryFrame,

    #[error("invalid message: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ClientEvent {
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl ServerEvent {
    pub fn error(message: impl Into<String>) -> Self {
        ServerEvent::Error {
            message: message.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::MentorResponse { .. } => "mentor_response",
            ServerEvent::ExecutionResult { .. } => "execution_result",
            ServerEvent::Error { .. } => "error",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<MentorResponse> for ServerEvent {
    fn from(response: MentorResponse) -> Self {
        ServerEvent::MentorResponse {
            guidance: response.guidance,
            model_data: response.model,
        }
    }
}

impl From<ProtocolError> for ServerEvent {
    fn from(error: ProtocolError) -> Self {
        ServerEvent::error(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mentor_query() {
        let event = ClientEvent::parse(r#"{"event":"mentor_query","data":{"query":"What is a gear?"}}"#)
            .unwrap();
        assert_eq!(
            event,
            ClientEvent::MentorQuery {
                query: "What is a gear?".to_string()
            }
        );
    }

    #[test]
    fn test_parse_execute_code() {
        let event =
            ClientEvent::parse(r#"{"event":"execute_code","data":{"code":"return 1"}}"#).unwrap();
        assert_eq!(
            event,
            ClientEvent::ExecuteCode {
                code: "return 1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_garbage() {
        assert!(ClientEvent::parse(r#"{"event":"shutdown","data":{}}"#).is_err());
        assert!(ClientEvent::parse(r#"{"event":"mentor_query","data":{}}"#).is_err());
        assert!(ClientEvent::parse("not json").is_err());
    }

    #[test]
    fn test_mentor_response_wire_shape() {
        let event = ServerEvent::MentorResponse {
            guidance: "A quad.".to_string(),
            model_data: Mesh::quad(),
        };
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(value["event"], "mentor_response");
        assert_eq!(value["data"]["guidance"], "A quad.");
        assert_eq!(value["data"]["modelData"]["indices"], json!([0, 1, 2, 0, 2, 3]));
        assert_eq!(
            value["data"]["modelData"]["vertices"].as_array().unwrap().len(),
            12
        );
    }

    #[test]
    fn test_execution_result_and_error_shape() {
        let value = serde_json::to_value(ServerEvent::ExecutionResult {
            result: "4".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"event": "execution_result", "data": {"result": "4"}}));

        let value = serde_json::to_value(ServerEvent::error("bad frame")).unwrap();
        assert_eq!(value, json!({"event": "error", "data": {"message": "bad frame"}}));
    }
}
