/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::MessageType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub group_id: String,
    pub message_id: String,
    pub account_id: Option<String>,
    pub status_code: Option<String>,
    pub status_message: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<MessageType>,
    pub country: Option<String>,
}
