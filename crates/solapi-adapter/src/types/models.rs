/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{FileType, MessageType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub file_id: String,
    #[serde(rename = "type")]
    pub file_type: Option<FileType>,
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub link: Option<String>,
    pub url: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
}

/// One page of stored files, keyed by file id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    pub start_key: Option<String>,
    pub next_key: Option<String>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub file_list: BTreeMap<String, File>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: String,
    pub group_id: Option<String>,
    pub account_id: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<MessageType>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub text: Option<String>,
    pub subject: Option<String>,
    pub image_id: Option<String>,
    pub country: Option<String>,
    pub status_code: Option<String>,
    pub reason: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
}

/// One page of message history, keyed by message id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageList {
    pub start_key: Option<String>,
    pub next_key: Option<String>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub message_list: BTreeMap<String, Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub account_id: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub point: Decimal,
    #[serde(default)]
    pub deposit: Decimal,
}
