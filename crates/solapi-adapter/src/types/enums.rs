/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Message kind; the API infers one from length and attachments when omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "LMS")]
    Lms,
    #[serde(rename = "MMS")]
    Mms,
    #[serde(rename = "ATA")]
    Ata,
    #[serde(rename = "CTA")]
    Cta,
    #[serde(rename = "CTI")]
    Cti,
    #[serde(rename = "RCS_SMS")]
    RcsSms,
    #[serde(rename = "RCS_LMS")]
    RcsLms,
    #[serde(rename = "RCS_MMS")]
    RcsMms,
    #[serde(rename = "RCS_TPL")]
    RcsTpl,
    #[serde(rename = "VOICE")]
    Voice,
    #[serde(rename = "FAX")]
    Fax,
}

/// Storage file category, decides where an uploaded file may be used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    #[default]
    Mms,
    Kakao,
    Rcs,
    Document,
    Fax,
}

