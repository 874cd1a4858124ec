/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SOLAPI adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{HmacSigner, generate_salt};

pub use config::ClientConfig;

// Re-export commonly used types from http
pub use http::{
    ApiErrorBody, Authorization, RequestSigner, Result, SignedRequest, SolapiClient, SolapiError,
};

// Re-export all types
pub use types::*;
