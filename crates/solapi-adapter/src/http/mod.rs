/*
[INPUT]:  Client configuration, resource paths and payloads
[OUTPUT]: Signed HTTP requests and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod cash;
pub mod client;
pub mod error;
pub mod messages;
pub mod request;
pub mod signature;
pub mod storage;

pub use error::{ApiErrorBody, Result, SolapiError};
pub use request::SignedRequest;
pub use signature::{AUTH_SCHEME, Authorization, RequestSigner};

pub use client::SolapiClient;
