/*
[INPUT]:  HTTP method, resolved URL, fresh Authorization header
[OUTPUT]: reqwest RequestBuilder with auth + content-type headers attached
[POS]:    HTTP layer - ephemeral per-call request value
[UPDATE]: When changing the headers every request carries
*/

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};

use crate::http::signature::Authorization;
use crate::http::{Result, SolapiError};

/// One outbound call: built, dispatched once, then dropped
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: Method,
    pub url: Url,
    pub authorization: Authorization,
}

impl SignedRequest {
    pub fn new(method: Method, url: Url, authorization: Authorization) -> Self {
        Self {
            method,
            url,
            authorization,
        }
    }

    /// Turn into a request builder on the given HTTP client
    pub fn into_builder(self, http_client: &Client) -> Result<RequestBuilder> {
        let auth_value = HeaderValue::from_str(&self.authorization.header_value())
            .map_err(|e| SolapiError::Config(format!("invalid Authorization header: {e}")))?;
        Ok(http_client
            .request(self.method, self.url)
            .header(AUTHORIZATION, auth_value)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json")))
    }
}
