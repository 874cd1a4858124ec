/*
[INPUT]:  ClientConfig (endpoint + credentials), resource paths, query/body payloads
[OUTPUT]: Typed API results or structured SolapiError
[POS]:    HTTP layer - core client implementation, one generic signed dispatch path
[UPDATE]: When changing request dispatch, response decoding, or client construction
*/

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::http::request::SignedRequest;
use crate::http::signature::RequestSigner;
use crate::http::{Result, SolapiError};

/// Main HTTP client for the SOLAPI REST API
///
/// Configuration is fixed at construction; every call signs a fresh
/// Authorization header and performs exactly one round trip.
#[derive(Debug, Clone)]
pub struct SolapiClient {
    http_client: Client,
    config: ClientConfig,
    signer: RequestSigner,
}

impl SolapiClient {
    /// Create a new client configured from `SOLAPI_*` environment variables
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client around an existing reqwest client
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> Self {
        let signer = RequestSigner::new(config.api_key(), config.api_secret());
        Self {
            http_client,
            config,
            signer,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the URL and sign a new request for `resource`
    pub fn signed_request(&self, method: Method, resource: &str) -> Result<SignedRequest> {
        let url = self.config.url(resource)?;
        let authorization = self.signer.authorization();
        Ok(SignedRequest::new(method, url, authorization))
    }

    /// Build request builder with auth headers for a resource path
    pub(crate) fn request(&self, method: Method, resource: &str) -> Result<RequestBuilder> {
        let signed = self.signed_request(method, resource)?;
        debug!(method = %signed.method, url = %signed.url, "sending SOLAPI request");
        signed.into_builder(&self.http_client)
    }

    /// GET with query parameters
    pub async fn get<Q, T>(&self, resource: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, resource)?.query(query);
        self.send_json(builder).await
    }

    /// Send a JSON body with any method
    pub async fn send<B, T>(&self, method: Method, resource: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(SolapiError::Serialization)?;
        let builder = self.request(method, resource)?.body(payload);
        self.send_json(builder).await
    }

    pub async fn post<B, T>(&self, resource: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, resource, body).await
    }

    pub async fn put<B, T>(&self, resource: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, resource, body).await
    }

    pub async fn delete<B, T>(&self, resource: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::DELETE, resource, body).await
    }

    /// Send the request and decode a 200 body, or map the error body
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        // Builder errors are local encoding failures, nothing has been sent yet
        let request = builder.build().map_err(|e| {
            if e.is_builder() {
                SolapiError::Encoding(e)
            } else {
                SolapiError::Transport(e)
            }
        })?;
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::OK {
            return serde_json::from_slice(&body).map_err(|source| SolapiError::Decode {
                status: status.as_u16(),
                source,
            });
        }

        let err = SolapiError::from_error_body(status, &body);
        warn!(status = status.as_u16(), error = %err, "SOLAPI request failed");
        Err(err)
    }
}
