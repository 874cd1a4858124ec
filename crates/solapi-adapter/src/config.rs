/*
[INPUT]:  Environment variables, override maps, builder calls
[OUTPUT]: Immutable endpoint + credential configuration for SolapiClient
[POS]:    Configuration layer - client setup boundary
[UPDATE]: When adding configuration options or environment variables
*/

use std::fmt;

use url::Url;

use crate::http::Result;

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_DOMAIN: &str = "api.solapi.com";

pub const ENV_API_KEY: &str = "SOLAPI_API_KEY";
pub const ENV_API_SECRET: &str = "SOLAPI_API_SECRET";
pub const ENV_PROTOCOL: &str = "SOLAPI_PROTOCOL";
pub const ENV_DOMAIN: &str = "SOLAPI_DOMAIN";
pub const ENV_PREFIX: &str = "SOLAPI_PREFIX";
pub const ENV_APP_ID: &str = "SOLAPI_APP_ID";

/// Endpoint and credential configuration
///
/// Built once, then moved into the client. The client never mutates it.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    api_secret: String,
    protocol: String,
    domain: String,
    prefix: String,
    app_id: String,
    sdk_version: String,
    os_platform: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            prefix: String::new(),
            app_id: String::new(),
            sdk_version: format!("RUST-SDK v{}", env!("CARGO_PKG_VERSION")),
            os_platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("protocol", &self.protocol)
            .field("domain", &self.domain)
            .field("prefix", &self.prefix)
            .field("app_id", &self.app_id)
            .field("sdk_version", &self.sdk_version)
            .field("os_platform", &self.os_platform)
            .finish()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `SOLAPI_*` environment variables
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let fields: [(&str, &mut String); 6] = [
            (ENV_API_KEY, &mut config.api_key),
            (ENV_API_SECRET, &mut config.api_secret),
            (ENV_PROTOCOL, &mut config.protocol),
            (ENV_DOMAIN, &mut config.domain),
            (ENV_PREFIX, &mut config.prefix),
            (ENV_APP_ID, &mut config.app_id),
        ];
        for (key, slot) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }
        config
    }

    /// Apply overrides from a key/value map
    ///
    /// Recognized keys: `apiKey`, `apiSecret`, `protocol`, `domain`,
    /// `pathPrefix`, `appId` (legacy spellings `APIKey`, `APISecret`,
    /// `Protocol`, `Domain`, `Prefix`, `AppId` are accepted too).
    /// Anything else is ignored.
    pub fn configure<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in options {
            let slot = match key.as_ref() {
                "apiKey" | "APIKey" => &mut self.api_key,
                "apiSecret" | "APISecret" => &mut self.api_secret,
                "protocol" | "Protocol" => &mut self.protocol,
                "domain" | "Domain" => &mut self.domain,
                "pathPrefix" | "Prefix" => &mut self.prefix,
                "appId" | "AppId" => &mut self.app_id,
                _ => continue,
            };
            *slot = value.into();
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = api_secret.into();
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Application id, `None` when not configured
    pub fn app_id(&self) -> Option<&str> {
        (!self.app_id.is_empty()).then_some(self.app_id.as_str())
    }

    pub fn sdk_version(&self) -> &str {
        &self.sdk_version
    }

    pub fn os_platform(&self) -> &str {
        &self.os_platform
    }

    /// `{protocol}://{domain}/{prefix}`
    pub fn base_url(&self) -> String {
        format!("{}://{}/{}", self.protocol, self.domain, self.prefix)
    }

    /// Resolve a resource path such as `storage/v1/files` to a full URL
    pub fn url(&self, resource: &str) -> Result<Url> {
        let url = Url::parse(&format!("{}{}", self.base_url(), resource))?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.protocol(), "https");
        assert_eq!(config.domain(), "api.solapi.com");
        assert_eq!(config.prefix(), "");
        assert_eq!(config.api_key(), "");
        assert!(config.app_id().is_none());
        assert!(config.sdk_version().starts_with("RUST-SDK v"));
        assert!(config.os_platform().contains('/'));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_PROTOCOL, "http"),
            (ENV_DOMAIN, "localhost:8080"),
            (ENV_PREFIX, "api/"),
            (ENV_APP_ID, "app"),
        ]));

        assert_eq!(config.api_key(), "key");
        assert_eq!(config.api_secret(), "secret");
        assert_eq!(config.protocol(), "http");
        assert_eq!(config.domain(), "localhost:8080");
        assert_eq!(config.prefix(), "api/");
        assert_eq!(config.app_id(), Some("app"));
    }

    #[test]
    fn test_from_lookup_keeps_defaults_for_empty_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_PROTOCOL, ""),
            (ENV_DOMAIN, ""),
            (ENV_API_KEY, "key"),
        ]));

        assert_eq!(config.protocol(), DEFAULT_PROTOCOL);
        assert_eq!(config.domain(), DEFAULT_DOMAIN);
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn test_configure_applies_known_keys() {
        let config = ClientConfig::default().configure([
            ("apiKey", "k"),
            ("apiSecret", "s"),
            ("protocol", "http"),
            ("domain", "example.test"),
            ("pathPrefix", "v2/"),
            ("appId", "my-app"),
        ]);

        assert_eq!(config.api_key(), "k");
        assert_eq!(config.api_secret(), "s");
        assert_eq!(config.base_url(), "http://example.test/v2/");
        assert_eq!(config.app_id(), Some("my-app"));
    }

    #[test]
    fn test_configure_accepts_legacy_keys() {
        let config = ClientConfig::default().configure([
            ("APIKey", "k"),
            ("Prefix", "p/"),
        ]);
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.prefix(), "p/");
    }

    #[test]
    fn test_configure_ignores_unknown_keys_and_empty_input() {
        let base = ClientConfig::default().with_api_key("k");
        let unchanged = base
            .clone()
            .configure([("nonsense", "x"), ("sdkVersion", "hijack")])
            .configure(Vec::<(String, String)>::new());
        assert_eq!(unchanged, base);
    }

    #[test]
    fn test_url_joins_prefix_and_resource() {
        let config = ClientConfig::default().with_prefix("beta/");
        let url = config.url("storage/v1/files").expect("url");
        assert_eq!(url.as_str(), "https://api.solapi.com/beta/storage/v1/files");
    }

    #[test]
    fn test_url_rejects_broken_domain() {
        let config = ClientConfig::default().with_domain("bad host");
        assert!(config.url("cash/v1/balance").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_api_secret("top-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
