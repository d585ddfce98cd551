use std::collections::HashMap;

use crate::{Error, Result};

/// Proxies to route requests through, per URL scheme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    pub http: Option<String>,
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Routes both `http` and `https` requests through the same proxy
    pub fn all(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            http: Some(url.clone()),
            https: Some(url),
        }
    }

    pub fn per_scheme(http: Option<String>, https: Option<String>) -> Self {
        Self { http, https }
    }

    pub(super) fn apply(&self, mut builder: reqwest::ClientBuilder) -> Result<reqwest::ClientBuilder> {
        if let Some(url) = &self.http {
            let proxy = reqwest::Proxy::http(url)
                .map_err(|e| Error::InvalidParameter(format!("invalid http proxy {url:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        if let Some(url) = &self.https {
            let proxy = reqwest::Proxy::https(url)
                .map_err(|e| Error::InvalidParameter(format!("invalid https proxy {url:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        Ok(builder)
    }
}

impl From<&str> for ProxyConfig {
    fn from(value: &str) -> Self {
        Self::all(value)
    }
}

impl From<String> for ProxyConfig {
    fn from(value: String) -> Self {
        Self::all(value)
    }
}

/// Accepts the `{"http": .., "https": ..}` mapping form, rejecting any other scheme
impl TryFrom<HashMap<String, String>> for ProxyConfig {
    type Error = Error;

    fn try_from(value: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut config = Self::default();

        for (scheme, url) in value {
            match scheme.as_str() {
                "http" => config.http = Some(url),
                "https" => config.https = Some(url),
                other => {
                    return Err(Error::InvalidParameter(format!(
                        "unsupported proxy scheme {other:?}"
                    )))
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_url_covers_both_schemes() {
        let config = ProxyConfig::from("socks5://127.0.0.1:1080");
        assert_eq!(config.http.as_deref(), Some("socks5://127.0.0.1:1080"));
        assert_eq!(config.https.as_deref(), Some("socks5://127.0.0.1:1080"));
    }

    #[test]
    fn mapping() {
        let config = ProxyConfig::try_from(HashMap::from([(
            "https".to_string(),
            "http://127.0.0.1:3128".to_string(),
        )]))
        .unwrap();

        assert_eq!(
            config,
            ProxyConfig::per_scheme(None, Some("http://127.0.0.1:3128".to_string()))
        );
    }

    #[test]
    fn mapping_unknown_scheme() {
        let result = ProxyConfig::try_from(HashMap::from([(
            "ftp".to_string(),
            "http://127.0.0.1:3128".to_string(),
        )]));
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn applies_to_builder() {
        let config = ProxyConfig::per_scheme(
            Some("http://127.0.0.1:3128".to_string()),
            Some("http://127.0.0.1:3129".to_string()),
        );
        let builder = config.apply(reqwest::Client::builder()).unwrap();
        assert!(builder.build().is_ok());
    }
}
