//! Network configuration derived from the process environment.
//!
//! Proxy settings come from `PROXY_HOST` / `PROXY_PORT`; the user agent is
//! the product identifier plus the running product version. Everything is
//! resolved once at context construction and read-only afterward.

use aws_smithy_http_client::proxy::ProxyConfig;
use aws_smithy_http_client::{Builder as HttpClientBuilder, Connector, tls};
use aws_smithy_runtime_api::client::http::SharedHttpClient;

use crate::error::AwsError;

/// Environment variable naming the outbound proxy host.
pub const PROXY_HOST_VAR: &str = "PROXY_HOST";
/// Environment variable naming the outbound proxy port.
pub const PROXY_PORT_VAR: &str = "PROXY_PORT";

const PRODUCT_NAME: &str = "quarry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfiguration {
    proxy: Option<ProxySettings>,
    user_agent: String,
}

impl NetworkConfiguration {
    /// Build a configuration from explicit parts. The crate version stands
    /// in for the product version when callers have nothing better.
    pub fn new(proxy: Option<ProxySettings>, product_version: &str) -> Self {
        Self {
            proxy,
            user_agent: format!("{PRODUCT_NAME}-{product_version}"),
        }
    }

    /// Read proxy settings from the process environment.
    pub fn from_env() -> Result<Self, AwsError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), but over an injected lookup so
    /// tests can supply a fake environment.
    ///
    /// An unparseable `PROXY_PORT` is always fatal, even when no host is
    /// set. A host without a port is fatal too: there is no sensible port
    /// to default to.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AwsError> {
        let host = lookup(PROXY_HOST_VAR).filter(|host| !host.is_empty());
        let port = lookup(PROXY_PORT_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .map_err(|source| AwsError::InvalidProxyPort { value: raw, source })
            })
            .transpose()?;

        let proxy = match (host, port) {
            (Some(host), Some(port)) => Some(ProxySettings { host, port }),
            (Some(host), None) => {
                return Err(AwsError::Config(format!(
                    "{PROXY_HOST_VAR} is set to {host:?} but {PROXY_PORT_VAR} is not set"
                )));
            }
            (None, _) => None,
        };

        Ok(Self::new(proxy, env!("CARGO_PKG_VERSION")))
    }

    pub fn proxy(&self) -> Option<&ProxySettings> {
        self.proxy.as_ref()
    }

    /// Product identifier sent as the SDK app name on every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl ProxySettings {
    /// Build an HTTPS client that routes requests through this proxy.
    pub(crate) fn https_client(&self) -> Result<SharedHttpClient, AwsError> {
        let address = format!("http://{}:{}", self.host, self.port);
        let proxy = ProxyConfig::https(&address)
            .map_err(|e| AwsError::Config(format!("invalid proxy address {address}: {e}")))?;
        tracing::debug!(host = %self.host, port = self.port, "routing AWS requests through proxy");
        Ok(HttpClientBuilder::new().build_with_connector_fn(
            move |settings, runtime_components| {
                let mut builder = Connector::builder()
                    .proxy_config(proxy.clone())
                    .tls_provider(tls::Provider::Rustls(tls::rustls_provider::CryptoMode::AwsLc));
                builder.set_connector_settings(settings.cloned());
                if let Some(components) = runtime_components {
                    builder.set_sleep_impl(components.sleep_impl());
                }
                builder.build()
            },
        ))
    }
}
