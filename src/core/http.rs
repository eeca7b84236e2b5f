use crate::config::HttpClientConfig;
use crate::utils::error::Result;
use reqwest::{Client, Proxy};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Produces the shared HTTP client bean.
///
/// The composition root calls [`HttpClientFactory::create_client`] once and
/// hands clones of the returned `Arc` to every consumer.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    config: HttpClientConfig,
}

impl HttpClientFactory {
    pub fn new(config: HttpClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn create_client(&self) -> Result<Arc<Client>> {
        let user_agent = self
            .config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);

        let mut builder = Client::builder().user_agent(user_agent);

        if let Some(secs) = self.config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(max_idle) = self.config.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        if let Some(proxy) = &self.config.proxy {
            builder = builder.proxy(Proxy::all(proxy.as_str())?);
        }

        let client = builder.build()?;
        tracing::debug!(
            "HTTP client created (user_agent: {}, timeout: {:?}, connect_timeout: {:?}, proxy: {:?})",
            user_agent,
            self.config.timeout_seconds,
            self.config.connect_timeout_seconds,
            self.config.proxy
        );

        Ok(Arc::new(client))
    }
}
