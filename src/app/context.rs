use crate::app::service::GreetingService;
use crate::config::WireConfig;
use crate::core::component::GreetingComponent;
use crate::core::http::HttpClientFactory;
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;

/// Composition root.
///
/// Builds every bean exactly once, leaf first, and owns them for the rest of
/// the process. Dependents receive shared `Arc` handles, never copies.
#[derive(Debug)]
pub struct AppContext {
    http_client: Arc<Client>,
    greeting_service: GreetingService,
    default_name: Option<String>,
}

impl AppContext {
    pub fn new(config: &WireConfig) -> Result<Self> {
        let component = GreetingComponent::new();
        let http_client = HttpClientFactory::new(config.http_client.clone()).create_client()?;
        let greeting_service =
            GreetingService::with_http_client(component, Arc::clone(&http_client));

        tracing::debug!("Application context composed");

        Ok(Self {
            http_client,
            greeting_service,
            default_name: config.greeting.default_name.clone(),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&WireConfig::default())
    }

    pub fn greeting_service(&self) -> &GreetingService {
        &self.greeting_service
    }

    pub fn http_client(&self) -> &Arc<Client> {
        &self.http_client
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }
}
