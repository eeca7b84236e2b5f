use crate::core::component::GreetingComponent;
use crate::domain::ports::Greeter;
use crate::utils::error::{Result, WireError};
use reqwest::Client;
use std::sync::Arc;

/// Application service: forwards greetings to the injected library
/// component and keeps a shared handle on the HTTP client bean.
///
/// The client is never used for I/O here; it is exposed through
/// [`GreetingService::http_client`] so callers can verify the wiring.
#[derive(Debug)]
pub struct GreetingService {
    component: GreetingComponent,
    http_client: Option<Arc<Client>>,
}

impl GreetingService {
    pub fn new(component: GreetingComponent) -> Self {
        tracing::info!("Component injected {:?}", component);
        Self {
            component,
            http_client: None,
        }
    }

    pub fn with_http_client(component: GreetingComponent, http_client: Arc<Client>) -> Self {
        tracing::info!("Component injected {:?}", component);
        tracing::info!("3rd party library injected {:?}", http_client);
        Self {
            component,
            http_client: Some(http_client),
        }
    }

    pub fn hello(&self, name: &str) -> String {
        let res = self.component.hello(name);
        tracing::info!("{}", res);
        res
    }

    /// 名稱可能缺失的入口（命令列、設定檔）使用
    pub fn try_hello(&self, name: Option<&str>) -> Result<String> {
        name.map(|name| self.hello(name))
            .ok_or(WireError::MissingName)
    }

    pub fn http_client(&self) -> Option<&Arc<Client>> {
        self.http_client.as_ref()
    }
}

impl Greeter for GreetingService {
    fn hello(&self, name: &str) -> String {
        GreetingService::hello(self, name)
    }
}
