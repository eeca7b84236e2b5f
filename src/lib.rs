pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::app::{context::AppContext, service::GreetingService};
pub use crate::config::{GreetingConfig, HttpClientConfig, WireConfig};
pub use crate::core::{component::GreetingComponent, http::HttpClientFactory};
pub use crate::domain::ports::Greeter;
pub use crate::utils::error::{Result, WireError};
