pub mod component;
pub mod http;
