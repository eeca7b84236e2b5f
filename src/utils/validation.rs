use crate::utils::error::{Result, WireError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Proxies are reached over plain HTTP(S) and need a host to connect to.
pub fn validate_proxy_url(field_name: &str, proxy: &str) -> Result<()> {
    let invalid = |reason: String| WireError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: proxy.to_string(),
        reason,
    };

    let url = Url::parse(proxy).map_err(|e| {
        invalid(format!(
            "Proxy must be an absolute http:// or https:// URL ({})",
            e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "Proxy scheme '{}' is not supported, use http or https",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("Proxy URL has no host".to_string()));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
