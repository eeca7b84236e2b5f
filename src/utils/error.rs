use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("A name is required but none was given")]
    MissingName,

    #[error("HTTP client construction failed: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WireError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WireError::MissingName => {
                "Pass a name argument or set [greeting] default_name in the config file"
            }
            WireError::HttpClientError(_) => {
                "Check the [http_client] settings, especially proxy and user_agent"
            }
            WireError::IoError(_) => "Make sure the config file exists and is readable",
            WireError::ConfigParseError { .. } => "Make sure the config file is valid TOML",
            WireError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
