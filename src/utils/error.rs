use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Connectivity failure: {0}")]
    Connectivity(#[from] reqwest::Error),

    #[error("Health endpoint returned a non-JSON body: {message}")]
    InvalidHealthBody { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProbeError {
    /// 連線類錯誤（逾時、DNS、非 2xx、無法解析的回應）
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            ProbeError::Connectivity(_) | ProbeError::InvalidHealthBody { .. }
        )
    }

    /// 連線失敗回傳 1，設定或文章內容錯誤回傳 2
    pub fn exit_code(&self) -> i32 {
        if self.is_connectivity() {
            1
        } else {
            2
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::Connectivity(e) if e.is_timeout() => {
                "Server error: the health check timed out".to_string()
            }
            ProbeError::Connectivity(e) if e.is_status() => match e.status() {
                Some(status) => format!("Server error: health check returned {}", status),
                None => format!("Server error: {}", e),
            },
            ProbeError::Connectivity(e) => format!("Server error: {}", e),
            ProbeError::InvalidHealthBody { message } => {
                format!("Server error: unreadable health response ({})", message)
            }
            ProbeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProbeError::Connectivity(_) | ProbeError::InvalidHealthBody { .. } => {
                "Check that the blog server is running and that --base-url points at it"
            }
            ProbeError::TomlError(_) | ProbeError::IoError(_) => {
                "Check the path and syntax of the article file"
            }
            ProbeError::SerializationError(_) => "Check the article fields for unsupported values",
            ProbeError::ConfigError { .. } | ProbeError::InvalidConfigValueError { .. } => {
                "Fix the reported option or article field and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
