use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewardError {
    #[error("Missing required input: {key}")]
    MissingInput { key: String },

    #[error("Invalid input `{key}`: {reason}")]
    InvalidInput { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RewardError {
    pub fn missing(key: &str) -> Self {
        RewardError::MissingInput { key: key.to_string() }
    }

    pub fn invalid(key: &str, reason: impl Into<String>) -> Self {
        RewardError::InvalidInput { key: key.to_string(), reason: reason.into() }
    }

    /// 호출자가 잘못된 스냅샷을 넘긴 경우 (설정 오류와 구분)
    pub fn is_caller_error(&self) -> bool {
        match self {
            RewardError::MissingInput { .. } => true,
            RewardError::InvalidInput { .. } => true,
            RewardError::Json(_) => true,
            RewardError::Config(_) => false,
        }
    }
}

impl From<serde_yaml::Error> for RewardError {
    fn from(err: serde_yaml::Error) -> Self {
        RewardError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RewardError>;
