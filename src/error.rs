use thiserror::Error;

/// molt 統一エラー型
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed error: {url} (status: {status})")]
    Feed { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found: {0}")]
    DataDir(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid entry in {file}: {reason}")]
    InvalidEntry { file: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            HubError::Network(_) => true,
            HubError::Feed { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}
