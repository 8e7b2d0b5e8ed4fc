#[derive(Debug, thiserror::Error)]
pub enum BricksetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}

pub type Result<T> = std::result::Result<T, BricksetError>;
