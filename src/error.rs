use thiserror::Error;

pub type CrosshairResult<T> = Result<T, CrosshairError>;

#[derive(Debug, Error)]
pub enum CrosshairError {
    #[error("invalid crosshair config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing surface failure: {0}")]
    Surface(String),
}
