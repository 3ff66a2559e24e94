use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during floor-plan extraction
#[derive(Error, Debug)]
pub enum Error {
    #[error("Core parser error: {0}")]
    CoreError(#[from] dxf_lite_core::Error),
}
