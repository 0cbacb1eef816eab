use sesame::prelude::SesameError;
use thiserror::Error;

/// Result type for sesame signing of hyper requests
pub type HyperSesameResult<T> = std::result::Result<T, HyperSesameError>;

/// Error type for sesame signing of hyper requests
#[derive(Error, Debug)]
pub enum HyperSesameError {
  /// Failed to build header name
  #[error("Failed to parse header name: {0}")]
  InvalidHeaderName(#[from] http::header::InvalidHeaderName),

  /// Failed to build header value
  #[error("Failed to parse header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

  /// Inherited from SesameError
  #[error("SesameError: {0}")]
  SesameError(#[from] SesameError),
}
