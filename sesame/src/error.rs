use thiserror::Error;

/// Result type for sesame signing
pub type SesameResult<T> = std::result::Result<T, SesameError>;

/// Error type for sesame signing
#[derive(Error, Debug)]
pub enum SesameError {
  #[error("Base64 decode error: {0}")]
  Base64DecodeError(#[from] base64::DecodeError),

  /* ----- Configuration errors ----- */
  /// Secret key rejected by the mac primitive, or empty
  #[error("Invalid secret key: {0}")]
  InvalidSecretKey(String),
  /// Required configuration value is absent
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  /// Unknown value for the `Sesame-Protocol` header
  #[error("Invalid protocol name: {0}")]
  InvalidProtocol(String),
}
