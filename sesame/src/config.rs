use crate::{
  crypto::SharedKey,
  error::{SesameError, SesameResult},
};

/// Default environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "SESAME_SECRET_KEY";

/// Signer configuration. The secret key is shared out-of-band with the verifying server.
#[derive(Clone)]
pub struct SesameConfig {
  secret_key: Vec<u8>,
}

impl SesameConfig {
  pub fn new(secret_key: impl AsRef<[u8]>) -> Self {
    Self {
      secret_key: secret_key.as_ref().to_vec(),
    }
  }

  /// Reads the secret key from the given environment variable
  pub fn from_env(var: &str) -> SesameResult<Self> {
    let secret_key = std::env::var_os(var).ok_or_else(|| SesameError::MissingConfig(format!("`{var}` is not set")))?;
    Ok(Self::new(secret_key.as_encoded_bytes()))
  }

  /// Validates the secret key and turns it into a shared key
  pub fn shared_key(&self) -> SesameResult<SharedKey> {
    SharedKey::from_bytes(&self.secret_key)
  }
}

impl std::fmt::Debug for SesameConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SesameConfig").field("secret_key", &"<redacted>").finish()
  }
}
