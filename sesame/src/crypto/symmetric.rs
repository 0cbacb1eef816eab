use super::SigningProtocol;
use crate::{
  error::{SesameError, SesameResult},
  trace::*,
};
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};

type HmacSha512 = Hmac<sha2::Sha512>;

/* -------------------------------- */
/// Shared secret key for sesame signatures.
/// The raw bytes are used as the hmac key as is, without any derivation.
#[derive(Clone)]
pub enum SharedKey {
  /// hmac-sha512
  HmacSha512(Vec<u8>),
}

impl SharedKey {
  /// Create a new shared key from raw bytes
  pub fn from_bytes(key: impl AsRef<[u8]>) -> SesameResult<Self> {
    let key = key.as_ref();
    if key.is_empty() {
      error!("Rejected empty secret key");
      return Err(SesameError::InvalidSecretKey("secret key must not be empty".to_string()));
    }
    HmacSha512::new_from_slice(key).map_err(|e| {
      error!("Rejected secret key: {e}");
      SesameError::InvalidSecretKey(e.to_string())
    })?;
    Ok(SharedKey::HmacSha512(key.to_vec()))
  }

  /// Create a new shared key from base64 encoded string
  pub fn from_base64(key: &str) -> SesameResult<Self> {
    let key = general_purpose::STANDARD.decode(key)?;
    Self::from_bytes(key)
  }
}

impl std::fmt::Debug for SharedKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SharedKey::HmacSha512(key) => f.debug_tuple("HmacSha512").field(&format!("<{} bytes>", key.len())).finish(),
    }
  }
}

impl super::SigningKey for SharedKey {
  /// Sign the data
  fn sign(&self, data: &[u8]) -> SesameResult<Vec<u8>> {
    match self {
      SharedKey::HmacSha512(key) => {
        let mut mac = HmacSha512::new_from_slice(key).map_err(|e| SesameError::InvalidSecretKey(e.to_string()))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
      }
    }
  }

  /// Get the protocol name
  fn protocol(&self) -> SigningProtocol {
    match self {
      SharedKey::HmacSha512(_) => SigningProtocol::Sha512,
    }
  }
}
