mod symmetric;

use crate::error::{SesameError, SesameResult};

pub use symmetric::SharedKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Protocol names carried in the `Sesame-Protocol` header
pub enum SigningProtocol {
  Sha512,
}

impl SigningProtocol {
  pub fn as_str(&self) -> &'static str {
    match self {
      SigningProtocol::Sha512 => "Sha512",
    }
  }
}

impl std::fmt::Display for SigningProtocol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for SigningProtocol {
  type Err = SesameError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Sha512" => Ok(Self::Sha512),
      _ => Err(SesameError::InvalidProtocol(s.to_string())),
    }
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> SesameResult<Vec<u8>>;
  fn protocol(&self) -> SigningProtocol;
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  fn protocol_name() {
    assert_eq!(SigningProtocol::Sha512.to_string(), "Sha512");
    assert_eq!(SigningProtocol::from_str("Sha512").unwrap(), SigningProtocol::Sha512);
    assert!(SigningProtocol::from_str("sha512").is_err());
    assert!(SigningProtocol::from_str("hmac-sha256").is_err());
  }
}
