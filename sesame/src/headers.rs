use crate::{context::SigningContext, crypto::SigningProtocol};
use uuid::Uuid;

/// `Sesame-Timestamp` header name
pub const TIMESTAMP_HEADER: &str = "Sesame-Timestamp";
/// `Sesame-Request-Id` header name
pub const REQUEST_ID_HEADER: &str = "Sesame-Request-Id";
/// `Sesame-Signature` header name
pub const SIGNATURE_HEADER: &str = "Sesame-Signature";
/// `Sesame-Protocol` header name
pub const PROTOCOL_HEADER: &str = "Sesame-Protocol";

/// The four headers attached to a signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SesameHeaders {
  timestamp: u64,
  request_id: Uuid,
  signature: String,
  protocol: SigningProtocol,
}

impl SesameHeaders {
  pub(crate) fn new(context: &SigningContext, signature: String, protocol: SigningProtocol) -> Self {
    Self {
      timestamp: context.timestamp,
      request_id: context.request_id,
      signature,
      protocol,
    }
  }

  pub fn timestamp(&self) -> u64 {
    self.timestamp
  }

  pub fn request_id(&self) -> Uuid {
    self.request_id
  }

  /// Lowercase hex signature
  pub fn signature(&self) -> &str {
    &self.signature
  }

  pub fn protocol(&self) -> SigningProtocol {
    self.protocol
  }

  /// Header (name, value) pairs in emission order
  pub fn to_pairs(&self) -> [(&'static str, String); 4] {
    [
      (TIMESTAMP_HEADER, self.timestamp.to_string()),
      (REQUEST_ID_HEADER, self.request_id.hyphenated().to_string()),
      (SIGNATURE_HEADER, self.signature.clone()),
      (PROTOCOL_HEADER, self.protocol.to_string()),
    ]
  }
}
