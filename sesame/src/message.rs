use crate::{body::BodySnapshot, context::SigningContext};

/// Immutable view of an outbound request at signing time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
  /// absolute url including scheme, host, path and query
  pub url: String,
  pub body: BodySnapshot,
}

impl RequestSnapshot {
  pub fn new(url: impl Into<String>, body: impl Into<BodySnapshot>) -> Self {
    Self {
      url: url.into(),
      body: body.into(),
    }
  }
}

/* --------------------------------------- */
/// Canonical message
/// `<url with https:// rewritten to http://>:<body>:<timestamp>:<request id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMessage {
  url: String,
  body: String,
  context: SigningContext,
}

impl CanonicalMessage {
  /// Builds the canonical message of the request for the given signing context
  pub fn new(request: &RequestSnapshot, context: &SigningContext) -> Self {
    Self {
      url: normalize_url(&request.url),
      body: request.body.representation(),
      context: *context,
    }
  }

  /// Returns the message as bytes to be signed
  pub fn as_bytes(&self) -> Vec<u8> {
    self.to_string().into_bytes()
  }
}

impl std::fmt::Display for CanonicalMessage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}:{}:{}:{}",
      self.url,
      self.body,
      self.context.timestamp,
      self.context.request_id.hyphenated()
    )
  }
}

/// Textual substitution of every `https://` in the url, which the verifying side mirrors.
fn normalize_url(url: &str) -> String {
  url.replace("https://", "http://")
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  fn context() -> SigningContext {
    SigningContext::new(1690000000000, Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap())
  }

  #[test]
  fn plain_body() {
    let request = RequestSnapshot::new("https://api.example.com/v1/x", "{\"k\":\"v\"}");
    let message = CanonicalMessage::new(&request, &context());
    assert_eq!(
      message.to_string(),
      "http://api.example.com/v1/x:{\"k\":\"v\"}:1690000000000:3fa85f64-5717-4562-b3fc-2c963f66afa6"
    );
  }

  #[test]
  fn compressed_body() {
    let request = RequestSnapshot::new("https://api.example.com/v1/x", vec![0x1f, 0x8b, 0x7b, 0x7d]);
    let message = CanonicalMessage::new(&request, &context());
    assert_eq!(
      message.to_string(),
      "http://api.example.com/v1/x:1f8b7b7d:1690000000000:3fa85f64-5717-4562-b3fc-2c963f66afa6"
    );
  }

  #[test]
  fn empty_body_keeps_separators() {
    let request = RequestSnapshot::new("http://api.example.com/v1/ping", BodySnapshot::empty());
    let message = CanonicalMessage::new(&request, &context()).to_string();
    assert_eq!(
      message,
      "http://api.example.com/v1/ping::1690000000000:3fa85f64-5717-4562-b3fc-2c963f66afa6"
    );
    assert_eq!(message.matches(':').count(), 4);
  }

  #[test]
  fn query_is_kept_verbatim() {
    let request = RequestSnapshot::new("https://h.example/p?a=1&b=x%20y", "");
    let message = CanonicalMessage::new(&request, &context()).to_string();
    assert!(message.starts_with("http://h.example/p?a=1&b=x%20y::"));
  }

  #[test]
  fn every_https_occurrence_is_rewritten() {
    let request = RequestSnapshot::new("https://h.example/cb?next=https://other.example/", "");
    let message = CanonicalMessage::new(&request, &context()).to_string();
    assert!(message.starts_with("http://h.example/cb?next=http://other.example/::"));
  }

  #[test]
  fn other_schemes_untouched() {
    assert_eq!(normalize_url("http://h.example/"), "http://h.example/");
    assert_eq!(normalize_url("HTTPS://h.example/"), "HTTPS://h.example/");
  }
}
