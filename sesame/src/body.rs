use crate::trace::*;
use bytes::Bytes;

/// gzip magic number, RFC 1952 section 2.3.1
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true if the body already starts with the gzip magic number.
/// Bodies shorter than the magic number are never treated as compressed.
pub fn is_compressed(body: &[u8]) -> bool {
  body.starts_with(&GZIP_MAGIC)
}

/* --------------------------------------- */
/// Body bytes of a request as seen at signing time.
///
/// Reading a body never fails from the signer's point of view: a body that could not be read
/// is kept as [`BodySnapshot::Unreadable`] and signed exactly like an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySnapshot {
  /// Buffered body bytes, possibly empty
  Bytes(Bytes),
  /// The body source failed while being read
  Unreadable,
}

impl BodySnapshot {
  /// Snapshot of a request without body
  pub fn empty() -> Self {
    BodySnapshot::Bytes(Bytes::new())
  }

  /// Maps the outcome of a body read into a snapshot, swallowing the error
  pub fn from_read<E>(read: Result<Bytes, E>) -> Self {
    match read {
      Ok(bytes) => BodySnapshot::Bytes(bytes),
      Err(_) => {
        debug!("Request body could not be read, signing it as empty");
        BodySnapshot::Unreadable
      }
    }
  }

  /// Raw body bytes, empty when unreadable
  pub fn bytes(&self) -> &[u8] {
    match self {
      BodySnapshot::Bytes(bytes) => bytes,
      BodySnapshot::Unreadable => &[],
    }
  }

  /// Whether the body is already gzip compressed
  pub fn is_compressed(&self) -> bool {
    is_compressed(self.bytes())
  }

  /// Representation of the body inside the canonical message.
  /// Compressed bodies are rendered in lowercase hex, others are decoded as utf-8.
  /// A body that is not valid utf-8 is represented by an empty string.
  pub fn representation(&self) -> String {
    let bytes = self.bytes();
    if is_compressed(bytes) {
      return hex::encode(bytes);
    }
    match std::str::from_utf8(bytes) {
      Ok(s) => s.to_string(),
      Err(e) => {
        debug!("Request body is not valid utf-8 ({e}), signing it as empty");
        String::new()
      }
    }
  }
}

impl Default for BodySnapshot {
  fn default() -> Self {
    Self::empty()
  }
}

impl From<Bytes> for BodySnapshot {
  fn from(bytes: Bytes) -> Self {
    BodySnapshot::Bytes(bytes)
  }
}

impl From<Vec<u8>> for BodySnapshot {
  fn from(bytes: Vec<u8>) -> Self {
    BodySnapshot::Bytes(Bytes::from(bytes))
  }
}

impl From<&'static str> for BodySnapshot {
  fn from(s: &'static str) -> Self {
    BodySnapshot::Bytes(Bytes::from_static(s.as_bytes()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gzip_magic_detection() {
    assert!(is_compressed(&[0x1f, 0x8b]));
    assert!(is_compressed(&[0x1f, 0x8b, 0x08, 0x00]));
    assert!(!is_compressed(&[]));
    assert!(!is_compressed(&[0x1f]));
    assert!(!is_compressed(&[0x8b, 0x1f]));
    assert!(!is_compressed(b"{\"k\":\"v\"}"));
  }

  #[test]
  fn representation_of_plain_body() {
    let body = BodySnapshot::from("{\"k\":\"v\"}");
    assert!(!body.is_compressed());
    assert_eq!(body.representation(), "{\"k\":\"v\"}");
  }

  #[test]
  fn representation_of_compressed_body() {
    let body = BodySnapshot::from(vec![0x1f, 0x8b, 0x08, 0x00, 0xff]);
    assert!(body.is_compressed());
    assert_eq!(body.representation(), "1f8b0800ff");
  }

  #[test]
  fn representation_of_invalid_utf8_body() {
    let body = BodySnapshot::from(vec![0xc3, 0x28, 0x41]);
    assert_eq!(body.representation(), "");
  }

  #[test]
  fn unreadable_body_is_empty() {
    let body = BodySnapshot::from_read(Err::<Bytes, _>("stream already consumed"));
    assert_eq!(body, BodySnapshot::Unreadable);
    assert!(body.bytes().is_empty());
    assert!(!body.is_compressed());
    assert_eq!(body.representation(), BodySnapshot::empty().representation());
  }

  #[test]
  fn single_byte_body() {
    let body = BodySnapshot::from(vec![0x1f]);
    assert!(!body.is_compressed());
    assert_eq!(body.representation(), "\u{1f}");
  }
}
