//! # sesame
//!
//! `sesame` signs outbound http requests with a shared secret so that the receiving server can check
//! their authenticity and integrity.
//!
//! A request is reduced to a canonical message
//! `<url>:<body>:<timestamp>:<request id>` where `https://` in the url is rewritten to `http://` and
//! an already gzip-compressed body is rendered in hex. The message is signed with HMAC-SHA512 and the
//! result is carried in the `Sesame-*` headers.
//!
//! This crate is transport agnostic. See `sesame-hyper` for the integration with `http` requests.

mod body;
mod config;
mod context;
mod crypto;
mod error;
mod headers;
mod message;
mod signer;
mod trace;

pub mod prelude {
  pub mod headers {
    pub use crate::headers::{PROTOCOL_HEADER, REQUEST_ID_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};
  }

  pub use crate::{
    body::{is_compressed, BodySnapshot},
    config::{SesameConfig, SECRET_KEY_ENV},
    context::{Clock, FixedClock, FixedRequestId, RandomRequestId, RequestIdSource, SigningContext, SystemClock},
    crypto::{SharedKey, SigningKey, SigningProtocol},
    error::{SesameError, SesameResult},
    headers::SesameHeaders,
    message::{CanonicalMessage, RequestSnapshot},
    signer::SesameSigner,
  };
  pub use uuid::Uuid;
}

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::prelude::*;
  use hmac::{Hmac, Mac};

  const SECRET_KEY: &str = "s3cr3t";
  const URL: &str = "https://api.example.com/v1/ping";
  const TIMESTAMP: u64 = 1700000000000;
  const REQUEST_ID: &str = "00000000-0000-4000-8000-000000000000";
  const CANONICAL_MESSAGE: &str = "http://api.example.com/v1/ping::1700000000000:00000000-0000-4000-8000-000000000000";
  const SIGNATURE: &str = "00730bc643572963eb3b87d054be90357860339842a65c791184546255d8668d63057b4084d8d3cd633fac54dfb867b263f19c3d2ff1a06108c8943636ae00e1";

  #[test]
  fn test_using_test_vector_hmac_sha512() {
    let signer = SesameSigner::try_new(&SesameConfig::new(SECRET_KEY)).unwrap();
    let request = RequestSnapshot::new(URL, BodySnapshot::empty());
    let context = SigningContext::new(TIMESTAMP, Uuid::parse_str(REQUEST_ID).unwrap());

    let message = CanonicalMessage::new(&request, &context);
    assert_eq!(message.to_string(), CANONICAL_MESSAGE);

    let signature = signer.sign(&request, &context).unwrap();
    assert_eq!(signature, SIGNATURE);
  }

  #[test]
  fn test_with_directly_using_mac() {
    let mut mac = Hmac::<sha2::Sha512>::new_from_slice(SECRET_KEY.as_bytes()).unwrap();
    mac.update(CANONICAL_MESSAGE.as_bytes());
    assert_eq!(hex::encode(mac.finalize().into_bytes()), SIGNATURE);
  }

  #[test]
  fn test_with_build_headers_api() {
    let signer = SesameSigner::new(SharedKey::from_bytes(SECRET_KEY).unwrap())
      .with_clock(FixedClock(TIMESTAMP))
      .with_request_id_source(FixedRequestId(Uuid::parse_str(REQUEST_ID).unwrap()));
    let request = RequestSnapshot::new(URL, BodySnapshot::empty());
    let headers = signer.sign_now(&request).unwrap();

    let pairs = headers.to_pairs();
    assert_eq!(pairs[0], (headers::TIMESTAMP_HEADER, TIMESTAMP.to_string()));
    assert_eq!(pairs[1], (headers::REQUEST_ID_HEADER, REQUEST_ID.to_string()));
    assert_eq!(pairs[2], (headers::SIGNATURE_HEADER, SIGNATURE.to_string()));
    assert_eq!(pairs[3], (headers::PROTOCOL_HEADER, "Sha512".to_string()));
  }
}
