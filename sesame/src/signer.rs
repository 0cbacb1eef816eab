use crate::{
  config::SesameConfig,
  context::{Clock, RandomRequestId, RequestIdSource, SigningContext, SystemClock},
  crypto::{SharedKey, SigningKey},
  error::SesameResult,
  headers::SesameHeaders,
  message::{CanonicalMessage, RequestSnapshot},
  trace::*,
};
use std::sync::Arc;

/// Signs request snapshots with a fixed shared secret.
///
/// The signer holds no mutable state and can be shared across threads and tasks.
/// Timestamps and request ids are drawn from the configured [`Clock`] and [`RequestIdSource`],
/// which default to the wall clock and random UUID v4.
#[derive(Clone)]
pub struct SesameSigner {
  key: SharedKey,
  clock: Arc<dyn Clock>,
  request_ids: Arc<dyn RequestIdSource>,
}

impl SesameSigner {
  /// Create a signer from a validated shared key
  pub fn new(key: SharedKey) -> Self {
    Self {
      key,
      clock: Arc::new(SystemClock),
      request_ids: Arc::new(RandomRequestId),
    }
  }

  /// Create a signer from configuration, failing on an unusable secret key
  pub fn try_new(config: &SesameConfig) -> SesameResult<Self> {
    Ok(Self::new(config.shared_key()?))
  }

  /// Replace the timestamp source
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Arc::new(clock);
    self
  }

  /// Replace the request id source
  pub fn with_request_id_source(mut self, request_ids: impl RequestIdSource + 'static) -> Self {
    self.request_ids = Arc::new(request_ids);
    self
  }

  /// Fresh timestamp and request id for a new request
  pub fn next_context(&self) -> SigningContext {
    SigningContext::generate(self.clock.as_ref(), self.request_ids.as_ref())
  }

  /// Compute the lowercase hex signature of the request for the given context
  pub fn sign(&self, request: &RequestSnapshot, context: &SigningContext) -> SesameResult<String> {
    let message = CanonicalMessage::new(request, context).as_bytes();
    trace!(
      "Signing canonical message of {} bytes for request {}",
      message.len(),
      context.request_id
    );
    let mac = self.key.sign(&message)?;
    Ok(hex::encode(mac))
  }

  /// Compute the headers to attach to the request for the given context
  pub fn build_headers(&self, request: &RequestSnapshot, context: &SigningContext) -> SesameResult<SesameHeaders> {
    let signature = self.sign(request, context)?;
    Ok(SesameHeaders::new(context, signature, self.key.protocol()))
  }

  /// Compute the headers to attach to the request with a fresh context
  pub fn sign_now(&self, request: &RequestSnapshot) -> SesameResult<SesameHeaders> {
    self.build_headers(request, &self.next_context())
  }
}

impl std::fmt::Debug for SesameSigner {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SesameSigner").field("key", &self.key).finish_non_exhaustive()
  }
}
