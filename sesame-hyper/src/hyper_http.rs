use crate::{
  error::{HyperSesameError, HyperSesameResult},
  hyper_body::{BufferedBody, RequestBodyBuffer},
};
use bytes::Bytes;
use http::{header::HeaderName, HeaderValue, Request};
use http_body::Body;
use http_body_util::Full;
use sesame::prelude::{RequestSnapshot, SesameConfig, SesameHeaders, SesameSigner, SigningContext};
use std::{future::Future, sync::Arc};

/// A buffered request whose body can be read any number of times
pub type BufferedRequest = Request<Full<Bytes>>;

/* --------------------------------------- */
/// A trait about sesame signatures for buffered requests
pub trait SesameRequest {
  type Error;

  /// Check if the request already has all the sesame headers
  fn has_sesame_signature(&self) -> bool;

  /// Take a snapshot of url and body without consuming the request
  fn sesame_snapshot(&self) -> impl Future<Output = RequestSnapshot> + Send;

  /// Set the sesame headers in place.
  /// Existing `Sesame-*` headers are replaced, not appended, so a request never carries two signatures.
  fn set_sesame_headers(&mut self, headers: &SesameHeaders) -> Result<(), Self::Error>;

  /// Return a copy of the request with the sesame headers, leaving self untouched
  fn with_sesame_headers(&self, headers: &SesameHeaders) -> Result<BufferedRequest, Self::Error>;

  /// Sign the request with a fresh timestamp and request id, and return a signed copy
  fn sign_sesame(&self, signer: &SesameSigner) -> impl Future<Output = Result<BufferedRequest, Self::Error>> + Send;

  /// Sign the request for the given context, and return a signed copy
  fn sign_sesame_with_context(
    &self,
    signer: &SesameSigner,
    context: &SigningContext,
  ) -> impl Future<Output = Result<BufferedRequest, Self::Error>> + Send;
}

#[cfg(feature = "blocking")]
/// Synchronous counterpart of [`SesameRequest`].
///
/// # Panics
///
/// All methods will panic if called from within an async runtime (e.g. a `tokio` task).
pub trait SesameRequestSync: SesameRequest {
  fn sign_sesame_sync(&self, signer: &SesameSigner) -> Result<BufferedRequest, Self::Error>;
  fn sign_sesame_with_context_sync(&self, signer: &SesameSigner, context: &SigningContext) -> Result<BufferedRequest, Self::Error>;
}

/* --------------------------------------- */
impl SesameRequest for BufferedRequest {
  type Error = HyperSesameError;

  fn has_sesame_signature(&self) -> bool {
    let headers = self.headers();
    sesame_header_names().all(|name| headers.contains_key(name))
  }

  async fn sesame_snapshot(&self) -> RequestSnapshot {
    let body = self.body().clone().into_snapshot().await;
    RequestSnapshot::new(self.uri().to_string(), body)
  }

  fn set_sesame_headers(&mut self, headers: &SesameHeaders) -> HyperSesameResult<()> {
    headers.to_pairs().into_iter().try_for_each(|(name, value)| {
      self
        .headers_mut()
        .insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(&value)?);
      Ok(()) as HyperSesameResult<()>
    })
  }

  fn with_sesame_headers(&self, headers: &SesameHeaders) -> HyperSesameResult<BufferedRequest> {
    let mut signed = self.clone();
    signed.set_sesame_headers(headers)?;
    Ok(signed)
  }

  async fn sign_sesame(&self, signer: &SesameSigner) -> HyperSesameResult<BufferedRequest> {
    self.sign_sesame_with_context(signer, &signer.next_context()).await
  }

  async fn sign_sesame_with_context(
    &self,
    signer: &SesameSigner,
    context: &SigningContext,
  ) -> HyperSesameResult<BufferedRequest> {
    let snapshot = self.sesame_snapshot().await;
    let headers = signer.build_headers(&snapshot, context)?;
    self.with_sesame_headers(&headers)
  }
}

#[cfg(feature = "blocking")]
impl SesameRequestSync for BufferedRequest {
  fn sign_sesame_sync(&self, signer: &SesameSigner) -> HyperSesameResult<BufferedRequest> {
    futures::executor::block_on(self.sign_sesame(signer))
  }

  fn sign_sesame_with_context_sync(&self, signer: &SesameSigner, context: &SigningContext) -> HyperSesameResult<BufferedRequest> {
    futures::executor::block_on(self.sign_sesame_with_context(signer, context))
  }
}

fn sesame_header_names() -> impl Iterator<Item = &'static str> {
  use sesame::prelude::headers::*;
  [TIMESTAMP_HEADER, REQUEST_ID_HEADER, SIGNATURE_HEADER, PROTOCOL_HEADER].into_iter()
}

/* --------------------------------------- */
/// Request interceptor for the transport pipeline.
///
/// Every intercepted request gets its body buffered once, then a signed copy carrying the
/// `Sesame-*` headers is returned for the network layer. Cloning is cheap and all clones share the signer.
#[derive(Clone, Debug)]
pub struct SesameInterceptor {
  signer: Arc<SesameSigner>,
}

impl SesameInterceptor {
  pub fn new(signer: SesameSigner) -> Self {
    Self { signer: Arc::new(signer) }
  }

  /// Build the interceptor from configuration. An unusable secret key is a fatal error.
  pub fn try_new(config: &SesameConfig) -> HyperSesameResult<Self> {
    Ok(Self::new(SesameSigner::try_new(config)?))
  }

  pub fn signer(&self) -> &SesameSigner {
    &self.signer
  }

  /// Sign an in-flight request
  pub async fn intercept<B>(&self, req: Request<B>) -> HyperSesameResult<BufferedRequest>
  where
    B: Body + Send,
    <B as Body>::Data: Send,
  {
    let buffered = req.into_buffered().await;
    buffered.sign_sesame(&self.signer).await
  }

  #[cfg(feature = "blocking")]
  /// Synchronous counterpart of [`SesameInterceptor::intercept`].
  ///
  /// # Panics
  ///
  /// Panics if called from within an async runtime.
  pub fn intercept_sync<B>(&self, req: Request<B>) -> HyperSesameResult<BufferedRequest>
  where
    B: Body + Send,
    <B as Body>::Data: Send,
  {
    futures::executor::block_on(self.intercept(req))
  }
}

/* --------------------------------------- */
#[cfg(test)]
#[path = "hyper_http_tests.rs"]
mod tests;
