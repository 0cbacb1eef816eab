use crate::trace::*;
use bytes::{Buf, Bytes};
use http::{header::CONTENT_LENGTH, HeaderValue, Request};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use sesame::prelude::BodySnapshot;
use std::future::Future;

// hyper's http specific extension to read the body once and keep it replayable

/* --------------------------------------- */
pub trait BufferedBody: http_body::Body {
  /// Returns the bytes object of the body
  fn into_bytes(self) -> impl Future<Output = Result<Bytes, Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async {
      let mut body_buf = self.collect().await?.aggregate();
      Ok(body_buf.copy_to_bytes(body_buf.remaining()))
    }
  }

  /// Returns the body as a signing snapshot, an unreadable body becomes [`BodySnapshot::Unreadable`]
  fn into_snapshot(self) -> impl Future<Output = BodySnapshot> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async { BodySnapshot::from_read(self.into_bytes().await) }
  }
}

impl<T: ?Sized> BufferedBody for T where T: http_body::Body {}

/* --------------------------------------- */
/// A trait to replace a single-use request body with an in-memory one,
/// so that it can be read for signing and still be sent afterward.
pub trait RequestBodyBuffer {
  fn into_buffered(self) -> impl Future<Output = Request<Full<Bytes>>> + Send
  where
    Self: Sized;
}

impl<B> RequestBodyBuffer for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
{
  /// An unreadable body is replaced by an empty one, with `content-length: 0` if the length was declared
  async fn into_buffered(self) -> Request<Full<Bytes>>
  where
    Self: Sized,
  {
    let (mut parts, body) = self.into_parts();
    let body_bytes = match body.into_snapshot().await {
      BodySnapshot::Bytes(bytes) => bytes,
      BodySnapshot::Unreadable => {
        warn!("Request body to {} could not be read, forwarding an empty body", parts.uri);
        if parts.headers.contains_key(CONTENT_LENGTH) {
          parts.headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        }
        Bytes::new()
      }
    };
    Request::from_parts(parts, Full::new(body_bytes))
  }
}

/* --------------------------------------- */
