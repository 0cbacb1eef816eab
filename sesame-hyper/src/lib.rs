//! # sesame-hyper
//!
//! `sesame-hyper` signs hyper's http requests with `sesame` signatures.
//! The request body is buffered once so it can be read for signing and still be sent afterward,
//! then a signed copy of the request carrying the `Sesame-*` headers is produced.
//!
//! ## Async-first design
//!
//! The primary API is async, via [`SesameRequest`] and [`SesameInterceptor::intercept`].
//!
//! ## Blocking API
//!
//! When the `blocking` feature is enabled (on by default), synchronous wrappers are provided via
//! [`SesameRequestSync`] and `SesameInterceptor::intercept_sync`. These use `futures::executor::block_on`
//! internally and are intended **exclusively for non-async contexts**.

mod error;
mod hyper_body;
mod hyper_http;
mod trace;

pub use error::{HyperSesameError, HyperSesameResult};
pub use hyper_body::{BufferedBody, RequestBodyBuffer};
#[cfg(feature = "blocking")]
pub use hyper_http::SesameRequestSync;
pub use hyper_http::{BufferedRequest, SesameInterceptor, SesameRequest};
pub use sesame::prelude;

/* ----------------------------------------------------------------- */
