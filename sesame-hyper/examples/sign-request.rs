use http::Request;
use http_body_util::Full;
use sesame_hyper::{prelude::*, *};

/// Secret shared out-of-band with the verifying server
const DEMO_SECRET_KEY: &str = "s3cr3t";

fn build_request() -> Request<Full<bytes::Bytes>> {
  Request::builder()
    .method("POST")
    .uri("https://api.example.com/v1/items?page=2")
    .header("content-type", "application/json")
    .body(Full::new(bytes::Bytes::from_static(b"{\"name\": \"sesame\"}")))
    .unwrap()
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  // the key is normally read with `SesameConfig::from_env(SECRET_KEY_ENV)`
  let config = SesameConfig::from_env(SECRET_KEY_ENV).unwrap_or_else(|_| SesameConfig::new(DEMO_SECRET_KEY));
  let interceptor = SesameInterceptor::try_new(&config).unwrap();

  // transport side: sign the in-flight request, then hand the result to the network layer
  let signed = interceptor.intercept(build_request()).await.unwrap();
  for (name, value) in signed.headers() {
    println!("{}: {}", name, value.to_str().unwrap());
  }

  // the original request can be signed again on retry, with fresh timestamp and request id
  let original = build_request();
  let retried = original.sign_sesame(interceptor.signer()).await.unwrap();
  assert!(retried.has_sesame_signature());
  assert!(!original.has_sesame_signature());
}
