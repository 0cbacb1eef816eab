use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Per-request values mixed into the canonical message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningContext {
  /// milliseconds since the unix epoch
  pub timestamp: u64,
  /// random request identifier
  pub request_id: Uuid,
}

impl SigningContext {
  pub fn new(timestamp: u64, request_id: Uuid) -> Self {
    Self { timestamp, request_id }
  }

  /// Draws a fresh context from the given sources
  pub fn generate(clock: &dyn Clock, ids: &dyn RequestIdSource) -> Self {
    Self {
      timestamp: clock.now_millis(),
      request_id: ids.next_request_id(),
    }
  }
}

/* --------------------------------------- */
/// Source of signing timestamps
pub trait Clock: Send + Sync {
  /// Milliseconds since the unix epoch
  fn now_millis(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_millis(&self) -> u64 {
    SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(millis_since_epoch)
      .unwrap_or_default()
  }
}

/// Saturates at `u64::MAX` instead of truncating
fn millis_since_epoch(elapsed: Duration) -> u64 {
  u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Clock always returning the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
  fn now_millis(&self) -> u64 {
    self.0
  }
}

/* --------------------------------------- */
/// Source of request identifiers
pub trait RequestIdSource: Send + Sync {
  fn next_request_id(&self) -> Uuid;
}

/// UUID v4 identifiers drawn from the thread-local CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRequestId;

impl RequestIdSource for RandomRequestId {
  fn next_request_id(&self) -> Uuid {
    uuid::Builder::from_random_bytes(rand::random()).into_uuid()
  }
}

/// Identifier source always returning the same uuid
#[derive(Debug, Clone, Copy)]
pub struct FixedRequestId(pub Uuid);

impl RequestIdSource for FixedRequestId {
  fn next_request_id(&self) -> Uuid {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn random_request_ids_are_v4() {
    let ids = RandomRequestId;
    let a = ids.next_request_id();
    let b = ids.next_request_id();
    assert_ne!(a, b);
    assert_eq!(a.get_version_num(), 4);
    assert_eq!(a.get_variant(), uuid::Variant::RFC4122);
    let text = a.to_string();
    assert_eq!(text.len(), 36);
    assert_eq!(text, text.to_lowercase());
  }

  #[test]
  fn system_clock_is_after_2023() {
    assert!(SystemClock.now_millis() > 1_700_000_000_000);
  }

  #[test]
  fn millis_saturate() {
    assert_eq!(millis_since_epoch(Duration::from_millis(1700000000000)), 1700000000000);
    assert_eq!(millis_since_epoch(Duration::MAX), u64::MAX);
  }

  #[test]
  fn generate_from_fixed_sources() {
    let id = Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
    let ctx = SigningContext::generate(&FixedClock(1690000000000), &FixedRequestId(id));
    assert_eq!(ctx, SigningContext::new(1690000000000, id));
  }
}
