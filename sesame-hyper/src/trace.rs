#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};
