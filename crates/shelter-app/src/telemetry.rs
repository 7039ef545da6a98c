//! Tracing subscriber set-up.

use tracing_subscriber::{EnvFilter, filter::Directive};

use crate::{Error, Result};

/// Install a global `fmt` subscriber. `default_filter` applies when
/// `RUST_LOG` is unset or unparsable.
///
/// Fails if `default_filter` is not a valid directive or a global subscriber
/// is already installed.
pub fn init(default_filter: &str) -> Result<()> {
  let directive: Directive = default_filter
    .parse()
    .map_err(|e| Error::Telemetry(format!("invalid filter {default_filter:?}: {e}")))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy(),
    )
    .try_init()
    .map_err(|e| Error::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_malformed_directive() {
    let err = init("shelter=notalevel").unwrap_err();
    assert!(matches!(err, Error::Telemetry(_)));
  }
}
