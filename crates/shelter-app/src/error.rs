//! Error type for `shelter-app`.

use shelter_core::Rejection;
use thiserror::Error;

use crate::form::FormError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error(transparent)]
  Form(#[from] FormError),

  #[error(transparent)]
  Rejected(#[from] Rejection),

  #[error("failed to initialise tracing: {0}")]
  Telemetry(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
