//! Error types for `shelter-core`.

use thiserror::Error;
use uuid::Uuid;

/// Why an admission (`add_resident` or `register_entry`) was refused.
///
/// Both variants are expected outcomes; callers turn them into user-facing
/// messaging and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("no space available: {occupied} of {capacity} beds occupied")]
  NoCapacity { occupied: u32, capacity: u32 },

  #[error("resident {0} not found")]
  ResidentNotFound(Uuid),
}

pub type Result<T, E = Rejection> = std::result::Result<T, E>;
