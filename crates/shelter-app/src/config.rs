//! Runtime settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `SHELTER_*` environment variables (e.g. `SHELTER_CAPACITY=35`).

use std::path::Path;

use serde::Deserialize;
use shelter_core::DEFAULT_CAPACITY;

use crate::Result;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Initial capacity of the store; can be changed at runtime.
  pub capacity:   u32,
  /// Default `tracing` directive when `RUST_LOG` is unset.
  pub log_filter: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      capacity:   DEFAULT_CAPACITY,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl Settings {
  /// Load settings from defaults, `path` (if given and present) and the
  /// environment.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = defaults()?;
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(false));
    }
    let settings = builder
      .add_source(config::Environment::with_prefix("SHELTER"))
      .build()?
      .try_deserialize()?;
    Ok(settings)
  }

  /// Load settings from an in-memory TOML document layered over the
  /// defaults. The environment is not consulted.
  pub fn from_toml_str(toml: &str) -> Result<Self> {
    let settings = defaults()?
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()?
      .try_deserialize()?;
    Ok(settings)
  }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
  Ok(
    config::Config::builder()
      .set_default("capacity", i64::from(DEFAULT_CAPACITY))?
      .set_default("log_filter", DEFAULT_LOG_FILTER)?,
  )
}
