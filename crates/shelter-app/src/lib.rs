//! Composition root and presentation-state adapters for the shelter store.
//!
//! A UI layer creates one [`Shelter`] at start-up and reads everything it
//! renders from the handles it hands out. Nothing here draws anything.
//!
//! ```rust,ignore
//! let settings = Settings::load(Some(Path::new("shelter.toml")))?;
//! telemetry::init(&settings.log_filter)?;
//! let shelter = Shelter::new(settings);
//! let dashboard = shelter.dashboard();
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod session;
pub mod telemetry;

use std::sync::Arc;

use shelter_core::store::ShelterStore;
use shelter_store_memory::MemoryStore;

pub use config::Settings;
pub use dashboard::DashboardModel;
pub use error::{Error, Result};
pub use session::ResidentSession;

// ─── Shelter ─────────────────────────────────────────────────────────────────

/// Owns the process's single store and wires it into every adapter.
#[derive(Debug, Clone)]
pub struct Shelter {
  store:    Arc<MemoryStore>,
  settings: Arc<Settings>,
}

impl Shelter {
  pub fn new(settings: Settings) -> Self {
    tracing::info!(capacity = settings.capacity, "shelter store created");
    Self {
      store:    Arc::new(MemoryStore::new(settings.capacity)),
      settings: Arc::new(settings),
    }
  }

  pub fn store(&self) -> &Arc<MemoryStore> { &self.store }

  pub fn settings(&self) -> &Settings { &self.settings }

  /// A fresh selection state over the shared store.
  pub fn session(&self) -> ResidentSession<MemoryStore> {
    ResidentSession::new(Arc::clone(&self.store))
  }

  /// Start the dashboard projection. Must be called within a Tokio runtime.
  pub fn dashboard(&self) -> DashboardModel {
    DashboardModel::spawn(self.store.as_ref())
  }

  /// Apply a capacity typed into a form. Input is validated here; the store
  /// itself never sees anything malformed.
  pub fn update_capacity(&self, input: &str) -> Result<u32> {
    let capacity = form::parse_capacity(input)?;
    self.store.set_capacity(capacity);
    Ok(capacity)
  }
}
