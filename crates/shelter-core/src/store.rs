//! The `ShelterStore` trait and its observable feeds.
//!
//! The trait is implemented by `shelter-store-memory`. Presentation adapters
//! (`shelter-app`) depend on this abstraction and receive the store by
//! handle; there is no global instance.

use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::{
  Result,
  incident::Incident,
  occupancy::Occupancy,
  resident::Resident,
};

/// An immutable, cheaply cloned snapshot of an ordered collection.
pub type Snapshot<T> = Arc<Vec<T>>;

/// A replay-latest subscription: the receiver holds the current value as
/// soon as it is created and observes every later committed value. Dropping
/// it unsubscribes.
pub type Feed<T> = watch::Receiver<T>;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the shelter's state: the resident roster, the incident
/// log and the capacity limit.
///
/// Admissions (`add_resident`, `register_entry`) are the only capacity-gated
/// operations. Everything keyed by an unknown id is a silent no-op or a
/// `None` result, never an error.
pub trait ShelterStore: Send + Sync {
  // ── Residents ─────────────────────────────────────────────────────────

  /// Append `resident` to the roster.
  ///
  /// Rejected with [`Rejection::NoCapacity`](crate::Rejection::NoCapacity)
  /// if the resident is `Active` and the shelter is already full.
  fn add_resident(&self, resident: Resident) -> Result<()>;

  /// Replace the record with the same id, keeping its position. No capacity
  /// check. Unknown ids are ignored.
  fn update_resident(&self, resident: Resident);

  /// Look up a resident. `None` is an ordinary answer.
  fn get_resident(&self, id: Uuid) -> Option<Resident>;

  /// Snapshot of the roster in insertion order.
  fn residents(&self) -> Snapshot<Resident>;

  // ── Occupancy transitions ─────────────────────────────────────────────

  /// Move a resident to `Active`, whatever their previous status, if a bed
  /// is free.
  fn register_entry(&self, id: Uuid) -> Result<()>;

  /// Move a resident out: `Departed` when `definitive`, else `External`.
  /// Never capacity-gated. Unknown ids are ignored.
  fn register_exit(&self, id: Uuid, definitive: bool);

  // ── Incidents ─────────────────────────────────────────────────────────

  /// Append to the incident log. `resident_id` is not checked.
  fn add_incident(&self, incident: Incident);

  /// Incidents reported for `resident_id`, in insertion order.
  fn incidents_for(&self, resident_id: Uuid) -> Vec<Incident>;

  /// The last `n` incidents, oldest first.
  fn recent_incidents(&self, n: usize) -> Vec<Incident>;

  /// Snapshot of the incident log in insertion order.
  fn incidents(&self) -> Snapshot<Incident>;

  // ── Capacity ──────────────────────────────────────────────────────────

  fn capacity(&self) -> u32;

  /// Replace the capacity. Residents already `Active` are never evicted,
  /// even if this leaves the shelter over capacity.
  fn set_capacity(&self, capacity: u32);

  fn occupancy(&self) -> Occupancy;

  // ── Feeds ─────────────────────────────────────────────────────────────

  fn subscribe_residents(&self) -> Feed<Snapshot<Resident>>;

  fn subscribe_incidents(&self) -> Feed<Snapshot<Incident>>;

  fn subscribe_capacity(&self) -> Feed<u32>;
}
