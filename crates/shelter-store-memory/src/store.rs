//! [`MemoryStore`] — the in-memory implementation of [`ShelterStore`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shelter_core::{
  DEFAULT_CAPACITY, Rejection, Result,
  incident::Incident,
  occupancy::Occupancy,
  resident::{Resident, ResidentStatus},
  store::{Feed, ShelterStore, Snapshot},
};
use tokio::sync::watch;
use uuid::Uuid;

use crate::state::{Changed, State};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The shelter's single source of truth, held in process memory.
///
/// Construct one per process and share it by `Arc`. All mutating operations
/// run under one lock, so a capacity check and the write that depends on it
/// are atomic. Feeds are published after the lock is released, in the order
/// the mutations were committed; operations that change nothing (rejected
/// admissions, unknown ids) publish nothing.
#[derive(Debug)]
pub struct MemoryStore {
  state:        Mutex<State>,
  /// Held from the end of a mutation until its feeds are published, so two
  /// racing writers cannot publish out of commit order.
  publish:      Mutex<()>,
  residents_tx: watch::Sender<Snapshot<Resident>>,
  incidents_tx: watch::Sender<Snapshot<Incident>>,
  capacity_tx:  watch::Sender<u32>,
}

impl MemoryStore {
  /// An empty store with the given capacity.
  pub fn new(capacity: u32) -> Self {
    let state = State::new(capacity);
    let (residents_tx, _) = watch::channel(Arc::clone(&state.residents));
    let (incidents_tx, _) = watch::channel(Arc::clone(&state.incidents));
    let (capacity_tx, _) = watch::channel(capacity);

    Self {
      state: Mutex::new(state),
      publish: Mutex::new(()),
      residents_tx,
      incidents_tx,
      capacity_tx,
    }
  }

  // State is plain data and each mutation leaves it consistent before any
  // point that could panic, so a poisoned lock is safe to reuse.
  fn lock_state(&self) -> MutexGuard<'_, State> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Run `op` under the state lock, then publish whatever it changed.
  fn commit<R>(&self, op: impl FnOnce(&mut State) -> (R, Changed)) -> R {
    let mut state = self.lock_state();
    let (out, changed) = op(&mut state);

    if !(changed.residents || changed.incidents || changed.capacity) {
      return out;
    }

    let residents = changed.residents.then(|| Arc::clone(&state.residents));
    let incidents = changed.incidents.then(|| Arc::clone(&state.incidents));
    let capacity = changed.capacity.then_some(state.capacity);

    let _publish = self.publish.lock().unwrap_or_else(PoisonError::into_inner);
    drop(state);

    if let Some(snapshot) = residents {
      self.residents_tx.send_replace(snapshot);
    }
    if let Some(snapshot) = incidents {
      self.incidents_tx.send_replace(snapshot);
    }
    if let Some(capacity) = capacity {
      self.capacity_tx.send_replace(capacity);
    }
    out
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new(DEFAULT_CAPACITY) }
}

/// The refusal for an admission attempted while the shelter is full, if any.
fn capacity_gate(state: &State) -> Option<Rejection> {
  let occupied = state.active_count();
  (occupied >= state.capacity).then_some(Rejection::NoCapacity {
    occupied,
    capacity: state.capacity,
  })
}

// ─── ShelterStore impl ───────────────────────────────────────────────────────

impl ShelterStore for MemoryStore {
  // ── Residents ─────────────────────────────────────────────────────────────

  fn add_resident(&self, resident: Resident) -> Result<()> {
    self.commit(|state| {
      if resident.is_active()
        && let Some(rejection) = capacity_gate(state)
      {
        tracing::warn!(resident_id = %resident.resident_id, %rejection, "admission refused");
        return (Err(rejection), Changed::NOTHING);
      }

      tracing::debug!(
        resident_id = %resident.resident_id,
        status = %resident.status,
        "resident added"
      );
      state.push(resident);
      (Ok(()), Changed::RESIDENTS)
    })
  }

  fn update_resident(&self, resident: Resident) {
    self.commit(|state| {
      let id = resident.resident_id;
      if state.replace(resident) {
        tracing::debug!(resident_id = %id, "resident updated");
        ((), Changed::RESIDENTS)
      } else {
        tracing::debug!(resident_id = %id, "update ignored: unknown resident");
        ((), Changed::NOTHING)
      }
    })
  }

  fn get_resident(&self, id: Uuid) -> Option<Resident> {
    self.lock_state().get(id).cloned()
  }

  fn residents(&self) -> Snapshot<Resident> {
    Arc::clone(&self.lock_state().residents)
  }

  // ── Occupancy transitions ─────────────────────────────────────────────────

  fn register_entry(&self, id: Uuid) -> Result<()> {
    self.commit(|state| {
      if let Some(rejection) = capacity_gate(state) {
        tracing::warn!(resident_id = %id, %rejection, "entry refused");
        return (Err(rejection), Changed::NOTHING);
      }
      let Some(resident) = state.get(id).cloned() else {
        return (Err(Rejection::ResidentNotFound(id)), Changed::NOTHING);
      };

      tracing::debug!(resident_id = %id, from = %resident.status, "entry registered");
      state.replace(resident.with_status(ResidentStatus::Active));
      (Ok(()), Changed::RESIDENTS)
    })
  }

  fn register_exit(&self, id: Uuid, definitive: bool) {
    self.commit(|state| {
      let Some(resident) = state.get(id).cloned() else {
        return ((), Changed::NOTHING);
      };

      let status = ResidentStatus::after_exit(definitive);
      tracing::debug!(resident_id = %id, to = %status, "exit registered");
      state.replace(resident.with_status(status));
      ((), Changed::RESIDENTS)
    })
  }

  // ── Incidents ─────────────────────────────────────────────────────────────

  fn add_incident(&self, incident: Incident) {
    self.commit(|state| {
      tracing::debug!(
        incident_id = %incident.incident_id,
        resident_id = %incident.resident_id,
        "incident recorded"
      );
      state.push_incident(incident);
      ((), Changed::INCIDENTS)
    })
  }

  fn incidents_for(&self, resident_id: Uuid) -> Vec<Incident> {
    self
      .lock_state()
      .incidents
      .iter()
      .filter(|i| i.resident_id == resident_id)
      .cloned()
      .collect()
  }

  fn recent_incidents(&self, n: usize) -> Vec<Incident> {
    let state = self.lock_state();
    let start = state.incidents.len().saturating_sub(n);
    state.incidents[start..].to_vec()
  }

  fn incidents(&self) -> Snapshot<Incident> {
    Arc::clone(&self.lock_state().incidents)
  }

  // ── Capacity ──────────────────────────────────────────────────────────────

  fn capacity(&self) -> u32 { self.lock_state().capacity }

  fn set_capacity(&self, capacity: u32) {
    self.commit(|state| {
      tracing::info!(from = state.capacity, to = capacity, "capacity changed");
      state.capacity = capacity;
      ((), Changed::CAPACITY)
    })
  }

  fn occupancy(&self) -> Occupancy { self.lock_state().occupancy() }

  // ── Feeds ─────────────────────────────────────────────────────────────────

  fn subscribe_residents(&self) -> Feed<Snapshot<Resident>> {
    self.residents_tx.subscribe()
  }

  fn subscribe_incidents(&self) -> Feed<Snapshot<Incident>> {
    self.incidents_tx.subscribe()
  }

  fn subscribe_capacity(&self) -> Feed<u32> { self.capacity_tx.subscribe() }
}
