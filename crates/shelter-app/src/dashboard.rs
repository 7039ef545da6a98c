//! The dashboard projection.
//!
//! Watches the roster, incident log and capacity feeds and republishes a
//! [`DashboardStats`] whenever any of them changes.

use shelter_core::{occupancy::DashboardStats, store::ShelterStore};
use tokio::{sync::watch, task::JoinHandle};

/// Derive the dashboard once from the store's current state.
pub fn snapshot<S: ShelterStore + ?Sized>(store: &S) -> DashboardStats {
  DashboardStats::derive(&store.residents(), &store.incidents(), store.capacity())
}

/// A live [`DashboardStats`] kept current by a background task.
///
/// The task stops when the model is dropped or when the store goes away.
#[derive(Debug)]
pub struct DashboardModel {
  stats: watch::Receiver<DashboardStats>,
  task:  JoinHandle<()>,
}

impl DashboardModel {
  /// Subscribe to `store` and spawn the projection task on the current
  /// Tokio runtime.
  pub fn spawn<S: ShelterStore + ?Sized>(store: &S) -> Self {
    let mut residents = store.subscribe_residents();
    let mut incidents = store.subscribe_incidents();
    let mut capacity = store.subscribe_capacity();

    let initial = DashboardStats::derive(
      &residents.borrow_and_update(),
      &incidents.borrow_and_update(),
      *capacity.borrow_and_update(),
    );
    let (tx, stats) = watch::channel(initial);

    let task = tokio::spawn(async move {
      loop {
        let closed = tokio::select! {
          r = residents.changed() => r.is_err(),
          r = incidents.changed() => r.is_err(),
          r = capacity.changed() => r.is_err(),
        };
        if closed {
          tracing::debug!("store dropped; dashboard projection stopping");
          break;
        }

        let next = DashboardStats::derive(
          &residents.borrow_and_update(),
          &incidents.borrow_and_update(),
          *capacity.borrow_and_update(),
        );
        tracing::trace!(?next, "dashboard recomputed");
        if tx.send(next).is_err() {
          break;
        }
      }
    });

    Self { stats, task }
  }

  pub fn current(&self) -> DashboardStats { *self.stats.borrow() }

  /// A replay-latest handle on the dashboard values.
  pub fn subscribe(&self) -> watch::Receiver<DashboardStats> {
    self.stats.clone()
  }
}

impl Drop for DashboardModel {
  fn drop(&mut self) { self.task.abort(); }
}
