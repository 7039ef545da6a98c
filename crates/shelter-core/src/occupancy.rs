//! Occupancy figures and the dashboard read model.
//!
//! Two derivations exist and they deliberately disagree on clamping:
//! [`Occupancy`] reports `capacity - occupied` as-is (negative when capacity
//! was lowered below the current head count), while [`DashboardStats`]
//! floors available spots at zero for display.

use serde::{Deserialize, Serialize};

use crate::{incident::Incident, resident::Resident};

/// How many of the most recent incidents the dashboard counts.
pub const RECENT_INCIDENT_WINDOW: usize = 3;

/// Number of `Active` residents in `residents`.
pub fn count_active(residents: &[Resident]) -> u32 {
  let active = residents.iter().filter(|r| r.is_active()).count();
  u32::try_from(active).unwrap_or(u32::MAX)
}

// ─── Occupancy ───────────────────────────────────────────────────────────────

/// Beds in use and beds remaining, as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
  pub occupied:  u32,
  /// `capacity - occupied`; unclamped.
  pub available: i64,
}

impl Occupancy {
  pub fn compute(residents: &[Resident], capacity: u32) -> Self {
    let occupied = count_active(residents);
    Self {
      occupied,
      available: i64::from(capacity) - i64::from(occupied),
    }
  }

  /// Whether one more resident may become `Active`.
  pub fn has_room(&self) -> bool { self.available > 0 }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

/// The summary shown on the dashboard; never stored, always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
  pub active_residents: u32,
  /// `max(0, capacity - active_residents)`.
  pub available_spots:  u32,
  /// Size of the recent-incident window, at most
  /// [`RECENT_INCIDENT_WINDOW`].
  pub recent_incidents: usize,
}

impl DashboardStats {
  pub fn derive(
    residents: &[Resident],
    incidents: &[Incident],
    capacity: u32,
  ) -> Self {
    let active_residents = count_active(residents);
    Self {
      active_residents,
      available_spots: capacity.saturating_sub(active_residents),
      recent_incidents: incidents.len().min(RECENT_INCIDENT_WINDOW),
    }
  }
}

impl Default for DashboardStats {
  fn default() -> Self {
    Self {
      active_residents: 0,
      available_spots:  crate::DEFAULT_CAPACITY,
      recent_incidents: 0,
    }
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;
  use crate::{incident::NewIncident, resident::ResidentStatus};

  fn roster(active: usize, departed: usize) -> Vec<Resident> {
    let mut out: Vec<Resident> =
      (0..active).map(|i| Resident::new(format!("a{i}"))).collect();
    out.extend((0..departed).map(|i| {
      Resident::new(format!("d{i}")).with_status(ResidentStatus::Departed)
    }));
    out
  }

  fn incidents(n: usize) -> Vec<Incident> {
    (0..n)
      .map(|_| NewIncident::default().into_incident(Uuid::new_v4(), "x"))
      .collect()
  }

  #[test]
  fn occupancy_counts_only_active() {
    let occ = Occupancy::compute(&roster(3, 2), 10);
    assert_eq!(occ.occupied, 3);
    assert_eq!(occ.available, 7);
    assert!(occ.has_room());
  }

  #[test]
  fn occupancy_available_goes_negative() {
    let occ = Occupancy::compute(&roster(4, 0), 2);
    assert_eq!(occ.available, -2);
    assert!(!occ.has_room());
  }

  #[test]
  fn dashboard_clamps_available_spots() {
    let stats = DashboardStats::derive(&roster(4, 1), &[], 2);
    assert_eq!(stats.active_residents, 4);
    assert_eq!(stats.available_spots, 0);
  }

  #[test]
  fn dashboard_recent_incident_window() {
    assert_eq!(DashboardStats::derive(&[], &incidents(2), 5).recent_incidents, 2);
    assert_eq!(DashboardStats::derive(&[], &incidents(7), 5).recent_incidents, 3);
  }

  #[test]
  fn default_dashboard_matches_default_capacity() {
    let stats = DashboardStats::default();
    assert_eq!(stats, DashboardStats::derive(&[], &[], crate::DEFAULT_CAPACITY));
  }
}
