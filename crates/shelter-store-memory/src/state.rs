//! The plain data guarded by [`MemoryStore`](crate::MemoryStore)'s lock.

use std::{collections::HashMap, sync::Arc};

use shelter_core::{
  incident::Incident,
  occupancy::{Occupancy, count_active},
  resident::Resident,
};
use uuid::Uuid;

/// Which feeds a mutation touched.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Changed {
  pub residents: bool,
  pub incidents: bool,
  pub capacity:  bool,
}

impl Changed {
  pub const NOTHING: Self =
    Self { residents: false, incidents: false, capacity: false };
  pub const RESIDENTS: Self =
    Self { residents: true, incidents: false, capacity: false };
  pub const INCIDENTS: Self =
    Self { residents: false, incidents: true, capacity: false };
  pub const CAPACITY: Self =
    Self { residents: false, incidents: false, capacity: true };
}

/// Roster, incident log and capacity.
///
/// Collections are `Arc`-wrapped so snapshots handed to readers are shared;
/// writers go through [`Arc::make_mut`]. Records are never removed, so the
/// positions stored in `index` stay valid.
#[derive(Debug)]
pub(crate) struct State {
  pub residents: Arc<Vec<Resident>>,
  /// `resident_id` → position in `residents`.
  index:         HashMap<Uuid, usize>,
  pub incidents: Arc<Vec<Incident>>,
  pub capacity:  u32,
}

impl State {
  pub fn new(capacity: u32) -> Self {
    Self {
      residents: Arc::new(Vec::new()),
      index: HashMap::new(),
      incidents: Arc::new(Vec::new()),
      capacity,
    }
  }

  pub fn active_count(&self) -> u32 { count_active(&self.residents) }

  pub fn occupancy(&self) -> Occupancy {
    Occupancy::compute(&self.residents, self.capacity)
  }

  pub fn get(&self, id: Uuid) -> Option<&Resident> {
    self.index.get(&id).map(|&pos| &self.residents[pos])
  }

  /// Append a resident. Ids are expected to be fresh; if one repeats, the
  /// earlier record keeps the index entry.
  pub fn push(&mut self, resident: Resident) {
    let residents = Arc::make_mut(&mut self.residents);
    self.index.entry(resident.resident_id).or_insert(residents.len());
    residents.push(resident);
  }

  /// Replace the record with the same id in place. Returns `false` if no
  /// record matched.
  pub fn replace(&mut self, resident: Resident) -> bool {
    let Some(&pos) = self.index.get(&resident.resident_id) else {
      return false;
    };
    Arc::make_mut(&mut self.residents)[pos] = resident;
    true
  }

  pub fn push_incident(&mut self, incident: Incident) {
    Arc::make_mut(&mut self.incidents).push(incident);
  }
}
