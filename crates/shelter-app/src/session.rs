//! Selected-resident state for detail and edit views.

use std::sync::Arc;

use shelter_core::{
  incident::{Incident, NewIncident},
  resident::Resident,
  store::ShelterStore,
};
use tokio::sync::watch;
use uuid::Uuid;

use crate::Result;

/// Tracks which resident a view is showing and forwards its actions to the
/// store.
///
/// `None` as the selection means "nothing loaded": either nothing was
/// requested yet or the requested id is unknown. Views render that as a
/// loading or not-found state.
#[derive(Debug)]
pub struct ResidentSession<S: ?Sized> {
  store:    Arc<S>,
  selected: watch::Sender<Option<Resident>>,
}

impl<S: ShelterStore + ?Sized> ResidentSession<S> {
  pub fn new(store: Arc<S>) -> Self {
    let (selected, _) = watch::channel(None);
    Self { store, selected }
  }

  // ── Selection ─────────────────────────────────────────────────────────

  /// Select the resident with `id`, returning it if it exists.
  pub fn load(&self, id: Uuid) -> Option<Resident> {
    let resident = self.store.get_resident(id);
    self.selected.send_replace(resident.clone());
    resident
  }

  /// Drop the selection, e.g. before opening an empty creation form.
  pub fn clear(&self) { self.selected.send_replace(None); }

  pub fn selected(&self) -> Option<Resident> { self.selected.borrow().clone() }

  pub fn subscribe(&self) -> watch::Receiver<Option<Resident>> {
    self.selected.subscribe()
  }

  /// Re-read the selection if it is `id`, so views see the committed change.
  fn refresh(&self, id: Uuid) {
    let is_selected = self
      .selected
      .borrow()
      .as_ref()
      .is_some_and(|r| r.resident_id == id);
    if is_selected {
      self.load(id);
    }
  }

  // ── Actions ───────────────────────────────────────────────────────────

  /// Persist a resident from the form: an update when `is_edit`, otherwise
  /// an admission, which may be refused for lack of space.
  pub fn save(&self, resident: Resident, is_edit: bool) -> Result<()> {
    let id = resident.resident_id;
    if is_edit {
      self.store.update_resident(resident);
    } else {
      self.store.add_resident(resident)?;
    }
    self.refresh(id);
    Ok(())
  }

  pub fn register_entry(&self, id: Uuid) -> Result<()> {
    self.store.register_entry(id)?;
    self.refresh(id);
    Ok(())
  }

  pub fn register_exit(&self, id: Uuid, definitive: bool) {
    self.store.register_exit(id, definitive);
    self.refresh(id);
  }

  /// File an incident against `resident_id`, copying the resident's current
  /// name into the record. An unknown resident is recorded under its id.
  pub fn report_incident(&self, resident_id: Uuid, draft: NewIncident) -> Incident {
    let resident_name = self
      .store
      .get_resident(resident_id)
      .map(|r| r.name)
      .unwrap_or_else(|| resident_id.to_string());

    let incident = draft.into_incident(resident_id, resident_name);
    self.store.add_incident(incident.clone());
    incident
  }

  /// Incidents for the selected resident, oldest first.
  pub fn incidents(&self) -> Vec<Incident> {
    let id = self.selected.borrow().as_ref().map(|r| r.resident_id);
    id.map(|id| self.store.incidents_for(id)).unwrap_or_default()
  }
}
