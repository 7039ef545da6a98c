//! Residents and their occupancy status.
//!
//! A resident is a plain value record. The store never edits one in place;
//! every change is a whole-record replacement keyed by `resident_id`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a resident currently stands with respect to the shelter.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResidentStatus {
  /// Residing in the shelter; counts against capacity.
  #[default]
  Active,
  /// Permanently exited. The record is kept for history.
  Departed,
  /// Under supervision but not occupying a bed.
  External,
}

impl ResidentStatus {
  pub fn is_active(&self) -> bool { matches!(self, Self::Active) }

  /// The status a resident moves to when leaving the shelter.
  pub fn after_exit(definitive: bool) -> Self {
    if definitive { Self::Departed } else { Self::External }
  }
}

// ─── Resident ────────────────────────────────────────────────────────────────

/// A tracked individual under the organization's care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
  pub resident_id:       Uuid,
  pub name:              String,
  pub nickname:          String,
  /// Free-form date string; never parsed.
  pub birth_date:        String,
  /// `None` means no identity document is on file.
  pub document:          Option<String>,
  /// Emergency contact.
  pub contact_name:      String,
  pub contact_phone:     String,
  pub health_conditions: String,
  pub medications:       String,
  pub status:            ResidentStatus,
  pub photo_url:         Option<String>,
}

impl Resident {
  /// A new `Active` resident with a fresh id and empty optional details.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      resident_id:       Uuid::new_v4(),
      name:              name.into(),
      nickname:          String::new(),
      birth_date:        String::new(),
      document:          None,
      contact_name:      String::new(),
      contact_phone:     String::new(),
      health_conditions: String::new(),
      medications:       String::new(),
      status:            ResidentStatus::Active,
      photo_url:         None,
    }
  }

  /// Copy of `self` with `status` replaced.
  pub fn with_status(self, status: ResidentStatus) -> Self {
    Self { status, ..self }
  }

  pub fn is_active(&self) -> bool { self.status.is_active() }
}
