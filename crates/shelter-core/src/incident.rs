//! Incident reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped record of a notable event involving a resident.
///
/// `resident_id` is not checked against the roster; a dangling reference is
/// tolerated. `resident_name` is copied at report time so the incident still
/// reads correctly if the resident record changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub incident_id:   Uuid,
  pub resident_id:   Uuid,
  pub resident_name: String,
  /// Category, e.g. "conflict" or "health".
  pub kind:          String,
  pub description:   String,
  pub action_taken:  String,
  pub recorded_at:   DateTime<Utc>,
}

/// Caller-supplied fields of an incident; id and timestamp are assigned by
/// [`NewIncident::into_incident`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncident {
  pub kind:         String,
  pub description:  String,
  pub action_taken: String,
}

impl NewIncident {
  pub fn into_incident(
    self,
    resident_id: Uuid,
    resident_name: impl Into<String>,
  ) -> Incident {
    Incident {
      incident_id: Uuid::new_v4(),
      resident_id,
      resident_name: resident_name.into(),
      kind: self.kind,
      description: self.description,
      action_taken: self.action_taken,
      recorded_at: Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_incident_assigns_id_and_timestamp() {
    let before = Utc::now();
    let resident_id = Uuid::new_v4();
    let incident = NewIncident {
      kind:         "health".into(),
      description:  "fever during the night".into(),
      action_taken: "called the clinic".into(),
    }
    .into_incident(resident_id, "Ana");

    assert_eq!(incident.resident_id, resident_id);
    assert_eq!(incident.resident_name, "Ana");
    assert_eq!(incident.kind, "health");
    assert!(incident.recorded_at >= before);
  }
}
