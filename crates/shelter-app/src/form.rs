//! Parsing of form input before it reaches the store.
//!
//! The store assumes well-typed values; anything a person typed is checked
//! here first.

use serde::{Deserialize, Serialize};
use shelter_core::resident::Resident;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
  #[error("enter a valid number (got {0:?})")]
  InvalidNumber(String),

  #[error("name is required")]
  MissingName,
}

/// Parse a capacity field. Non-digit characters are discarded, as the input
/// widget does while typing; nothing left, or a value too large, is an
/// error.
pub fn parse_capacity(input: &str) -> Result<u32, FormError> {
  let digits: String = input.chars().filter(char::is_ascii_digit).collect();
  digits
    .parse()
    .map_err(|_| FormError::InvalidNumber(input.to_owned()))
}

// ─── Resident form ───────────────────────────────────────────────────────────

/// The editable fields of a resident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentForm {
  pub name:              String,
  pub nickname:          String,
  pub health_conditions: String,
  pub medications:       String,
  pub contact_name:      String,
  pub contact_phone:     String,
}

impl ResidentForm {
  /// Prefill the form for editing `resident`.
  pub fn from_resident(resident: &Resident) -> Self {
    Self {
      name:              resident.name.clone(),
      nickname:          resident.nickname.clone(),
      health_conditions: resident.health_conditions.clone(),
      medications:       resident.medications.clone(),
      contact_name:      resident.contact_name.clone(),
      contact_phone:     resident.contact_phone.clone(),
    }
  }

  /// Build a new `Active` resident with a fresh id.
  pub fn into_new_resident(self) -> Result<Resident, FormError> {
    let name = self.checked_name()?;
    Ok(self.apply_fields(Resident::new(name)))
  }

  /// Overwrite the editable fields of `existing`. Id, status, birth date,
  /// document and photo are kept.
  pub fn apply_to(self, existing: Resident) -> Result<Resident, FormError> {
    let name = self.checked_name()?;
    Ok(self.apply_fields(Resident { name, ..existing }))
  }

  fn checked_name(&self) -> Result<String, FormError> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(FormError::MissingName);
    }
    Ok(name.to_owned())
  }

  fn apply_fields(self, resident: Resident) -> Resident {
    Resident {
      nickname: self.nickname,
      health_conditions: self.health_conditions,
      medications: self.medications,
      contact_name: self.contact_name,
      contact_phone: self.contact_phone,
      ..resident
    }
  }
}

#[cfg(test)]
mod tests {
  use shelter_core::resident::ResidentStatus;

  use super::*;

  #[test]
  fn capacity_keeps_digits_only() {
    assert_eq!(parse_capacity("25"), Ok(25));
    assert_eq!(parse_capacity(" 3a0 "), Ok(30));
    assert_eq!(parse_capacity("0"), Ok(0));
  }

  #[test]
  fn capacity_without_digits_is_invalid() {
    assert_eq!(
      parse_capacity("twenty"),
      Err(FormError::InvalidNumber("twenty".into()))
    );
    assert!(parse_capacity("").is_err());
    assert!(parse_capacity("-").is_err());
  }

  #[test]
  fn capacity_overflow_is_invalid() {
    assert!(parse_capacity("99999999999").is_err());
  }

  #[test]
  fn new_resident_requires_name() {
    let form = ResidentForm { name: "   ".into(), ..Default::default() };
    assert_eq!(form.into_new_resident(), Err(FormError::MissingName));
  }

  #[test]
  fn new_resident_from_form() {
    let form = ResidentForm {
      name: " Rosa ".into(),
      nickname: "Rosinha".into(),
      contact_phone: "555-0101".into(),
      ..Default::default()
    };
    let r = form.into_new_resident().unwrap();
    assert_eq!(r.name, "Rosa");
    assert_eq!(r.nickname, "Rosinha");
    assert_eq!(r.contact_phone, "555-0101");
    assert_eq!(r.status, ResidentStatus::Active);
  }

  #[test]
  fn edit_preserves_identity_and_status() {
    let mut existing = Resident::new("Paulo").with_status(ResidentStatus::External);
    existing.document = Some("RG 12.345".into());
    existing.birth_date = "1975-03-02".into();

    let mut form = ResidentForm::from_resident(&existing);
    form.medications = "losartan".into();
    let edited = form.apply_to(existing.clone()).unwrap();

    assert_eq!(edited.resident_id, existing.resident_id);
    assert_eq!(edited.status, ResidentStatus::External);
    assert_eq!(edited.document, existing.document);
    assert_eq!(edited.birth_date, existing.birth_date);
    assert_eq!(edited.medications, "losartan");
    assert_eq!(edited.name, "Paulo");
  }
}
