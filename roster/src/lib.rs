//! # Roster
//!
//! Shared data layer for the certificate service.
//!
//! Two flat CSV files back the whole system:
//! - `participants.csv` — `email,name,category` rows, bulk-loaded once.
//! - `cert-id.csv` — `email,id` rows, appended to by the offline `idgen` batch.
//!
//! Both load into read-only in-memory maps keyed by the lowercased email.

use thiserror::Error;

pub mod certificates;
pub mod email;
pub mod participants;

pub use certificates::CertificateIdStore;
pub use email::{is_valid_email, normalize_email};
pub use participants::{Participant, ParticipantStore};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster row: {0}")]
    Csv(#[from] csv::Error),
}
