use roster::{CertificateIdStore, ParticipantStore, is_valid_email, normalize_email};

/// Outcome of the two-stage lookup. `NotFound` is an ordinary answer for the
/// client; `MissingId` means our data is inconsistent (participant loaded but
/// never covered by the id batch) and is reported as a server error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid {
        name: String,
        category: String,
        id: String,
    },
    BadFormat,
    NotFound,
    MissingId,
}

/// Normalize, shape-check, then look up both stores. Name, category and id
/// come back verbatim from the stores; unknown categories pass through.
pub fn validate(
    participants: &ParticipantStore,
    certificate_ids: &CertificateIdStore,
    raw_email: &str,
) -> ValidationOutcome {
    let email = normalize_email(raw_email);

    if !is_valid_email(&email) {
        return ValidationOutcome::BadFormat;
    }

    let Some(participant) = participants.get(&email) else {
        return ValidationOutcome::NotFound;
    };

    match certificate_ids.get(&email) {
        Some(id) => ValidationOutcome::Valid {
            name: participant.name.clone(),
            category: participant.category.clone(),
            id: id.to_string(),
        },
        None => ValidationOutcome::MissingId,
    }
}
