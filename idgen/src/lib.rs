//! # Idgen
//!
//! Offline batch that mints certificate ids.
//!
//! Reads `participants.csv` in file order, skips every email that already has
//! a row in `cert-id.csv`, and appends `email,id` rows for the rest. The file
//! is append-only: existing rows are never rewritten, so ids stay stable
//! across runs.

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use uuid::Uuid;

use roster::{
    CertificateIdStore, normalize_email,
    participants::{ParticipantRow, read_participant_rows},
};

pub fn generate_ids(participants_path: &str, cert_id_path: &str) -> Result<usize> {
    let rows = read_participant_rows(participants_path)
        .with_context(|| format!("Failed to read {participants_path}"))?;
    println!("Loaded Participants: {}", rows.len());

    let existing = CertificateIdStore::load(cert_id_path)
        .with_context(|| format!("Failed to read {cert_id_path}"))?;
    println!("Existing Certificate IDs: {}\n", existing.len());

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let planned = plan_new_ids(&rows, &existing, || {
        pb.inc(1);
        new_token()
    });
    pb.finish_with_message("Done");

    if planned.is_empty() {
        println!("All participants already have certificate IDs.");
        return Ok(0);
    }

    append_ids(cert_id_path, &planned)
        .with_context(|| format!("Failed to append to {cert_id_path}"))?;

    println!("New Certificate IDs: {}", planned.len());
    println!("Saved to {cert_id_path}");

    Ok(planned.len())
}

/// Decide which participants need a fresh id, preserving file order. The
/// token source is injected so callers can pin it down in tests.
pub fn plan_new_ids(
    rows: &[ParticipantRow],
    existing: &CertificateIdStore,
    mut next_token: impl FnMut() -> String,
) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    let mut planned = Vec::new();

    for row in rows {
        let email = normalize_email(&row.email);

        if email.is_empty() || existing.contains(&email) || !seen.insert(email.clone()) {
            continue;
        }

        planned.push((email, next_token()));
    }

    planned
}

/// Globally-unique opaque token, 32 hex chars.
pub fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

fn append_ids(cert_id_path: &str, planned: &[(String, String)]) -> Result<()> {
    let path = Path::new(cert_id_path);

    let mut file = if path.exists() {
        OpenOptions::new().append(true).open(path)?
    } else {
        let mut file = File::create(path)?;
        file.write_all(b"email,id\n")?;
        file
    };

    for (email, id) in planned {
        writeln!(file, "{email},{id}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use roster::{CertificateIdStore, participants::ParticipantRow};

    use super::{new_token, plan_new_ids};

    fn row(email: &str) -> ParticipantRow {
        ParticipantRow {
            email: email.to_string(),
            name: Some("Name".to_string()),
            category: Some("PARTICIPANT".to_string()),
        }
    }

    fn counter_tokens() -> impl FnMut() -> String {
        let mut n = 0;
        move || {
            n += 1;
            format!("tok{n}")
        }
    }

    #[test]
    fn test_only_missing_get_ids() {
        let rows = vec![row("covered@example.com"), row("new@example.com")];
        let existing =
            CertificateIdStore::from_reader("email,id\ncovered@example.com,abc\n".as_bytes())
                .unwrap();

        let planned = plan_new_ids(&rows, &existing, counter_tokens());

        assert_eq!(
            planned,
            vec![("new@example.com".to_string(), "tok1".to_string())]
        );
    }

    #[test]
    fn test_file_order_preserved() {
        let rows = vec![
            row("c@example.com"),
            row("a@example.com"),
            row("b@example.com"),
        ];
        let existing = CertificateIdStore::default();

        let planned = plan_new_ids(&rows, &existing, counter_tokens());

        let emails: Vec<&str> = planned.iter().map(|(email, _)| email.as_str()).collect();
        assert_eq!(emails, ["c@example.com", "a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_existing_match_is_case_insensitive() {
        let rows = vec![row("Covered@Example.com")];
        let existing =
            CertificateIdStore::from_reader("email,id\ncovered@example.com,abc\n".as_bytes())
                .unwrap();

        assert!(plan_new_ids(&rows, &existing, counter_tokens()).is_empty());
    }

    #[test]
    fn test_duplicate_rows_get_one_id() {
        let rows = vec![row("dup@example.com"), row("Dup@Example.com")];
        let existing = CertificateIdStore::default();

        let planned = plan_new_ids(&rows, &existing, counter_tokens());

        assert_eq!(planned.len(), 1);
    }

    #[test]
    fn test_token_shape() {
        let token = new_token();

        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, new_token());
    }
}
