use std::{collections::HashMap, fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{RosterError, email::normalize_email};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub category: String,
}

/// One `participants.csv` row in file order. Missing trailing cells load as
/// empty strings, matching how the sheet export behaves.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRow {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Read-only mapping of normalized email to name/category.
///
/// Built once at startup and handed out behind an `Arc`; later rows with a
/// duplicate email overwrite earlier ones.
#[derive(Debug, Default)]
pub struct ParticipantStore {
    map: HashMap<String, Participant>,
}

impl ParticipantStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let rows = read_rows(reader)?;

        let mut map = HashMap::with_capacity(rows.len());
        for row in rows {
            map.insert(
                normalize_email(&row.email),
                Participant {
                    name: row.name.as_deref().unwrap_or("").trim().to_string(),
                    category: row.category.as_deref().unwrap_or("").trim().to_string(),
                },
            );
        }

        Ok(Self { map })
    }

    pub fn get(&self, email: &str) -> Option<&Participant> {
        self.map.get(&normalize_email(email))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Rows in file order, for the batch path that cares about ordering.
pub fn read_participant_rows(path: impl AsRef<Path>) -> Result<Vec<ParticipantRow>, RosterError> {
    read_rows(File::open(path)?)
}

fn read_rows<R: Read>(reader: R) -> Result<Vec<ParticipantRow>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<ParticipantRow>() {
        let row = row?;
        if row.email.is_empty() {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}
