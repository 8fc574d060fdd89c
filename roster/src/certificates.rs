use std::{collections::HashMap, fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{RosterError, email::normalize_email};

#[derive(Debug, Deserialize)]
struct CertificateRow {
    email: String,
    #[serde(default)]
    id: Option<String>,
}

/// Read-only mapping of normalized email to an issued certificate id.
///
/// The id is an opaque token minted offline by `idgen`; a participant missing
/// here is a data gap on our side, not an unknown participant.
#[derive(Debug, Default)]
pub struct CertificateIdStore {
    map: HashMap<String, String>,
}

impl CertificateIdStore {
    /// A missing file is the pre-first-batch state and loads as an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut map = HashMap::new();
        for row in csv_reader.deserialize::<CertificateRow>() {
            let row: CertificateRow = row?;
            let id = row.id.unwrap_or_default();
            if row.email.is_empty() || id.is_empty() {
                continue;
            }
            map.insert(normalize_email(&row.email), id);
        }

        Ok(Self { map })
    }

    pub fn get(&self, email: &str) -> Option<&str> {
        self.map.get(&normalize_email(email)).map(String::as_str)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.map.contains_key(&normalize_email(email))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CertificateIdStore;

    #[test]
    fn test_basic_load() {
        let store =
            CertificateIdStore::from_reader("email,id\nalice@example.com,abc123\n".as_bytes())
                .unwrap();

        assert_eq!(store.get("alice@example.com"), Some("abc123"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let store =
            CertificateIdStore::from_reader("email,id\nAlice@Example.com,abc123\n".as_bytes())
                .unwrap();

        assert_eq!(store.get(" ALICE@example.COM "), Some("abc123"));
        assert!(store.get("bob@example.com").is_none());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = CertificateIdStore::load("does/not/exist/cert-id.csv").unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_rows_without_id_skipped() {
        let store =
            CertificateIdStore::from_reader("email,id\nnoid@example.com\nok@example.com,tok\n".as_bytes())
                .unwrap();

        assert!(store.get("noid@example.com").is_none());
        assert_eq!(store.get("ok@example.com"), Some("tok"));
    }
}
