use std::sync::Arc;

use roster::{CertificateIdStore, ParticipantStore, RosterError};

use super::config::Config;

/// Immutable per-process state: both stores are loaded once here and never
/// written again, so handlers share it through a plain `Arc`.
pub struct AppState {
    pub config: Config,
    pub participants: ParticipantStore,
    pub certificate_ids: CertificateIdStore,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>, RosterError> {
        let config = Config::load();

        let participants = ParticipantStore::load(&config.participants_path)?;
        let certificate_ids = CertificateIdStore::load(&config.cert_id_path)?;

        Ok(Arc::new(Self {
            config,
            participants,
            certificate_ids,
        }))
    }
}
