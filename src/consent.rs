use log::warn;

use crate::config::CONSENT_STORAGE_KEY;
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentChoice::Accepted),
            "declined" => Some(ConsentChoice::Declined),
            _ => None,
        }
    }
}

/// The visitor's earlier answer, if any. Unreadable storage counts as no answer.
pub fn read_consent(storage: &dyn PreferenceStore) -> Option<ConsentChoice> {
    match storage.get(CONSENT_STORAGE_KEY) {
        Ok(value) => value.as_deref().and_then(ConsentChoice::parse),
        Err(e) => {
            warn!("Could not read cookie consent: {}", e);
            None
        }
    }
}

pub fn record_consent(storage: &dyn PreferenceStore, choice: ConsentChoice) {
    if let Err(e) = storage.set(CONSENT_STORAGE_KEY, choice.as_str()) {
        warn!("Cookie consent not saved: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::{MemoryStorage, UnavailableStorage};

    #[test]
    fn nothing_recorded_yet() {
        assert_eq!(read_consent(&MemoryStorage::new()), None);
    }

    #[test]
    fn records_and_reads_back() {
        let storage = MemoryStorage::new();
        record_consent(&storage, ConsentChoice::Declined);
        assert_eq!(
            storage.get(CONSENT_STORAGE_KEY).unwrap().as_deref(),
            Some("declined")
        );
        assert_eq!(read_consent(&storage), Some(ConsentChoice::Declined));
        record_consent(&storage, ConsentChoice::Accepted);
        assert_eq!(read_consent(&storage), Some(ConsentChoice::Accepted));
    }

    #[test]
    fn garbage_value_counts_as_unanswered() {
        let storage = MemoryStorage::with_item(CONSENT_STORAGE_KEY, "maybe");
        assert_eq!(read_consent(&storage), None);
    }

    #[test]
    fn unavailable_storage_is_not_an_error() {
        assert_eq!(read_consent(&UnavailableStorage), None);
        record_consent(&UnavailableStorage, ConsentChoice::Accepted);
    }
}
