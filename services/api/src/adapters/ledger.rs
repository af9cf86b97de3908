//! services/api/src/adapters/ledger.rs
//!
//! File-backed implementations of the `VoteLedger` and `VotingPeriodStore`
//! ports. Each store is one JSON file under the configured data directory,
//! read in full and rewritten in full on every mutation, with this process
//! as the single owner.
//!
//! A missing or unparseable file reads as the empty ledger / no stored
//! period; it is never a fatal error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use moviepulse_core::domain::{Vote, VotingPeriod};
use moviepulse_core::ports::{PortError, PortResult, VoteLedger, VotingPeriodStore};
use tracing::warn;

const VOTES_FILE: &str = "moviepulse-votes.json";
const PERIOD_FILE: &str = "moviepulse-voting-period.json";

fn read_or_default<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != ErrorKind::NotFound {
                warn!("Failed to read {}: {}", path.display(), err);
            }
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                "Ignoring corrupt store file {}: {}",
                path.display(),
                err
            );
            None
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> PortResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| PortError::Unexpected(format!("create {}: {}", dir.display(), e)))?;
    }
    let raw = serde_json::to_vec_pretty(value)
        .map_err(|e| PortError::Unexpected(format!("serialize {}: {}", path.display(), e)))?;
    fs::write(path, raw)
        .map_err(|e| PortError::Unexpected(format!("write {}: {}", path.display(), e)))
}

//=========================================================================================
// Vote Ledger
//=========================================================================================

/// The durable vote ledger, one JSON array in one file.
pub struct JsonFileLedger {
    path: PathBuf,
    // Serialises the read-modify-write cycle across handlers.
    lock: Mutex<()>,
}

impl JsonFileLedger {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(VOTES_FILE),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Vec<Vote> {
        read_or_default(&self.path).unwrap_or_default()
    }
}

impl VoteLedger for JsonFileLedger {
    fn load(&self) -> PortResult<Vec<Vote>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read())
    }

    fn append(&self, vote: Vote) -> PortResult<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut votes = self.read();
        votes.push(vote);
        write_json(&self.path, &votes)
    }

    fn replace(&self, votes: Vec<Vote>) -> PortResult<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        write_json(&self.path, &votes)
    }
}

//=========================================================================================
// Voting Period Store
//=========================================================================================

/// The stored voting-period record, one JSON object in one file.
pub struct JsonFilePeriodStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFilePeriodStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PERIOD_FILE),
            lock: Mutex::new(()),
        }
    }
}

impl VotingPeriodStore for JsonFilePeriodStore {
    fn load(&self) -> PortResult<Option<VotingPeriod>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(read_or_default(&self.path))
    }

    fn save(&self, period: &VotingPeriod) -> PortResult<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        write_json(&self.path, period)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> PortError {
    PortError::Unexpected("ledger mutex poisoned".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use moviepulse_core::domain::{Country, ProjectType, TelevisionContentType};
    use uuid::Uuid;

    fn vote() -> Vote {
        Vote {
            id: Uuid::new_v4(),
            country: Country::Uk,
            film_industry: None,
            genre: None,
            project_type: ProjectType::Television,
            ott_platform: None,
            youtube_content_category: None,
            television_channel: Some("BBC".to_owned()),
            television_content_type: Some(TelevisionContentType::News),
            notes: None,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = JsonFileLedger::new(dir.path());
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn append_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = JsonFileLedger::new(dir.path());
        let vote = vote();
        ledger.append(vote.clone()).unwrap();

        // A fresh adapter over the same directory sees the vote.
        let reopened = JsonFileLedger::new(dir.path());
        assert_eq!(reopened.load().unwrap(), vec![vote]);
    }

    #[test]
    fn corrupt_file_reads_as_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(VOTES_FILE), "{ not json").unwrap();
        let ledger = JsonFileLedger::new(dir.path());
        assert!(ledger.load().unwrap().is_empty());

        fs::write(dir.path().join(PERIOD_FILE), "[]").unwrap();
        let periods = JsonFilePeriodStore::new(dir.path());
        assert!(periods.load().unwrap().is_none());
    }

    #[test]
    fn period_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePeriodStore::new(dir.path());
        assert!(store.load().unwrap().is_none());

        let period = VotingPeriod {
            is_active: true,
            start_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        };
        store.save(&period).unwrap();
        assert_eq!(store.load().unwrap(), Some(period));
    }
}
