//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogQuery, CatalogRecord, CatalogSource, RecordKind};
use crate::core::config::SessionProfile;
use crate::core::player::{Player, PlayerError};
use crate::core::state::App;

/// A catalog that answers every query with the same canned result and
/// remembers what it was asked.
pub struct StaticCatalog {
    result: Result<Vec<CatalogRecord>, CatalogError>,
    calls: Mutex<Vec<(SessionProfile, CatalogQuery)>>,
}

impl StaticCatalog {
    pub fn ok(records: Vec<CatalogRecord>) -> Self {
        Self {
            result: Ok(records),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: CatalogError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.calls.lock().unwrap().iter().map(|(_, q)| q.clone()).collect()
    }

    pub fn profiles(&self) -> Vec<SessionProfile> {
        self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(
        &self,
        profile: &SessionProfile,
        query: &CatalogQuery,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.calls
            .lock()
            .unwrap()
            .push((profile.clone(), query.clone()));
        self.result.clone()
    }
}

/// A player that records locators instead of spawning anything.
#[derive(Default)]
pub struct RecordingPlayer {
    launched: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingPlayer {
    /// A player whose every launch fails as if the binary were missing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Shared view of the launch log, usable after the player is boxed.
    pub fn handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.launched.clone()
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

impl Player for RecordingPlayer {
    fn play(&self, locator: &str) -> Result<(), PlayerError> {
        if self.fail {
            return Err(PlayerError::Spawn {
                program: "recording".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        self.launched.lock().unwrap().push(locator.to_string());
        Ok(())
    }
}

/// Creates a test App with the placeholder profile.
pub fn test_app() -> App {
    App::new(SessionProfile::default())
}

/// A non-playable record (a series) with the given id and title.
pub fn record(id: &str, title: &str) -> CatalogRecord {
    CatalogRecord::new(id, title, RecordKind::Series)
}

/// A playable episode titled after its id.
pub fn episode(id: &str, sequence_number: Option<u32>) -> CatalogRecord {
    let mut record = CatalogRecord::new(id, id, RecordKind::Episode);
    record.sequence_number = sequence_number;
    record.stream_locator = format!("http://test/Videos/{id}/stream?api_key=k");
    record
}
