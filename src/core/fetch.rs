//! # Background Fetches
//!
//! Each catalog query runs as its own tokio task. When it finishes, exactly
//! one `Action::FetchCompleted` tagged with the destination view is sent back
//! to the event loop. Tasks never touch `App` and are never cancelled; a
//! result for a view the user has left is still delivered and stored.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::catalog::{CatalogQuery, CatalogSource};
use crate::core::action::Action;
use crate::core::config::SessionProfile;
use crate::core::view::View;

/// One fetch: what to ask, where the answer goes, and the credentials
/// captured when it was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub target: View,
    pub query: CatalogQuery,
    pub profile: SessionProfile,
}

/// Spawns `request` on the tokio runtime. The handle is only useful to tests;
/// the event loop drops it.
pub fn spawn_fetch(
    source: Arc<dyn CatalogSource>,
    request: FetchRequest,
    tx: Sender<Action>,
) -> JoinHandle<()> {
    info!(
        "Spawning {} fetch: {} -> {:?}",
        source.name(),
        request.query,
        request.target
    );

    tokio::spawn(async move {
        let FetchRequest {
            target,
            query,
            profile,
        } = request;

        let result = source.fetch(&profile, &query).await;
        match &result {
            Ok(records) => debug!("Fetch {} done: {} records", query, records.len()),
            Err(e) => debug!("Fetch {} failed: {}", query, e),
        }

        if tx.send(Action::FetchCompleted { target, result }).is_err() {
            warn!("Failed to deliver result for {:?}: receiver dropped", target);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::test_support::{StaticCatalog, record};
    use std::sync::mpsc;

    fn request(target: View, query: CatalogQuery) -> FetchRequest {
        FetchRequest {
            target,
            query,
            profile: SessionProfile::default(),
        }
    }

    #[tokio::test]
    async fn test_success_is_tagged_with_target() {
        let catalog = Arc::new(StaticCatalog::ok(vec![record("1", "A"), record("2", "B")]));
        let (tx, rx) = mpsc::channel();

        spawn_fetch(catalog.clone(), request(View::Movies, CatalogQuery::Movies), tx)
            .await
            .unwrap();

        match rx.try_recv().unwrap() {
            Action::FetchCompleted { target, result } => {
                assert_eq!(target, View::Movies);
                assert_eq!(result.unwrap().len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(catalog.queries(), vec![CatalogQuery::Movies]);
    }

    #[tokio::test]
    async fn test_failure_is_tagged_with_target() {
        let catalog = Arc::new(StaticCatalog::err(CatalogError::Network("refused".to_string())));
        let (tx, rx) = mpsc::channel();
        let query = CatalogQuery::Seasons {
            series_id: "S1".to_string(),
        };

        spawn_fetch(catalog, request(View::Seasons, query), tx)
            .await
            .unwrap();

        match rx.try_recv().unwrap() {
            Action::FetchCompleted { target, result } => {
                assert_eq!(target, View::Seasons);
                assert_eq!(result, Err(CatalogError::Network("refused".to_string())));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_uses_profile_from_request() {
        let catalog = Arc::new(StaticCatalog::ok(vec![]));
        let (tx, _rx) = mpsc::channel();
        let mut req = request(View::Movies, CatalogQuery::Movies);
        req.profile.server_url = "http://captured".to_string();

        spawn_fetch(catalog.clone(), req, tx).await.unwrap();
        assert_eq!(catalog.profiles()[0].server_url, "http://captured");
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let catalog = Arc::new(StaticCatalog::ok(vec![]));
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let handle = spawn_fetch(catalog, request(View::Movies, CatalogQuery::Movies), tx);
        assert!(handle.await.is_ok());
    }
}
