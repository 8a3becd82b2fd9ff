//! Jellyfin implementation of `CatalogSource`.
//!
//! Every call is a single `GET` against the configured server with the API
//! key passed as the `api_key` query parameter. Responses are
//! `{"Items": [...]}` objects; each item is translated into a
//! `CatalogRecord` whose kind is decided by the query that produced it.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{CatalogError, CatalogSource};
use super::types::{
    CatalogQuery, CatalogRecord, ItemsResponse, MediaItem, RecordKind, sort_episodes,
};
use crate::core::config::SessionProfile;

/// Path segment under which the server streams a video by id.
const STREAM_PATH: &str = "Videos";

// ============================================================================
// Translation Layer
// ============================================================================

fn base_url(profile: &SessionProfile) -> &str {
    profile.server_url.trim_end_matches('/')
}

/// Builds the playable URL for an item. Pure string composition.
pub fn stream_locator(profile: &SessionProfile, item_id: &str) -> String {
    format!(
        "{}/{STREAM_PATH}/{item_id}/stream?api_key={}",
        base_url(profile),
        profile.api_key
    )
}

/// Maps a query onto a path below the server root and its query parameters
/// (credential excluded).
fn endpoint(query: &CatalogQuery) -> (String, Vec<(String, String)>) {
    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    match query {
        CatalogQuery::Movies => (
            "/Items".to_string(),
            pairs(&[("IncludeItemTypes", "Movie"), ("Recursive", "true")]),
        ),
        CatalogQuery::Series => (
            "/Items".to_string(),
            pairs(&[("IncludeItemTypes", "Series"), ("Recursive", "true")]),
        ),
        CatalogQuery::Seasons { series_id } => (format!("/Shows/{series_id}/Seasons"), Vec::new()),
        CatalogQuery::Episodes { season_id } => (
            "/Items".to_string(),
            pairs(&[("ParentId", season_id.as_str()), ("SortBy", "SortName")]),
        ),
        CatalogQuery::Search { term } => (
            "/Items".to_string(),
            pairs(&[("SearchTerm", term.as_str()), ("Recursive", "true")]),
        ),
        CatalogQuery::Prebuilt { path, params } => {
            let path = if path.starts_with('/') {
                path.clone()
            } else {
                format!("/{path}")
            };
            (path, params.clone())
        }
    }
}

/// Converts one wire item into a record, in the context of the query that fetched it.
fn to_record(item: MediaItem, query: &CatalogQuery, profile: &SessionProfile) -> CatalogRecord {
    let (kind, parent_id) = match query {
        CatalogQuery::Movies => (RecordKind::Movie, None),
        CatalogQuery::Series => (RecordKind::Series, None),
        CatalogQuery::Seasons { series_id } => (RecordKind::Season, Some(series_id.clone())),
        CatalogQuery::Episodes { season_id } => (RecordKind::Episode, Some(season_id.clone())),
        CatalogQuery::Search { .. } | CatalogQuery::Prebuilt { .. } => (
            RecordKind::from_wire(&item.item_type, item.media_type.as_deref()),
            None,
        ),
    };

    let name = item.name.unwrap_or_default();

    let sequence_number = match kind {
        RecordKind::Episode => item.index_number,
        _ => None,
    };

    let display_title = match sequence_number {
        Some(n) if n > 0 => format!("E{:02}: {}", n, name),
        _ => name.clone(),
    };

    let stream_locator = if kind.is_playable() {
        stream_locator(profile, &item.id)
    } else {
        String::new()
    };

    CatalogRecord {
        id: item.id,
        title: name,
        kind,
        parent_id,
        sequence_number,
        display_title,
        stream_locator,
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Jellyfin HTTP client. Holds no credentials; those come from the
/// `SessionProfile` passed to each call.
pub struct JellyfinClient {
    client: reqwest::Client,
}

impl JellyfinClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for JellyfinClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for JellyfinClient {
    fn name(&self) -> &str {
        "jellyfin"
    }

    async fn fetch(
        &self,
        profile: &SessionProfile,
        query: &CatalogQuery,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        let (path, params) = endpoint(query);
        let url = format!("{}{}", base_url(profile), path);

        info!("Jellyfin request: {} ({})", query, url);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .query(&[("api_key", profile.api_key.as_str())])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Jellyfin response status: {}", status);

        if !status.is_success() {
            warn!("Jellyfin API error: {} for {}", status, query);
            return Err(CatalogError::Server {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let parsed: ItemsResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        let mut records: Vec<CatalogRecord> = parsed
            .items
            .into_iter()
            .map(|item| to_record(item, query, profile))
            .collect();

        if matches!(query, CatalogQuery::Episodes { .. }) {
            sort_episodes(&mut records);
        }

        debug!("Decoded {} records for {}", records.len(), query);
        Ok(records)
    }
}
