use std::fmt;

use serde::Deserialize;

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Movie,
    Series,
    Season,
    Episode,
    /// Synthetic main-menu entry that opens a library.
    Category,
    /// Synthetic main-menu entry that opens a tool view.
    Action,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Movie => "movie",
            RecordKind::Series => "tvshow",
            RecordKind::Season => "season",
            RecordKind::Episode => "episode",
            RecordKind::Category => "category",
            RecordKind::Action => "action",
        }
    }

    /// Kinds that carry a stream locator once fetched.
    pub fn is_playable(self) -> bool {
        matches!(self, RecordKind::Movie | RecordKind::Episode)
    }

    /// Maps the server's `Type` / `MediaType` pair onto a kind.
    /// Unknown types that are still videos are treated as movies.
    pub(crate) fn from_wire(item_type: &str, media_type: Option<&str>) -> Self {
        match item_type {
            "Movie" => RecordKind::Movie,
            "Series" => RecordKind::Series,
            "Season" => RecordKind::Season,
            "Episode" => RecordKind::Episode,
            _ if media_type == Some("Video") => RecordKind::Movie,
            _ => RecordKind::Category,
        }
    }
}

/// A normalized media entity, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Server-assigned id. Empty only for synthetic menu rows.
    pub id: String,
    pub title: String,
    pub kind: RecordKind,
    /// Set for seasons (series id) and episodes (season id).
    pub parent_id: Option<String>,
    /// Episode ordering key.
    pub sequence_number: Option<u32>,
    pub display_title: String,
    /// Playable URL for movies and episodes, empty otherwise.
    pub stream_locator: String,
}

impl CatalogRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: RecordKind) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            display_title: title.clone(),
            title,
            kind,
            parent_id: None,
            sequence_number: None,
            stream_locator: String::new(),
        }
    }

    /// A static menu row with no server identity.
    pub fn menu_entry(title: &str, kind: RecordKind) -> Self {
        Self::new("", title, kind)
    }

    pub fn is_synthetic(&self) -> bool {
        self.id.is_empty()
    }

    pub fn is_playable(&self) -> bool {
        !self.stream_locator.is_empty()
    }
}

/// Sorts episodes ascending by sequence number. Missing numbers sort first;
/// ties keep server order.
pub fn sort_episodes(records: &mut [CatalogRecord]) {
    records.sort_by_key(|record| record.sequence_number);
}

// ============================================================================
// Queries
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Movies,
    Series,
    Seasons { series_id: String },
    /// Episodes of a season, requested sorted by name.
    Episodes { season_id: String },
    Search { term: String },
    /// Arbitrary path below the server root plus query parameters.
    /// The API key is appended automatically.
    Prebuilt {
        path: String,
        params: Vec<(String, String)>,
    },
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogQuery::Movies => write!(f, "list movies"),
            CatalogQuery::Series => write!(f, "list series"),
            CatalogQuery::Seasons { series_id } => write!(f, "seasons of {series_id}"),
            CatalogQuery::Episodes { season_id } => {
                write!(f, "episodes of parent {season_id} sorted by name")
            }
            CatalogQuery::Search { term } => write!(f, "search {term:?}"),
            CatalogQuery::Prebuilt { path, .. } => write!(f, "prebuilt {path}"),
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// Top-level body of an item listing. A body without `Items` is an empty list.
#[derive(Deserialize, Debug)]
pub(crate) struct ItemsResponse {
    #[serde(rename = "Items", default)]
    pub items: Vec<MediaItem>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct MediaItem {
    pub id: String,
    /// Some servers send `"Name": null` for untitled items.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Type", default)]
    pub item_type: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub index_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, sequence: Option<u32>) -> CatalogRecord {
        CatalogRecord {
            sequence_number: sequence,
            ..CatalogRecord::new(id, id, RecordKind::Episode)
        }
    }

    #[test]
    fn test_sort_episodes_puts_missing_numbers_first() {
        let mut records = vec![episode("e1", Some(2)), episode("e2", Some(1)), episode("e3", None)];
        sort_episodes(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e2", "e1"]);
    }

    #[test]
    fn test_sort_episodes_is_stable_for_ties() {
        let mut records = vec![episode("a", Some(1)), episode("b", Some(1)), episode("c", Some(0))];
        sort_episodes(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_menu_entry_is_synthetic() {
        let entry = CatalogRecord::menu_entry("Movies", RecordKind::Category);
        assert!(entry.is_synthetic());
        assert!(!entry.is_playable());
        assert_eq!(entry.display_title, "Movies");
    }

    #[test]
    fn test_kind_from_wire() {
        assert_eq!(RecordKind::from_wire("Movie", None), RecordKind::Movie);
        assert_eq!(RecordKind::from_wire("Series", None), RecordKind::Series);
        assert_eq!(RecordKind::from_wire("Episode", Some("Video")), RecordKind::Episode);
        assert_eq!(RecordKind::from_wire("MusicVideo", Some("Video")), RecordKind::Movie);
        assert_eq!(RecordKind::from_wire("BoxSet", None), RecordKind::Category);
    }

    #[test]
    fn test_items_response_tolerates_missing_fields() {
        let json = r#"{"Items":[{"Id":"1","Name":"A"},{"Id":"2","Name":"B","Type":"Episode","IndexNumber":3}]}"#;
        let parsed: ItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].item_type, "");
        assert_eq!(parsed.items[1].index_number, Some(3));
    }

    #[test]
    fn test_items_response_tolerates_null_name() {
        let json = r#"{"Items":[{"Id":"1","Name":null,"Type":"Movie"},{"Id":"2","Name":"B"}]}"#;
        let parsed: ItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].name, None);
        assert_eq!(parsed.items[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn test_items_response_without_items_is_empty() {
        let parsed: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }
}
