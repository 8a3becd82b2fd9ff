//! # Catalog
//!
//! Read-only access to the media server. Everything here is a thin I/O
//! wrapper: one query in, one ordered list of `CatalogRecord`s out.
//!
//! ```text
//! CatalogQuery + SessionProfile ──▶ CatalogSource::fetch() ──▶ Vec<CatalogRecord>
//!                                          │
//!                                          └── JellyfinClient (reqwest)
//! ```
//!
//! The core never talks HTTP. It emits a `CatalogQuery` and receives the
//! decoded records back as an `Action` (see `core::fetch`).

pub mod jellyfin;
pub mod source;
pub mod types;

pub use jellyfin::{JellyfinClient, stream_locator};
pub use source::{CatalogError, CatalogSource};
pub use types::{CatalogQuery, CatalogRecord, RecordKind, sort_episodes};
