//! # Core Application Logic
//!
//! Navigation, list state and error handling for the Jellyfin browser.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   fetch    │      │   player   │      │   config   │
//!     │ (tokio task│      │ (external  │      │ (profile   │
//!     │  → Action) │      │  process)  │      │  on disk)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: Screen tags and the back table
//! - [`effects`]: Runs the `Effect` returned by `update()`
//! - [`fetch`]: Background catalog requests
//! - [`player`]: External player launch
//! - [`config`]: Session profile persistence and runtime options

pub mod action;
pub mod config;
pub mod effects;
pub mod error;
pub mod fetch;
pub mod player;
pub mod state;
pub mod view;
