//! # Application State
//!
//! The View Model. Domain state only; scroll offsets and other presentation
//! details live in the `tui` module.
//!
//! ```text
//! App
//! ├── profile: SessionProfile            // live connection settings
//! ├── active_view: View                  // the screen on display
//! ├── selection_context: Option<Record>  // the record last drilled into
//! ├── nav_stack: Vec<NavFrame>           // (view, context) per drill-down
//! ├── buffers: HashMap<View, ListBuffer> // one record list per list view
//! ├── search_query / search_focus        // Search screen input
//! ├── config_form: ConfigForm            // Configure screen fields
//! ├── in_flight: HashMap<View, usize>    // outstanding fetches per target
//! └── last_error: Option<AppError>       // single error slot
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::catalog::{CatalogRecord, RecordKind};
use crate::core::config::SessionProfile;
use crate::core::error::AppError;
use crate::core::view::View;

pub const MENU_MOVIES: &str = "Movies";
pub const MENU_TV_SHOWS: &str = "TV Shows";
pub const MENU_SEARCH: &str = "Search";
pub const MENU_CONFIGURE: &str = "Configure";

/// The static rows of the main menu.
pub fn main_menu() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::menu_entry(MENU_MOVIES, RecordKind::Category),
        CatalogRecord::menu_entry(MENU_TV_SHOWS, RecordKind::Category),
        CatalogRecord::menu_entry(MENU_SEARCH, RecordKind::Action),
        CatalogRecord::menu_entry(MENU_CONFIGURE, RecordKind::Action),
    ]
}

// ============================================================================
// ListBuffer
// ============================================================================

/// An ordered record list plus the highlighted row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBuffer {
    records: Vec<CatalogRecord>,
    selected: usize,
}

impl ListBuffer {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            records,
            selected: 0,
        }
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highlighted row, `None` when the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.records.is_empty()).then_some(self.selected)
    }

    pub fn selected_record(&self) -> Option<&CatalogRecord> {
        self.records.get(self.selected)
    }

    /// Replaces the contents wholesale and highlights the first row.
    pub fn replace(&mut self, records: Vec<CatalogRecord>) {
        self.records = records;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if !self.records.is_empty() {
            self.selected = (self.selected + 1).min(self.records.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.records.len().saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected = index;
        }
    }
}

// ============================================================================
// TextField
// ============================================================================

/// Single-line editable text with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.value[..self.cursor].width() as u16
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

// ============================================================================
// Screen-specific input state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Query,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigField {
    #[default]
    ServerUrl,
    ApiKey,
}

impl ConfigField {
    /// With two fields, forward and backward cycling are the same move.
    pub fn toggled(self) -> Self {
        match self {
            ConfigField::ServerUrl => ConfigField::ApiKey,
            ConfigField::ApiKey => ConfigField::ServerUrl,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigForm {
    pub server_url: TextField,
    pub api_key: TextField,
    pub focus: ConfigField,
}

impl ConfigForm {
    pub fn from_profile(profile: &SessionProfile) -> Self {
        Self {
            server_url: TextField::with_value(profile.server_url.clone()),
            api_key: TextField::with_value(profile.api_key.clone()),
            focus: ConfigField::ServerUrl,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            ConfigField::ServerUrl => &mut self.server_url,
            ConfigField::ApiKey => &mut self.api_key,
        }
    }

    /// Builds a profile from the field values as typed. No validation.
    pub fn to_profile(&self) -> SessionProfile {
        SessionProfile {
            server_url: self.server_url.value().to_string(),
            api_key: self.api_key.value().to_string(),
        }
    }
}

/// A drill-down step: the view left behind and the context it had.
#[derive(Debug, Clone, PartialEq)]
pub struct NavFrame {
    pub view: View,
    pub selection: Option<CatalogRecord>,
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub profile: SessionProfile,
    pub active_view: View,
    pub selection_context: Option<CatalogRecord>,
    pub nav_stack: Vec<NavFrame>,
    pub buffers: HashMap<View, ListBuffer>,
    pub search_query: TextField,
    pub search_focus: SearchFocus,
    pub config_form: ConfigForm,
    pub in_flight: HashMap<View, usize>,
    pub last_error: Option<AppError>,
}

impl App {
    pub fn new(profile: SessionProfile) -> Self {
        let mut buffers: HashMap<View, ListBuffer> = View::LISTS
            .iter()
            .map(|view| (*view, ListBuffer::default()))
            .collect();
        buffers.insert(View::Main, ListBuffer::new(main_menu()));

        Self {
            config_form: ConfigForm::from_profile(&profile),
            profile,
            active_view: View::Main,
            selection_context: None,
            nav_stack: Vec::new(),
            buffers,
            search_query: TextField::default(),
            search_focus: SearchFocus::Query,
            in_flight: HashMap::new(),
            last_error: None,
        }
    }

    pub fn buffer(&self, view: View) -> Option<&ListBuffer> {
        self.buffers.get(&view)
    }

    pub fn buffer_mut(&mut self, view: View) -> Option<&mut ListBuffer> {
        self.buffers.get_mut(&view)
    }

    /// The list the cursor keys act on, if the active view has one in focus.
    pub fn active_buffer_mut(&mut self) -> Option<&mut ListBuffer> {
        match (self.active_view, self.search_focus) {
            (View::Configure, _) | (View::Search, SearchFocus::Query) => None,
            (view, _) => self.buffers.get_mut(&view),
        }
    }

    pub fn is_loading(&self, view: View) -> bool {
        self.in_flight.get(&view).is_some_and(|n| *n > 0)
    }

    pub fn any_loading(&self) -> bool {
        self.in_flight.values().any(|n| *n > 0)
    }

    /// True when typed characters belong to a text field rather than to shortcuts.
    pub fn text_input_active(&self) -> bool {
        match self.active_view {
            View::Configure => true,
            View::Search => self.search_focus == SearchFocus::Query,
            _ => false,
        }
    }

    /// The field receiving typed characters, if any.
    pub fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.active_view {
            View::Configure => Some(self.config_form.focused_mut()),
            View::Search if self.search_focus == SearchFocus::Query => Some(&mut self.search_query),
            _ => None,
        }
    }
}
