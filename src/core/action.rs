//! # Actions
//!
//! Everything that can happen becomes an `Action`.
//! User presses Enter? That's `Action::Activate`.
//! A fetch finishes? That's `Action::FetchCompleted { target, result }`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` describing the I/O to perform next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Transition table
//!
//! ```text
//! Main      ──Movies──▶ Movies   (fetch movies)
//! Main      ──TV Shows▶ TvShows  (fetch series)
//! Main      ──Search──▶ Search   (empty query, no fetch)
//! Main      ──Configure▶ Configure (fields from live profile)
//! Movies/TvShows ──record──▶ Seasons  (fetch seasons of record)
//! Seasons   ──record──▶ Episodes (fetch episodes of record, sorted)
//! Episodes/Search ──record──▶ (play, view unchanged)
//! Search    ──submit──▶ Search   (fetch search results)
//! Configure ──commit──▶ (persist profile)
//! Configure ──saved───▶ Main     (profile goes live)
//! back: Episodes→Seasons→TvShows, Movies/TvShows/Search→Main
//! ```

use log::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogQuery, CatalogRecord, sort_episodes};
use crate::core::config::{ConfigError, SessionProfile};
use crate::core::error::AppError;
use crate::core::fetch::FetchRequest;
use crate::core::player::PlayerError;
use crate::core::state::{
    App, ConfigForm, MENU_CONFIGURE, MENU_MOVIES, MENU_SEARCH, MENU_TV_SHOWS, NavFrame,
    SearchFocus, TextField,
};
use crate::core::view::View;

#[derive(Debug)]
pub enum Action {
    Quit,
    Back,
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Enter: open, drill into, play, submit or commit depending on the view.
    Activate,
    /// Tab / Shift+Tab.
    CycleFocus,
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    FetchCompleted {
        target: View,
        result: Result<Vec<CatalogRecord>, CatalogError>,
    },
    PlaybackFailed(PlayerError),
    /// The committed profile reached disk.
    ProfileSaved(SessionProfile),
    ProfileSaveFailed(ConfigError),
}

/// I/O requested by `update()`, carried out by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Fetch(FetchRequest),
    Play(CatalogRecord),
    PersistProfile(SessionProfile),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested from {:?}", app.active_view);
            Effect::Quit
        }
        Action::Back => {
            back(app);
            Effect::None
        }
        Action::SelectNext => {
            select_next(app);
            Effect::None
        }
        Action::SelectPrevious => {
            select_previous(app);
            Effect::None
        }
        Action::SelectFirst => {
            if let Some(list) = app.active_buffer_mut() {
                list.select_first();
            }
            Effect::None
        }
        Action::SelectLast => {
            if let Some(list) = app.active_buffer_mut() {
                list.select_last();
            }
            Effect::None
        }
        Action::Activate => activate(app),
        Action::CycleFocus => {
            cycle_focus(app);
            Effect::None
        }
        Action::InsertChar(c) => {
            if let Some(field) = app.focused_text_mut() {
                field.insert(c);
            }
            Effect::None
        }
        Action::DeleteBackward => edit(app, |f| f.backspace()),
        Action::DeleteForward => edit(app, |f| f.delete()),
        Action::CursorLeft => edit(app, |f| f.move_left()),
        Action::CursorRight => edit(app, |f| f.move_right()),
        Action::CursorHome => edit(app, |f| f.move_home()),
        Action::CursorEnd => edit(app, |f| f.move_end()),
        Action::FetchCompleted { target, result } => {
            fetch_completed(app, target, result);
            Effect::None
        }
        Action::PlaybackFailed(e) => {
            warn!("Playback failed: {}", e);
            app.last_error = Some(AppError::Exec(e));
            Effect::None
        }
        Action::ProfileSaved(profile) => {
            info!("Profile for {} is live", profile.server_url);
            app.profile = profile;
            enter_view(app, View::Main, None)
        }
        Action::ProfileSaveFailed(e) => {
            // The live profile and the Configure form stay as they were.
            warn!("Saving profile failed: {}", e);
            app.last_error = Some(AppError::Config(e));
            Effect::None
        }
    }
}

fn edit(app: &mut App, apply: impl FnOnce(&mut TextField)) -> Effect {
    if let Some(field) = app.focused_text_mut() {
        apply(field);
    }
    Effect::None
}

// ============================================================================
// Transitions
// ============================================================================

/// Activates `view`, clears the error slot and, with a query, requests a fetch
/// whose result is tagged with `view`.
fn enter_view(app: &mut App, view: View, query: Option<CatalogQuery>) -> Effect {
    debug!("Entering {:?} from {:?}", view, app.active_view);
    app.active_view = view;
    app.last_error = None;
    match query {
        Some(query) => request_fetch(app, view, query),
        None => Effect::None,
    }
}

/// The profile is captured now, so a later Configure commit does not affect
/// this request.
fn request_fetch(app: &mut App, target: View, query: CatalogQuery) -> Effect {
    *app.in_flight.entry(target).or_insert(0) += 1;
    Effect::Fetch(FetchRequest {
        target,
        query,
        profile: app.profile.clone(),
    })
}

fn back(app: &mut App) {
    let Some(target) = app.active_view.back_target() else {
        debug!("Back is a no-op in {:?}", app.active_view);
        return;
    };

    if target == View::Main {
        app.nav_stack.clear();
        app.selection_context = None;
    } else {
        // Restore the context that was current when this level was entered.
        app.selection_context = app.nav_stack.pop().and_then(|frame| frame.selection);
    }

    debug!("Back from {:?} to {:?}", app.active_view, target);
    app.active_view = target;
    app.last_error = None;
}

fn activate(app: &mut App) -> Effect {
    match app.active_view {
        View::Main => open_menu_entry(app),
        View::Movies | View::TvShows => drill_down(app, View::Seasons, |record| {
            CatalogQuery::Seasons {
                series_id: record.id.clone(),
            }
        }),
        View::Seasons => drill_down(app, View::Episodes, |record| CatalogQuery::Episodes {
            season_id: record.id.clone(),
        }),
        View::Episodes => play_selected(app),
        View::Search => match app.search_focus {
            SearchFocus::Query => submit_search(app),
            SearchFocus::Results => play_selected(app),
        },
        View::Configure => commit_profile(app),
    }
}

fn open_menu_entry(app: &mut App) -> Effect {
    let Some(entry) = app
        .buffer(View::Main)
        .and_then(|list| list.selected_record())
        .map(|record| record.title.clone())
    else {
        return Effect::None;
    };

    match entry.as_str() {
        MENU_MOVIES => enter_view(app, View::Movies, Some(CatalogQuery::Movies)),
        MENU_TV_SHOWS => enter_view(app, View::TvShows, Some(CatalogQuery::Series)),
        MENU_SEARCH => {
            app.search_query.clear();
            app.search_focus = SearchFocus::Query;
            enter_view(app, View::Search, None)
        }
        MENU_CONFIGURE => {
            app.config_form = ConfigForm::from_profile(&app.profile);
            enter_view(app, View::Configure, None)
        }
        other => {
            warn!("Unknown menu entry: {}", other);
            Effect::None
        }
    }
}

/// Highlighted record of the active list, unless it is a synthetic row.
fn selected_real_record(app: &App) -> Option<CatalogRecord> {
    app.buffer(app.active_view)
        .and_then(|list| list.selected_record())
        .filter(|record| !record.is_synthetic())
        .cloned()
}

fn drill_down(
    app: &mut App,
    next: View,
    query_for: impl FnOnce(&CatalogRecord) -> CatalogQuery,
) -> Effect {
    let Some(record) = selected_real_record(app) else {
        return Effect::None;
    };

    let query = query_for(&record);
    app.nav_stack.push(NavFrame {
        view: app.active_view,
        selection: app.selection_context.take(),
    });
    info!("Drilling into {} ({})", record.title, record.id);
    app.selection_context = Some(record);
    enter_view(app, next, Some(query))
}

fn play_selected(app: &mut App) -> Effect {
    let Some(record) = selected_real_record(app) else {
        return Effect::None;
    };
    if !record.is_playable() {
        debug!("{} ({:?}) is not playable", record.title, record.kind);
        return Effect::None;
    }
    Effect::Play(record)
}

fn submit_search(app: &mut App) -> Effect {
    let term = app.search_query.value().to_string();
    if term.trim().is_empty() {
        return Effect::None;
    }
    info!("Searching for {:?}", term);
    app.last_error = None;
    request_fetch(app, View::Search, CatalogQuery::Search { term })
}

/// Asks for the form to be saved. Nothing changes until `ProfileSaved`.
fn commit_profile(app: &mut App) -> Effect {
    let profile = app.config_form.to_profile();
    info!("Committing profile for {}", profile.server_url);
    Effect::PersistProfile(profile)
}

fn cycle_focus(app: &mut App) {
    match app.active_view {
        View::Configure => app.config_form.focus = app.config_form.focus.toggled(),
        View::Search => {
            app.search_focus = match app.search_focus {
                SearchFocus::Query => SearchFocus::Results,
                SearchFocus::Results => SearchFocus::Query,
            }
        }
        _ => {}
    }
}

fn select_next(app: &mut App) {
    match (app.active_view, app.search_focus) {
        (View::Configure, _) => cycle_focus(app),
        (View::Search, SearchFocus::Query) => {
            if app.buffer(View::Search).is_some_and(|list| !list.is_empty()) {
                app.search_focus = SearchFocus::Results;
            }
        }
        _ => {
            if let Some(list) = app.active_buffer_mut() {
                list.select_next();
            }
        }
    }
}

fn select_previous(app: &mut App) {
    match (app.active_view, app.search_focus) {
        (View::Configure, _) => cycle_focus(app),
        (View::Search, SearchFocus::Results)
            if app
                .buffer(View::Search)
                .is_none_or(|list| list.selected_index().unwrap_or(0) == 0) =>
        {
            app.search_focus = SearchFocus::Query;
        }
        _ => {
            if let Some(list) = app.active_buffer_mut() {
                list.select_previous();
            }
        }
    }
}

// ============================================================================
// Fetch results
// ============================================================================

/// Stores a result in its target view whether or not that view is still on
/// screen. A failure leaves the target buffer as it was.
fn fetch_completed(
    app: &mut App,
    target: View,
    result: Result<Vec<CatalogRecord>, CatalogError>,
) {
    if let Some(count) = app.in_flight.get_mut(&target) {
        *count = count.saturating_sub(1);
    }

    match result {
        Ok(mut records) => {
            if target == View::Episodes {
                sort_episodes(&mut records);
            }
            info!("Fetch for {:?} returned {} records", target, records.len());
            if let Some(list) = app.buffer_mut(target) {
                list.replace(records);
            }
            if target == app.active_view {
                app.last_error = None;
            }
        }
        Err(e) => {
            warn!("Fetch for {:?} failed: {}", target, e);
            app.last_error = Some(AppError::Catalog(e));
        }
    }
}
