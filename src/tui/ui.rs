//! Render Dispatcher: `App` → one full frame. Reads state only; the one
//! mutation is the per-view `ListState` scroll offset kept in `TuiState`.

use crate::core::state::{App, ConfigField, SearchFocus};
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, RecordList, TextInput, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(breadcrumb(app), app.any_loading(), tui.spinner_frame).render(frame, title_area);

    // Main area - show error OR the active view
    if let Some(error) = &app.last_error {
        draw_error_view(frame, main_area, &error.to_string());
    } else {
        match app.active_view {
            View::Search => draw_search(frame, main_area, app, tui),
            View::Configure => draw_configure(frame, main_area, app),
            view => draw_list(frame, main_area, app, tui, view, true),
        }
    }

    HelpBar::for_app(app).render(frame, help_area);
}

/// "Seasons › Firefly": the view title, plus the record drilled into.
fn breadcrumb(app: &App) -> String {
    let title = app.active_view.title();
    match (&app.selection_context, app.active_view) {
        (Some(record), View::Seasons | View::Episodes) => {
            format!("{} › {}", title, record.display_title)
        }
        _ => title.to_string(),
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let error_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, view: View, focused: bool) {
    let Some(buffer) = app.buffer(view) else {
        return;
    };
    RecordList {
        title: view.title(),
        records: buffer.records(),
        selected: buffer.selected_index(),
        focused,
        state: tui.list_states.entry(view).or_default(),
    }
    .render(frame, area);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [input_area, results_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    TextInput {
        label: "Search",
        field: &app.search_query,
        focused: app.search_focus == SearchFocus::Query,
    }
    .render(frame, input_area);

    if app.buffer(View::Search).is_some_and(|list| !list.is_empty()) {
        let focused = app.search_focus == SearchFocus::Results;
        draw_list(frame, results_area, app, tui, View::Search, focused);
    } else {
        let hint = Paragraph::new("Type a title and press Enter")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(hint, results_area);
    }
}

fn draw_configure(frame: &mut Frame, area: Rect, app: &App) {
    use Constraint::{Length, Min};
    let block = Block::bordered().title(View::Configure.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [url_area, key_area, hint_area, _] =
        Layout::vertical([Length(3), Length(3), Length(1), Min(0)]).areas(inner);

    let form = &app.config_form;
    TextInput {
        label: "Server URL",
        field: &form.server_url,
        focused: form.focus == ConfigField::ServerUrl,
    }
    .render(frame, url_area);
    TextInput {
        label: "API Key",
        field: &form.api_key,
        focused: form.focus == ConfigField::ApiKey,
    }
    .render(frame, key_area);

    frame.render_widget(
        Paragraph::new("Press Enter to save")
            .style(Style::default().add_modifier(Modifier::DIM)),
        hint_area,
    );
}
