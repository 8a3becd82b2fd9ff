//! # TitleBar Component
//!
//! Top status line: where the user is and whether anything is loading.
//!
//! ## Responsibilities
//!
//! - Display a breadcrumb built from the active view and the record drilled into
//! - Display a spinner plus "Loading" while any fetch is outstanding
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Seasons › Firefly".to_string(), true, frame_no);
//! title_bar.render(frame, area);
//! ```
//!
//! The loading flag covers fetches for any view, not only the one on
//! screen, since a stale result will still land in its buffer.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    /// e.g. "Episodes › Season 1"
    pub breadcrumb: String,
    /// Whether any fetch is in flight
    pub loading: bool,
    /// Animation counter, advanced by the event loop
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(breadcrumb: String, loading: bool, spinner_frame: usize) -> Self {
        Self {
            breadcrumb,
            loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.breadcrumb.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{glyph} Loading"),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
