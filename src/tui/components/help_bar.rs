use crate::core::state::{App, SearchFocus};
use crate::core::view::View;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Bottom line listing the keys that do something in the current view.
pub struct HelpBar {
    pub hints: &'static str,
}

impl HelpBar {
    pub fn for_app(app: &App) -> Self {
        let hints = match (app.active_view, app.search_focus) {
            (View::Main, _) => "↑/↓ move · Enter open · q quit",
            (View::Episodes, _) => "↑/↓ move · Enter play · Esc back · q quit",
            (View::Search, SearchFocus::Query) => "Enter search · Tab results · Esc back · Ctrl+C quit",
            (View::Search, SearchFocus::Results) => "↑/↓ move · Enter play · Tab query · Esc back · q quit",
            (View::Configure, _) => "Tab switch field · Enter save · Ctrl+C quit",
            _ => "↑/↓ move · Enter open · Esc back · q quit",
        };
        Self { hints }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.hints, Style::default().add_modifier(Modifier::DIM)),
            area,
        );
    }
}
