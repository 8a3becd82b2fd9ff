//! # RecordList Component
//!
//! A bordered, scrollable list of catalog records. Each row shows the display
//! title with the record kind underneath. The highlight follows the
//! `ListBuffer` cursor; the `ListState` it renders into only keeps the scroll
//! offset stable between frames.

use crate::catalog::CatalogRecord;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

pub struct RecordList<'a> {
    pub title: &'a str,
    pub records: &'a [CatalogRecord],
    pub selected: Option<usize>,
    /// Dimmed when keyboard focus is elsewhere (Search query field).
    pub focused: bool,
    pub state: &'a mut ListState,
}

impl Component for RecordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title(self.title)
            .border_style(border_style);

        if self.records.is_empty() {
            let empty = Paragraph::new("Nothing here yet")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self.records.iter().map(record_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.state.select(self.selected);
        frame.render_stateful_widget(list, area, &mut *self.state);
    }
}

fn record_item(record: &CatalogRecord) -> ListItem<'_> {
    ListItem::new(Text::from(vec![
        Line::from(record.display_title.as_str()),
        Line::from(Span::styled(
            record.kind.label(),
            Style::default().fg(Color::DarkGray),
        )),
    ]))
}
