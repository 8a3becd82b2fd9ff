//! # TextInput Component
//!
//! A labelled single-line field. When focused it places the terminal cursor
//! at the edit position; ratatui hides the cursor on frames where no
//! component sets it.

use crate::core::state::TextField;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

pub struct TextInput<'a> {
    pub label: &'a str,
    pub field: &'a TextField,
    pub focused: bool,
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let inner_width = area.width.saturating_sub(2);
        let column = self.field.cursor_column();
        // Scroll horizontally so the cursor stays inside the box.
        let scroll = column.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(self.field.value())
            .scroll((0, scroll))
            .block(
                Block::bordered()
                    .title(self.label)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, area);

        if self.focused && area.height >= 3 && inner_width > 0 {
            frame.set_cursor_position((area.x + 1 + column - scroll, area.y + 1));
        }
    }
}
