use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and render to a
/// `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components holding a `&mut` presentation
/// state (for example a `ListState`) can update it during the render pass,
/// the same way ratatui's `StatefulWidget` works.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
