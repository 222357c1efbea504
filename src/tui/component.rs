use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold borrowed persistent state (e.g. a `ListState`).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update that state (scroll
/// offsets) during the render pass, like ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
