use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a `Frame`
/// within a given `Rect`. Key handling lives in core (`KeyHandler`), so a
/// component only ever draws.
///
/// `render` takes `&mut self` so a component may update presentation caches
/// during the render pass, in line with ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
