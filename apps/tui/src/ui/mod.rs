// UI module: screen dispatch plus the layout arithmetic the event loop
// shares to keep the map viewport in sync with the drawn canvas.

pub mod screens;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::Frame;

use crate::app::App;

/// Sidebar width, legend plus borders.
const SIDEBAR_WIDTH: u16 = 26;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::map_view::render_map_view(app, f);
    if app.show_help {
        screens::help::render_help(f);
    }
}

/// Header / content / status / shortcuts rows.
pub(crate) fn main_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area.inner(Margin::new(1, 0)))
        .to_vec()
}

/// Splits the content row into (canvas, sidebar).
pub(crate) fn content_chunks(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Interior of the map canvas for a terminal of the given size. The
/// projection maps viewport cells to this rectangle.
pub fn map_area(width: u16, height: u16) -> Rect {
    let chunks = main_chunks(Rect::new(0, 0, width, height));
    let (canvas, _) = content_chunks(chunks[1]);
    canvas.inner(Margin::new(1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_area_fits_the_terminal() {
        let area = map_area(120, 40);
        assert!(area.width > 0 && area.height > 0);
        assert!(area.right() <= 120 - SIDEBAR_WIDTH);
        assert!(area.bottom() <= 40);
    }

    #[test]
    fn tiny_terminals_do_not_underflow() {
        let area = map_area(10, 4);
        assert!(area.width <= 10);
        assert!(area.height <= 4);
    }
}
