use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::model::{frame::ViewFrame, viewport::ViewPort, TextBuffer};

use self::frame::compute_frame;

pub mod frame;
mod line;

pub fn view(viewport: &ViewPort, buffer: &TextBuffer, frame: &mut Frame, rect: Rect) {
    let computed = compute_frame(viewport, buffer, rect.width, rect.height);
    render(&computed, frame, rect);
}

fn render(computed: &ViewFrame, frame: &mut Frame, rect: Rect) {
    let lines: Vec<_> = computed
        .lines
        .iter()
        .map(|content| Line::from(line::expand(content)))
        .collect();

    frame.render_widget(Paragraph::new(lines), rect);

    if !computed.cursor.hidden {
        frame.set_cursor_position((
            rect.x.saturating_add(computed.cursor.x),
            rect.y.saturating_add(computed.cursor.y),
        ));
    }
}
