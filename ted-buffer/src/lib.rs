use event::EventRegistry;
use message::BufferMessage;
use model::{frame::ViewFrame, viewport::ViewPort, BufferEvent, TextBuffer};
use ratatui::{layout::Rect, Frame};

pub mod event;
pub mod message;
pub mod model;
pub mod update;
mod view;
pub mod width;

pub fn update(buffer: &mut TextBuffer, message: &BufferMessage) -> Vec<BufferEvent> {
    update::update_buffer(buffer, message)
}

pub fn subscribe(registry: &mut EventRegistry<ViewPort>) {
    update::viewport::subscribe(registry)
}

pub fn compute_frame(
    viewport: &ViewPort,
    buffer: &TextBuffer,
    width: u16,
    height: u16,
) -> ViewFrame {
    view::frame::compute_frame(viewport, buffer, width, height)
}

pub fn view(viewport: &ViewPort, buffer: &TextBuffer, frame: &mut Frame, rect: Rect) {
    view::view(viewport, buffer, frame, rect)
}
