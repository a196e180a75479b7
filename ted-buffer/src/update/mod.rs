use crate::{
    message::BufferMessage,
    model::{BufferEvent, TextBuffer},
};

pub mod cursor;
pub mod modification;
pub mod viewport;

pub fn update_buffer(buffer: &mut TextBuffer, message: &BufferMessage) -> Vec<BufferEvent> {
    tracing::debug!("handling buffer message: {:?}", message);

    let events = match message {
        BufferMessage::Modification(modification) => modification::update(buffer, modification),
        BufferMessage::MoveCursor(direction) => {
            cursor::update_cursor_by_direction(buffer, direction)
        }
        BufferMessage::SetContent(content) => modification::set_content(buffer, content),
    };

    if !events.is_empty() {
        tracing::trace!("buffer emitted events: {:?}", events);
    }

    events
}
