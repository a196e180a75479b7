use ted_buffer::message::{BufferMessage, CursorDirection, TextModification};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Binding {
    Modification(TextModification),
    Motion(CursorDirection),
    Quit,
}

impl Binding {
    pub fn to_message(&self) -> KeymapMessage {
        match self {
            Binding::Modification(modification) => {
                KeymapMessage::Buffer(BufferMessage::Modification(modification.clone()))
            }
            Binding::Motion(direction) => {
                KeymapMessage::Buffer(BufferMessage::MoveCursor(direction.clone()))
            }
            Binding::Quit => KeymapMessage::Quit,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    Buffer(BufferMessage),
    Quit,
}
