use crate::model::BufferLine;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(CursorDirection),
    SetContent(Vec<BufferLine>),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteBackward,
    DeleteForward,
    Insert(char),
    InsertLineBreak,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Down,
    Left,
    LineEnd,
    LineStart,
    Right,
    Up,
}
