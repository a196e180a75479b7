/// The visible part of a buffer, ready to be painted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViewFrame {
    pub cursor: FrameCursor,
    pub lines: Vec<Vec<char>>,
}

/// Cursor in screen cells relative to the top left of the viewport.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameCursor {
    pub hidden: bool,
    pub x: u16,
    pub y: u16,
}
