use std::fmt::Display;

pub mod frame;
pub mod viewport;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferEvent {
    MovedDown,
    MovedLeft,
    MovedRight,
    MovedUp,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub horizontal_index: usize,
    pub vertical_index: usize,
}

impl Cursor {
    pub fn new(horizontal_index: usize, vertical_index: usize) -> Self {
        Self {
            horizontal_index,
            vertical_index,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BufferLine {
    pub content: Vec<char>,
}

impl BufferLine {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl From<&str> for BufferLine {
    fn from(value: &str) -> Self {
        Self {
            content: value.chars().collect(),
        }
    }
}

impl Display for BufferLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.content {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The edited document together with its single cursor.
///
/// `lines` is never empty and the cursor always points at an existing line with
/// a column in `0..=line.len()`. Every operation in [`crate::update`] asserts
/// both before and after mutating.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextBuffer {
    pub cursor: Cursor,
    pub lines: Vec<BufferLine>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            lines: vec![BufferLine::default()],
        }
    }
}

impl TextBuffer {
    pub fn from_lines(lines: Vec<BufferLine>) -> Self {
        let lines = if lines.is_empty() {
            vec![BufferLine::default()]
        } else {
            lines
        };

        Self {
            cursor: Cursor::default(),
            lines,
        }
    }

    pub fn current_line(&self) -> &BufferLine {
        &self.lines[self.cursor.vertical_index]
    }

    pub fn assert_invariants(&self) {
        assert!(
            !self.lines.is_empty(),
            "text buffer must contain at least one line"
        );

        let Cursor {
            horizontal_index,
            vertical_index,
        } = self.cursor;

        assert!(
            vertical_index < self.lines.len(),
            "cursor row {} out of bounds for {} lines",
            vertical_index,
            self.lines.len()
        );

        let line_length = self.lines[vertical_index].len();
        assert!(
            horizontal_index <= line_length,
            "cursor column {} out of bounds for line {} with length {}",
            horizontal_index,
            vertical_index,
            line_length
        );
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        Self::from_lines(value.split('\n').map(BufferLine::from).collect())
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
