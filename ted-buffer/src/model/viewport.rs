use super::Cursor;

#[derive(Debug)]
pub struct WindowSettings {
    pub right_margin: usize,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { right_margin: 1 }
    }
}

/// Scroll state mapping the visible window onto a [`super::TextBuffer`].
///
/// `horizontal_index` and `vertical_index` are the document column and row shown
/// in the top left cell. `last_cursor` is the document cursor as of the last
/// completed draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewPort {
    pub height: u16,
    pub horizontal_index: usize,
    pub last_cursor: Option<Cursor>,
    pub right_margin: usize,
    pub vertical_index: usize,
    pub width: u16,
}

impl ViewPort {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            height,
            right_margin: WindowSettings::default().right_margin,
            width,
            ..Default::default()
        }
    }

    pub fn get_content_width(&self) -> usize {
        usize::from(self.width)
            .saturating_sub(self.right_margin)
            .max(1)
    }

    pub fn get_content_height(&self) -> usize {
        usize::from(self.height).max(1)
    }

    pub fn set(&mut self, settings: &WindowSettings) {
        self.right_margin = settings.right_margin;
    }
}
