use unicode_width::UnicodeWidthChar;

pub const TAB_WIDTH: usize = 4;

pub fn display_width(c: char) -> usize {
    if c == '\t' {
        TAB_WIDTH
    } else if c.is_control() {
        0
    } else {
        c.width().unwrap_or(0)
    }
}

pub fn get_display_width(chars: &[char]) -> usize {
    chars.iter().map(|c| display_width(*c)).sum()
}
