use crate::{
    model::{
        frame::{FrameCursor, ViewFrame},
        viewport::ViewPort,
        TextBuffer,
    },
    width::{display_width, get_display_width},
};

pub fn compute_frame(
    viewport: &ViewPort,
    buffer: &TextBuffer,
    width: u16,
    height: u16,
) -> ViewFrame {
    let lines = buffer
        .lines
        .iter()
        .skip(viewport.vertical_index)
        .take(usize::from(height))
        .map(|line| get_visible_slice(&line.content, viewport.horizontal_index, width).to_vec())
        .collect();

    ViewFrame {
        cursor: get_cursor(viewport, buffer, width, height),
        lines,
    }
}

fn get_visible_slice(content: &[char], offset: usize, width: u16) -> &[char] {
    let content = content.get(offset..).unwrap_or(&[]);

    let mut used = 0;
    let mut end = 0;
    for c in content {
        let char_width = display_width(*c);
        if used + char_width > usize::from(width) {
            break;
        }

        used += char_width;
        end += 1;
    }

    &content[..end]
}

fn get_cursor(viewport: &ViewPort, buffer: &TextBuffer, width: u16, height: u16) -> FrameCursor {
    if width == 0 || height == 0 {
        return FrameCursor {
            hidden: true,
            x: 0,
            y: 0,
        };
    }

    let cursor = &buffer.cursor;
    let row = cursor
        .vertical_index
        .saturating_sub(viewport.vertical_index)
        .min(usize::from(height - 1));

    let line = match buffer.lines.get(cursor.vertical_index) {
        Some(line) => line,
        None => {
            tracing::warn!("cursor row {} outside of buffer", cursor.vertical_index);
            return FrameCursor {
                hidden: true,
                x: 0,
                y: to_u16(row),
            };
        }
    };

    let visible = get_visible_slice(&line.content, viewport.horizontal_index, width);
    let left_of_cursor = cursor
        .horizontal_index
        .saturating_sub(viewport.horizontal_index)
        .min(visible.len());

    let column = get_display_width(&visible[..left_of_cursor]).min(usize::from(width - 1));

    FrameCursor {
        hidden: false,
        x: to_u16(column),
        y: to_u16(row),
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
