use crate::{
    event::EventRegistry,
    model::{viewport::ViewPort, BufferEvent, Cursor, TextBuffer},
    width::{display_width, get_display_width},
};

pub fn subscribe(registry: &mut EventRegistry<ViewPort>) {
    registry.subscribe(BufferEvent::MovedUp, on_moved_up);
    registry.subscribe(BufferEvent::MovedDown, on_moved_down);
    registry.subscribe(BufferEvent::MovedLeft, on_moved_left);
    registry.subscribe(BufferEvent::MovedRight, on_moved_right);
}

// rows differ in cell widths, so the column is validated against the new row as well
pub fn on_moved_up(viewport: &mut ViewPort, buffer: &TextBuffer) {
    update_vertical_index(viewport, buffer.cursor.vertical_index);
    update_horizontal_index(viewport, buffer);
}

pub fn on_moved_down(viewport: &mut ViewPort, buffer: &TextBuffer) {
    update_vertical_index(viewport, buffer.cursor.vertical_index);
    update_horizontal_index(viewport, buffer);
}

pub fn on_moved_left(viewport: &mut ViewPort, buffer: &TextBuffer) {
    update_horizontal_index(viewport, buffer);
}

pub fn on_moved_right(viewport: &mut ViewPort, buffer: &TextBuffer) {
    update_horizontal_index(viewport, buffer);
}

pub fn resize(viewport: &mut ViewPort, buffer: &TextBuffer, width: u16, height: u16) {
    tracing::trace!(
        "resizing viewport from {}x{} to {}x{}",
        viewport.width,
        viewport.height,
        width,
        height
    );

    viewport.width = width;
    viewport.height = height;

    update_by_cursor(viewport, buffer);
}

/// Revalidates both offsets against the cursor. A cursor that moved backward since
/// the last draw and left the window is pinned to the near edge, otherwise the
/// regular scroll rules apply and pin it to the far edge.
pub fn update_by_cursor(viewport: &mut ViewPort, buffer: &TextBuffer) {
    let Cursor {
        horizontal_index,
        vertical_index,
    } = buffer.cursor;

    let last = viewport.last_cursor.unwrap_or(buffer.cursor);

    if vertical_index < last.vertical_index && !is_row_visible(viewport, vertical_index) {
        viewport.vertical_index = vertical_index;
    } else {
        update_vertical_index(viewport, vertical_index);
    }

    let line = get_line(buffer);
    if horizontal_index < last.horizontal_index
        && !is_column_visible(viewport, line, horizontal_index)
    {
        viewport.horizontal_index = horizontal_index;
    } else {
        update_horizontal_index(viewport, buffer);
    }
}

pub fn rendered(viewport: &mut ViewPort, buffer: &TextBuffer) {
    viewport.last_cursor = Some(buffer.cursor);
}

pub fn has_cursor_moved(viewport: &ViewPort, buffer: &TextBuffer) -> bool {
    viewport.last_cursor != Some(buffer.cursor)
}

fn update_vertical_index(viewport: &mut ViewPort, row: usize) {
    let height = viewport.get_content_height();
    if row >= viewport.vertical_index + height {
        viewport.vertical_index = row + 1 - height;
    } else if row < viewport.vertical_index {
        viewport.vertical_index -= 1;
        if row < viewport.vertical_index {
            viewport.vertical_index = row;
        }
    }
}

fn update_horizontal_index(viewport: &mut ViewPort, buffer: &TextBuffer) {
    let column = buffer.cursor.horizontal_index;
    if column < viewport.horizontal_index {
        viewport.horizontal_index -= 1;
        if column < viewport.horizontal_index {
            viewport.horizontal_index = column;
        }
    } else {
        let line = get_line(buffer);
        if !is_column_visible(viewport, line, column) {
            viewport.horizontal_index =
                get_far_edge_offset(line, column, viewport.get_content_width());
        }
    }
}

fn is_row_visible(viewport: &ViewPort, row: usize) -> bool {
    let height = viewport.get_content_height();
    row >= viewport.vertical_index && row < viewport.vertical_index + height
}

fn is_column_visible(viewport: &ViewPort, line: &[char], column: usize) -> bool {
    if column < viewport.horizontal_index {
        return false;
    }

    if column == viewport.horizontal_index {
        return true;
    }

    let left = line
        .get(viewport.horizontal_index..column)
        .map_or(0, get_display_width);

    left + get_cursor_cells(line, column) <= viewport.get_content_width()
}

/// Smallest offset that still shows every cell between the offset and the cursor.
fn get_far_edge_offset(line: &[char], column: usize, width: usize) -> usize {
    let mut used = get_cursor_cells(line, column);
    let mut offset = column;
    while offset > 0 {
        let cells = line.get(offset - 1).map_or(0, |c| display_width(*c));
        if used + cells > width {
            break;
        }

        used += cells;
        offset -= 1;
    }

    offset
}

// past the line end the cursor still takes one cell
fn get_cursor_cells(line: &[char], column: usize) -> usize {
    line.get(column).map_or(1, |c| display_width(*c).max(1))
}

fn get_line(buffer: &TextBuffer) -> &[char] {
    buffer
        .lines
        .get(buffer.cursor.vertical_index)
        .map(|line| line.content.as_slice())
        .unwrap_or(&[])
}
