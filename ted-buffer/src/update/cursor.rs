use crate::{
    message::CursorDirection,
    model::{BufferEvent, TextBuffer},
};

pub fn update_cursor_by_direction(
    buffer: &mut TextBuffer,
    direction: &CursorDirection,
) -> Vec<BufferEvent> {
    buffer.assert_invariants();

    let events = match direction {
        CursorDirection::Down => move_down(buffer),
        CursorDirection::Left => move_left(buffer),
        CursorDirection::LineEnd => go_to_line_end(buffer),
        CursorDirection::LineStart => go_to_line_start(buffer),
        CursorDirection::Right => move_right(buffer),
        CursorDirection::Up => move_up(buffer),
    };

    buffer.assert_invariants();

    events
}

pub fn move_left(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index == 0 {
        return Vec::new();
    }

    cursor.horizontal_index -= 1;
    vec![BufferEvent::MovedLeft]
}

pub fn move_right(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let line_length = buffer.current_line().len();
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index >= line_length {
        return Vec::new();
    }

    cursor.horizontal_index += 1;
    vec![BufferEvent::MovedRight]
}

pub fn move_up(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    if buffer.cursor.vertical_index == 0 {
        return Vec::new();
    }

    buffer.cursor.vertical_index -= 1;

    let mut events = clamp_to_line_length(buffer);
    events.push(BufferEvent::MovedUp);
    events
}

pub fn move_down(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    if buffer.cursor.vertical_index + 1 >= buffer.lines.len() {
        return Vec::new();
    }

    buffer.cursor.vertical_index += 1;

    let mut events = clamp_to_line_length(buffer);
    events.push(BufferEvent::MovedDown);
    events
}

pub fn go_to_line_start(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index == 0 {
        return Vec::new();
    }

    cursor.horizontal_index = 0;
    vec![BufferEvent::MovedLeft]
}

pub fn go_to_line_end(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let line_length = buffer.current_line().len();
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index == line_length {
        return Vec::new();
    }

    cursor.horizontal_index = line_length;
    vec![BufferEvent::MovedRight]
}

fn clamp_to_line_length(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let line_length = buffer.current_line().len();
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index > line_length {
        cursor.horizontal_index = line_length;
        vec![BufferEvent::MovedLeft]
    } else {
        Vec::new()
    }
}
