use crate::{
    message::TextModification,
    model::{BufferEvent, BufferLine, Cursor, TextBuffer},
};

pub fn update(buffer: &mut TextBuffer, modification: &TextModification) -> Vec<BufferEvent> {
    buffer.assert_invariants();

    let events = match modification {
        TextModification::DeleteBackward => delete_backward(buffer),
        TextModification::DeleteForward => delete_forward(buffer),
        TextModification::Insert(c) => insert(buffer, *c),
        TextModification::InsertLineBreak => insert_line_break(buffer),
    };

    buffer.assert_invariants();

    events
}

pub fn insert(buffer: &mut TextBuffer, c: char) -> Vec<BufferEvent> {
    let Cursor {
        horizontal_index,
        vertical_index,
    } = buffer.cursor;

    buffer.lines[vertical_index]
        .content
        .insert(horizontal_index, c);

    buffer.cursor.horizontal_index += 1;

    vec![BufferEvent::MovedRight]
}

pub fn insert_line_break(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let Cursor {
        horizontal_index,
        vertical_index,
    } = buffer.cursor;

    let tail = buffer.lines[vertical_index]
        .content
        .split_off(horizontal_index);

    buffer
        .lines
        .insert(vertical_index + 1, BufferLine { content: tail });

    let mut events = Vec::new();
    if horizontal_index != 0 {
        buffer.cursor.horizontal_index = 0;
        events.push(BufferEvent::MovedLeft);
    }

    buffer.cursor.vertical_index = vertical_index + 1;
    events.push(BufferEvent::MovedDown);

    events
}

pub fn delete_backward(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let Cursor {
        horizontal_index,
        vertical_index,
    } = buffer.cursor;

    if horizontal_index == 0 && vertical_index == 0 {
        return Vec::new();
    }

    if horizontal_index == 0 {
        let previous_index = vertical_index - 1;
        let previous_length = buffer.lines[previous_index].len();

        let current = buffer.lines.remove(vertical_index);
        buffer.lines[previous_index].content.extend(current.content);

        buffer.cursor = Cursor::new(previous_length, previous_index);

        let mut events = Vec::new();
        if previous_length != 0 {
            events.push(BufferEvent::MovedRight);
        }
        events.push(BufferEvent::MovedUp);

        return events;
    }

    buffer.cursor.horizontal_index = horizontal_index - 1;
    buffer.lines[vertical_index]
        .content
        .remove(horizontal_index - 1);

    vec![BufferEvent::MovedLeft]
}

pub fn delete_forward(buffer: &mut TextBuffer) -> Vec<BufferEvent> {
    let Cursor {
        horizontal_index,
        vertical_index,
    } = buffer.cursor;

    let line_length = buffer.lines[vertical_index].len();
    let is_last_line = vertical_index + 1 == buffer.lines.len();

    if horizontal_index == line_length && is_last_line {
        return Vec::new();
    }

    if horizontal_index == line_length {
        let next = buffer.lines.remove(vertical_index + 1);
        buffer.lines[vertical_index].content.extend(next.content);
    } else {
        buffer.lines[vertical_index]
            .content
            .remove(horizontal_index);
    }

    Vec::new()
}

pub fn set_content(buffer: &mut TextBuffer, content: &[BufferLine]) -> Vec<BufferEvent> {
    let previous = buffer.cursor;

    *buffer = TextBuffer::from_lines(content.to_vec());

    let mut events = Vec::new();
    if previous.vertical_index != 0 {
        events.push(BufferEvent::MovedUp);
    }
    if previous.horizontal_index != 0 {
        events.push(BufferEvent::MovedLeft);
    }

    buffer.assert_invariants();

    events
}
