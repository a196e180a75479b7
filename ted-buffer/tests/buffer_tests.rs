use proptest::{prelude::*, sample::Index};
use ted_buffer::{
    event::EventRegistry,
    message::{BufferMessage, CursorDirection, TextModification},
    model::{viewport::ViewPort, BufferLine, Cursor, TextBuffer},
    width::get_display_width,
};

fn buffer_strategy() -> impl Strategy<Value = TextBuffer> {
    (
        prop::collection::vec("[a-z日 \t]{0,12}", 1..8),
        any::<Index>(),
        any::<Index>(),
    )
        .prop_map(|(lines, row, column)| {
            let lines: Vec<_> = lines.iter().map(|l| BufferLine::from(l.as_str())).collect();
            let mut buffer = TextBuffer::from_lines(lines);

            let vertical_index = row.index(buffer.lines.len());
            let horizontal_index = column.index(buffer.lines[vertical_index].len() + 1);
            buffer.cursor = Cursor::new(horizontal_index, vertical_index);
            buffer
        })
}

fn message_strategy() -> impl Strategy<Value = BufferMessage> {
    prop_oneof![
        Just(BufferMessage::MoveCursor(CursorDirection::Left)),
        Just(BufferMessage::MoveCursor(CursorDirection::Right)),
        Just(BufferMessage::MoveCursor(CursorDirection::Up)),
        Just(BufferMessage::MoveCursor(CursorDirection::Down)),
        Just(BufferMessage::MoveCursor(CursorDirection::LineStart)),
        Just(BufferMessage::MoveCursor(CursorDirection::LineEnd)),
        Just(BufferMessage::Modification(TextModification::InsertLineBreak)),
        Just(BufferMessage::Modification(TextModification::DeleteBackward)),
        Just(BufferMessage::Modification(TextModification::DeleteForward)),
        "[a-z日\t]".prop_map(|s| {
            let c = s.chars().next().unwrap_or('a');
            BufferMessage::Modification(TextModification::Insert(c))
        }),
    ]
}

fn send(buffer: &mut TextBuffer, message: BufferMessage) {
    let _ = ted_buffer::update(buffer, &message);
}

proptest! {
    #[test]
    fn insert_then_delete_backward_restores_buffer(
        mut buffer in buffer_strategy(),
        input in "[a-z日\t ]{0,16}",
    ) {
        let original = buffer.clone();

        for c in input.chars() {
            send(&mut buffer, BufferMessage::Modification(TextModification::Insert(c)));
        }
        for _ in input.chars() {
            send(&mut buffer, BufferMessage::Modification(TextModification::DeleteBackward));
        }

        prop_assert_eq!(original, buffer);
    }

    #[test]
    fn move_right_then_left_restores_column(mut buffer in buffer_strategy()) {
        prop_assume!(buffer.cursor.horizontal_index < buffer.current_line().len());
        let original = buffer.clone();

        send(&mut buffer, BufferMessage::MoveCursor(CursorDirection::Right));
        send(&mut buffer, BufferMessage::MoveCursor(CursorDirection::Left));

        prop_assert_eq!(original, buffer);
    }

    #[test]
    fn line_break_keeps_all_characters(mut buffer in buffer_strategy()) {
        let row = buffer.cursor.vertical_index;
        let original = buffer.lines[row].to_string();
        let line_count = buffer.lines.len();

        send(&mut buffer, BufferMessage::Modification(TextModification::InsertLineBreak));

        let joined = format!("{}{}", buffer.lines[row], buffer.lines[row + 1]);
        prop_assert_eq!(original, joined);
        prop_assert_eq!(line_count + 1, buffer.lines.len());
        prop_assert_eq!(Cursor::new(0, row + 1), buffer.cursor);
    }

    #[test]
    fn delete_forward_at_line_end_merges_next_line(mut buffer in buffer_strategy()) {
        let row = buffer.cursor.vertical_index;
        prop_assume!(row + 1 < buffer.lines.len());

        buffer.cursor.horizontal_index = buffer.lines[row].len();
        let expected = format!("{}{}", buffer.lines[row], buffer.lines[row + 1]);
        let line_count = buffer.lines.len();

        send(&mut buffer, BufferMessage::Modification(TextModification::DeleteForward));

        prop_assert_eq!(expected, buffer.lines[row].to_string());
        prop_assert_eq!(line_count - 1, buffer.lines.len());
    }

    #[test]
    fn viewport_keeps_cursor_on_screen(
        messages in prop::collection::vec(message_strategy(), 0..64),
        width in 1u16..12,
        height in 1u16..6,
    ) {
        let mut registry = EventRegistry::default();
        ted_buffer::subscribe(&mut registry);

        let mut buffer = TextBuffer::default();
        let mut viewport = ViewPort::new(width, height);

        for message in messages {
            let events = ted_buffer::update(&mut buffer, &message);
            registry.dispatch(&mut viewport, &buffer, &events);

            let cursor = buffer.cursor;
            prop_assert!(cursor.vertical_index >= viewport.vertical_index);
            prop_assert!(cursor.vertical_index < viewport.vertical_index + usize::from(height));
            prop_assert!(cursor.horizontal_index >= viewport.horizontal_index);
            prop_assert!(
                cursor.horizontal_index < viewport.horizontal_index + viewport.get_content_width()
            );

            let frame = ted_buffer::compute_frame(&viewport, &buffer, width, height);
            prop_assert!(!frame.cursor.hidden);
            prop_assert!(frame.cursor.x < width);
            prop_assert!(frame.cursor.y < height);
            prop_assert!(frame.lines.len() <= usize::from(height));

            let row = cursor.vertical_index - viewport.vertical_index;
            let visible = &frame.lines[row];
            let left_of_cursor = cursor.horizontal_index - viewport.horizontal_index;
            prop_assert!(left_of_cursor <= visible.len());
            prop_assert_eq!(
                usize::from(frame.cursor.x),
                get_display_width(&visible[..left_of_cursor])
            );
        }
    }
}

#[test]
fn move_right_to_line_end_insert_and_delete() {
    let mut buffer = TextBuffer::from("abc");

    for _ in 0..4 {
        send(&mut buffer, BufferMessage::MoveCursor(CursorDirection::Right));
    }
    assert_eq!(Cursor::new(3, 0), buffer.cursor);

    send(&mut buffer, BufferMessage::Modification(TextModification::Insert('X')));
    assert_eq!("abcX", buffer.to_string());
    assert_eq!(Cursor::new(4, 0), buffer.cursor);

    send(&mut buffer, BufferMessage::Modification(TextModification::DeleteBackward));
    assert_eq!("abc", buffer.to_string());
    assert_eq!(Cursor::new(3, 0), buffer.cursor);
}

#[test]
fn line_break_at_line_end_and_delete_backward() {
    let mut buffer = TextBuffer::from("ab\ncd");
    buffer.cursor = Cursor::new(2, 0);

    send(&mut buffer, BufferMessage::Modification(TextModification::InsertLineBreak));
    assert_eq!("ab\n\ncd", buffer.to_string());
    assert_eq!(Cursor::new(0, 1), buffer.cursor);

    send(&mut buffer, BufferMessage::Modification(TextModification::DeleteBackward));
    assert_eq!("ab\ncd", buffer.to_string());
    assert_eq!(Cursor::new(2, 0), buffer.cursor);
}

#[test]
fn typing_past_right_edge_scrolls_horizontally() {
    let mut registry = EventRegistry::default();
    ted_buffer::subscribe(&mut registry);

    let mut buffer = TextBuffer::from("hello");
    let mut viewport = ViewPort::new(3, 1);

    let events = ted_buffer::update(
        &mut buffer,
        &BufferMessage::MoveCursor(CursorDirection::LineEnd),
    );
    registry.dispatch(&mut viewport, &buffer, &events);

    assert_eq!(Cursor::new(5, 0), buffer.cursor);
    assert!(viewport.horizontal_index > 0);
    assert!(buffer.cursor.horizontal_index - viewport.horizontal_index < 2);

    let frame = ted_buffer::compute_frame(&viewport, &buffer, 3, 1);
    assert!(frame.cursor.x < 3);
}

#[test]
fn set_content_scrolls_back_to_origin() {
    let mut registry = EventRegistry::default();
    ted_buffer::subscribe(&mut registry);

    let mut buffer = TextBuffer::from("a\nb\nc\nd\nhello world");
    let mut viewport = ViewPort::new(4, 2);

    for message in [
        BufferMessage::MoveCursor(CursorDirection::Down),
        BufferMessage::MoveCursor(CursorDirection::Down),
        BufferMessage::MoveCursor(CursorDirection::Down),
        BufferMessage::MoveCursor(CursorDirection::Down),
        BufferMessage::MoveCursor(CursorDirection::LineEnd),
    ] {
        let events = ted_buffer::update(&mut buffer, &message);
        registry.dispatch(&mut viewport, &buffer, &events);
    }
    assert_eq!(3, viewport.vertical_index);
    assert_eq!(9, viewport.horizontal_index);

    let events = ted_buffer::update(
        &mut buffer,
        &BufferMessage::SetContent(vec![BufferLine::from("fresh")]),
    );
    registry.dispatch(&mut viewport, &buffer, &events);

    assert_eq!(0, viewport.vertical_index);
    assert_eq!(0, viewport.horizontal_index);
}

#[test]
fn typing_tabs_scrolls_until_cursor_is_drawn() {
    let mut registry = EventRegistry::default();
    ted_buffer::subscribe(&mut registry);

    let mut buffer = TextBuffer::default();
    let mut viewport = ViewPort::new(10, 1);

    for c in ['\t', '\t', '\t', 'a'] {
        let events = ted_buffer::update(
            &mut buffer,
            &BufferMessage::Modification(TextModification::Insert(c)),
        );
        registry.dispatch(&mut viewport, &buffer, &events);
    }

    let frame = ted_buffer::compute_frame(&viewport, &buffer, 10, 1);
    let visible: String = frame.lines[0].iter().collect();

    assert_eq!(2, viewport.horizontal_index);
    assert_eq!("\ta", visible);
    assert_eq!(5, frame.cursor.x);
}

#[test]
fn typing_wide_glyphs_scrolls_until_cursor_is_drawn() {
    let mut registry = EventRegistry::default();
    ted_buffer::subscribe(&mut registry);

    let mut buffer = TextBuffer::default();
    let mut viewport = ViewPort::new(6, 1);

    for c in "日本語中文".chars() {
        let events = ted_buffer::update(
            &mut buffer,
            &BufferMessage::Modification(TextModification::Insert(c)),
        );
        registry.dispatch(&mut viewport, &buffer, &events);
    }

    let frame = ted_buffer::compute_frame(&viewport, &buffer, 6, 1);
    let visible: String = frame.lines[0].iter().collect();

    assert_eq!("中文", visible);
    assert_eq!(4, frame.cursor.x);
}
