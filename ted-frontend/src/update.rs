use ted_buffer::{message::BufferMessage, update::viewport};
use ted_keymap::message::KeymapMessage;

use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

pub fn update_model(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    envelope
        .messages
        .iter()
        .flat_map(|message| update(model, message))
        .collect()
}

fn update(model: &mut Model, message: &Message) -> Vec<Action> {
    tracing::debug!("handling message: {:?}", message);

    match message {
        Message::Keymap(KeymapMessage::Buffer(message)) => update_buffer(model, message),
        Message::Keymap(KeymapMessage::Quit) => vec![Action::Quit],
        Message::Resize(width, height) => {
            viewport::resize(&mut model.viewport, &model.buffer, *width, *height);
            vec![Action::Render]
        }
    }
}

fn update_buffer(model: &mut Model, message: &BufferMessage) -> Vec<Action> {
    let events = ted_buffer::update(&mut model.buffer, message);
    model
        .registry
        .dispatch(&mut model.viewport, &model.buffer, &events);

    match message {
        BufferMessage::MoveCursor(_) => {
            if viewport::has_cursor_moved(&model.viewport, &model.buffer) {
                vec![Action::Render]
            } else {
                Vec::new()
            }
        }
        BufferMessage::Modification(_) | BufferMessage::SetContent(_) => vec![Action::Render],
    }
}
