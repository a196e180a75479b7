use key::Key;
use map::KeyMap;
use message::KeymapMessage;
use ted_buffer::message::{BufferMessage, TextModification};

pub mod conversion;
pub mod key;
pub mod map;
pub mod message;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Keycode {0} is invalid.")]
    InvalidKeycode(String),
    #[error("Failed to resolve valid binding.")]
    NoValidBindingFound,
}

#[derive(Debug, Default)]
pub struct MessageResolver {
    map: KeyMap,
}

impl MessageResolver {
    pub fn add_key(&self, key: Key) -> Option<KeymapMessage> {
        match resolve_binding(&self.map, &key) {
            Ok(message) => Some(message),
            Err(error) => {
                tracing::trace!("discarding key {}: {}", key, error);
                None
            }
        }
    }
}

fn resolve_binding(map: &KeyMap, key: &Key) -> Result<KeymapMessage, KeyMapError> {
    if let Some(binding) = map.get(key) {
        return Ok(binding.to_message());
    }

    match key.to_char() {
        Some(c) => Ok(KeymapMessage::Buffer(BufferMessage::Modification(
            TextModification::Insert(c),
        ))),
        None => Err(KeyMapError::NoValidBindingFound),
    }
}
