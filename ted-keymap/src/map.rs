use std::collections::HashMap;

use ted_buffer::message::{CursorDirection, TextModification};

use crate::{key::Key, message::Binding, KeyMapError};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, Binding>,
}

impl KeyMap {
    pub fn add(&mut self, keycode: &str, binding: Binding) -> Result<(), KeyMapError> {
        let key = Key::parse(keycode)?;
        if let Some(replaced) = self.mappings.insert(key, binding) {
            tracing::debug!("replaced binding {:?} for {}", replaced, keycode);
        }

        Ok(())
    }

    pub fn get(&self, key: &Key) -> Option<&Binding> {
        self.mappings.get(key)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self {
            mappings: HashMap::new(),
        };

        let bindings = [
            ("<esc>", Binding::Quit),
            ("<cr>", Binding::Modification(TextModification::InsertLineBreak)),
            ("<left>", Binding::Motion(CursorDirection::Left)),
            ("<C-b>", Binding::Motion(CursorDirection::Left)),
            ("<right>", Binding::Motion(CursorDirection::Right)),
            ("<C-f>", Binding::Motion(CursorDirection::Right)),
            ("<up>", Binding::Motion(CursorDirection::Up)),
            ("<C-p>", Binding::Motion(CursorDirection::Up)),
            ("<down>", Binding::Motion(CursorDirection::Down)),
            ("<C-n>", Binding::Motion(CursorDirection::Down)),
            ("<C-a>", Binding::Motion(CursorDirection::LineStart)),
            ("<home>", Binding::Motion(CursorDirection::LineStart)),
            ("<C-e>", Binding::Motion(CursorDirection::LineEnd)),
            ("<end>", Binding::Motion(CursorDirection::LineEnd)),
            ("<bs>", Binding::Modification(TextModification::DeleteBackward)),
            ("<del>", Binding::Modification(TextModification::DeleteForward)),
            ("<C-d>", Binding::Modification(TextModification::DeleteForward)),
            ("<space>", Binding::Modification(TextModification::Insert(' '))),
            ("<tab>", Binding::Modification(TextModification::Insert('\t'))),
        ];

        for (keycode, binding) in bindings {
            if let Err(error) = map.add(keycode, binding) {
                tracing::error!("adding default binding failed: {}", error);
            }
        }

        map
    }
}
