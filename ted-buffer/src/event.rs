use std::collections::HashMap;

use crate::model::{BufferEvent, TextBuffer};

type Handler<T> = Box<dyn Fn(&mut T, &TextBuffer)>;

/// Subscriber table for [`BufferEvent`]s.
///
/// The registry is owned by whoever composes buffer and listeners, so the buffer
/// itself never knows who is listening. Handlers of one event kind run in the
/// order they were subscribed.
pub struct EventRegistry<T> {
    handlers: HashMap<BufferEvent, Vec<Handler<T>>>,
}

impl<T> Default for EventRegistry<T> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<T> std::fmt::Debug for EventRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<_> = self
            .handlers
            .iter()
            .map(|(event, handlers)| (event, handlers.len()))
            .collect();

        counts.sort_by_key(|(event, _)| format!("{:?}", event));

        f.debug_struct("EventRegistry")
            .field("handlers", &counts)
            .finish()
    }
}

impl<T> EventRegistry<T> {
    pub fn subscribe<F>(&mut self, event: BufferEvent, handler: F)
    where
        F: Fn(&mut T, &TextBuffer) + 'static,
    {
        self.handlers
            .entry(event)
            .or_default()
            .push(Box::new(handler));
    }

    pub fn dispatch(&self, target: &mut T, buffer: &TextBuffer, events: &[BufferEvent]) {
        for event in events {
            let handlers = match self.handlers.get(event) {
                Some(it) => it,
                None => {
                    tracing::trace!("no handler registered for {:?}", event);
                    continue;
                }
            };

            for handler in handlers {
                handler(target, buffer);
            }
        }
    }

    pub fn len(&self, event: &BufferEvent) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }
}
