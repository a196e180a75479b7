use ted_buffer::{
    event::EventRegistry,
    model::{viewport::ViewPort, BufferEvent, TextBuffer},
};

use crate::settings::Settings;

#[derive(Debug)]
pub struct Model {
    pub buffer: TextBuffer,
    pub registry: EventRegistry<ViewPort>,
    pub viewport: ViewPort,
}

impl Model {
    pub fn new(settings: &Settings, width: u16, height: u16) -> Self {
        let mut viewport = ViewPort::new(width, height);
        viewport.set(&settings.window);

        let mut registry = EventRegistry::default();
        ted_buffer::subscribe(&mut registry);

        for event in [
            BufferEvent::MovedUp,
            BufferEvent::MovedDown,
            BufferEvent::MovedLeft,
            BufferEvent::MovedRight,
        ] {
            registry.subscribe(event, move |viewport: &mut ViewPort, buffer| {
                tracing::trace!(
                    "{:?}: cursor {:?}, offsets ({}, {})",
                    event,
                    buffer.cursor,
                    viewport.horizontal_index,
                    viewport.vertical_index
                );
            });
        }

        Self {
            buffer: TextBuffer::default(),
            registry,
            viewport,
        }
    }
}
