use ted_buffer::model::viewport::WindowSettings;

#[derive(Debug, Default)]
pub struct Settings {
    pub window: WindowSettings,
}
