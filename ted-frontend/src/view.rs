use ted_buffer::update::viewport;

use crate::{error::AppError, model::Model, terminal::TerminalWrapper};

pub fn render_model(terminal: &mut TerminalWrapper, model: &mut Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let rect = frame.area();
        ted_buffer::view(&model.viewport, &model.buffer, frame, rect);
    })?;

    viewport::rendered(&mut model.viewport, &model.buffer);

    Ok(())
}
