use action::ActionResult;
use error::AppError;
use event::Emitter;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;
use ted_keymap::MessageResolver;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod model;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start(MessageResolver::default());

    let size = terminal.size()?;
    let mut model = Model::new(&settings, size.width, size.height);

    tracing::debug!("starting with model state: {:?}", model);

    render_model(&mut terminal, &mut model)?;

    let mut result = Vec::new();
    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::debug!("received messages: {:?}", envelope.messages);

        let actions = update_model(&mut model, &envelope);
        match action::exec(&actions) {
            ActionResult::Normal => {
                if let Err(error) = render_model(&mut terminal, &mut model) {
                    tracing::error!("rendering failed: {:?}", error);
                    result.push(error);
                    break;
                }
            }
            ActionResult::Quit => break,
            ActionResult::SkipRender => {
                tracing::trace!("skipping render for unchanged cursor");
            }
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    if let Err(error) = terminal.shutdown() {
        result.push(error);
    }

    aggregate(result)
}

fn aggregate(errors: Vec<AppError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(errors))
    }
}
