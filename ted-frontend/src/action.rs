#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    Render,
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
    SkipRender,
}

pub fn exec(actions: &[Action]) -> ActionResult {
    if actions.contains(&Action::Quit) {
        ActionResult::Quit
    } else if actions.contains(&Action::Render) {
        ActionResult::Normal
    } else {
        ActionResult::SkipRender
    }
}
