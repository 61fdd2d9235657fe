use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveLeft => app.move_cursor(-1, 0),
        InputAction::MoveRight => app.move_cursor(1, 0),
        InputAction::MoveUp => app.move_cursor(0, -1),
        InputAction::MoveDown => app.move_cursor(0, 1),
        InputAction::Select => app.select_under_cursor(),
        InputAction::Restart => app.restart(),
        InputAction::Dismiss => app.dismiss_popup(),
    }
}
