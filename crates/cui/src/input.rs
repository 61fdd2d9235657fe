use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Select,
    Restart,
    Dismiss,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Enter => InputAction::Select,
        KeyCode::Char(' ') => InputAction::Select,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('r') => InputAction::Restart,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Select
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            InputAction::Select
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            InputAction::Restart
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }

    #[test]
    fn maps_vim_style_movement() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            InputAction::MoveLeft
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            InputAction::MoveDown
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            InputAction::MoveUp
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)),
            InputAction::MoveRight
        );
    }
}
