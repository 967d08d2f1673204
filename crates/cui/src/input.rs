use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    NextFocus,
    PrevFocus,
    MoveUp,
    MoveDown,
    ToggleSelect,
    ClearSelection,
    Activate,
    PlaySelected,
    DiscardSelected,
    SkipRound,
    NextRound,
    BuySelected,
    SellJoker,
    ToggleSort,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::ClearSelection,
        KeyCode::Tab => InputAction::NextFocus,
        KeyCode::BackTab => InputAction::PrevFocus,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Char('k') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                InputAction::SkipRound
            } else {
                InputAction::MoveUp
            }
        }
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('p') => InputAction::PlaySelected,
        KeyCode::Char('x') => InputAction::DiscardSelected,
        KeyCode::Char('n') => InputAction::NextRound,
        KeyCode::Char('b') => InputAction::BuySelected,
        KeyCode::Char('v') => InputAction::SellJoker,
        KeyCode::Char('s') => InputAction::ToggleSort,
        KeyCode::Char('K') => InputAction::SkipRound,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)),
            InputAction::PlaySelected
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            InputAction::DiscardSelected
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }

    #[test]
    fn plain_k_moves_but_shifted_k_skips() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            InputAction::MoveUp
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SHIFT)),
            InputAction::SkipRound
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            InputAction::SkipRound
        );
    }

    #[test]
    fn unknown_keys_map_to_none() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE)),
            InputAction::None
        );
    }
}
