use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::NextFocus => app.cycle_focus(true),
        InputAction::PrevFocus => app.cycle_focus(false),
        InputAction::MoveUp => app.move_cursor(false),
        InputAction::MoveDown => app.move_cursor(true),
        InputAction::ToggleSelect => app.toggle_at_cursor(),
        InputAction::ClearSelection => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.clear_selection();
            }
        }
        InputAction::Activate => app.activate_primary(),
        InputAction::PlaySelected => app.play_selected(),
        InputAction::DiscardSelected => app.discard_selected(),
        InputAction::SkipRound => app.skip_round(),
        InputAction::NextRound => app.next_round(),
        InputAction::BuySelected => app.buy_selected(),
        InputAction::SellJoker => app.sell_selected(),
        InputAction::ToggleSort => app.toggle_sort(),
    }
}
