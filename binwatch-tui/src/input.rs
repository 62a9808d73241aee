use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Load the schedule for the address under the cursor
    LoadScheduleForCurrentAddress,
    /// Re-run the extraction for the already selected address
    Reload,
    /// Flip simulation mode and refresh the view
    ToggleSimulation,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Down, Enter, Esc, Left, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::AddressSelect => match key.code {
            Up | Char('k') => {
                if app.address_list_index > 0 {
                    app.address_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.address_list_index + 1 < app.addresses.len() {
                    app.address_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                action = Action::LoadScheduleForCurrentAddress;
            }
            Char('t') => {
                action = Action::ToggleSimulation;
            }
            _ => {}
        },

        Screen::ScheduleView => match key.code {
            Left | Esc | Char('b') => {
                app.screen = Screen::AddressSelect;
            }
            Char('r') => {
                action = Action::Reload;
            }
            Char('t') => {
                action = Action::ToggleSimulation;
            }
            _ => {}
        },
    }
    action
}
