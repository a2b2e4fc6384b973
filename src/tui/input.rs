//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Run the fetch pipeline over the endpoint list.
    Fetch,
    /// Write the consolidated table to the export file.
    Export,
}

/// Handles a key event and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::EndpointEntry => handle_endpoint_entry(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tabs
        KeyCode::Tab => {
            state.current_tab = state.current_tab.next();
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.current_tab = state.current_tab.prev();
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.current_tab = Tab::Sample;
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.current_tab = Tab::Data;
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.current_tab = Tab::Summary;
            KeyAction::None
        }
        KeyCode::Char('4') => {
            state.current_tab = Tab::Chart;
            KeyAction::None
        }

        // Actions
        KeyCode::Char('e') => {
            state.input_mode = InputMode::EndpointEntry;
            KeyAction::None
        }
        KeyCode::Char('f') | KeyCode::F(5) => KeyAction::Fetch,
        KeyCode::Char('w') => KeyAction::Export,

        // Help
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            state.help_scroll = 0;
            KeyAction::None
        }
        KeyCode::Esc => {
            state.show_help = false;
            KeyAction::None
        }

        // Navigation within the current view
        KeyCode::Up | KeyCode::Char('k') => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_sub(1);
            } else {
                state.select_up();
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_add(1);
            } else {
                state.select_down();
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.page_up();
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.page_down();
            KeyAction::None
        }
        KeyCode::Left => {
            state.scroll_left();
            KeyAction::None
        }
        KeyCode::Right => {
            state.scroll_right();
            KeyAction::None
        }

        // View-only sort
        KeyCode::Char('o') => {
            state.cycle_sort();
            KeyAction::None
        }
        KeyCode::Char('r') => {
            state.toggle_sort_direction();
            KeyAction::None
        }

        // Chart axis columns
        KeyCode::Char('x') if state.current_tab == Tab::Chart => {
            state.cycle_chart_x();
            KeyAction::None
        }
        KeyCode::Char('y') if state.current_tab == Tab::Chart => {
            state.cycle_chart_y();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

fn handle_endpoint_entry(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.endpoint_input.clear();
            KeyAction::None
        }
        KeyCode::Enter => {
            state.submit_endpoint_input();
            KeyAction::None
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.remove_last_endpoint();
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.endpoint_input.pop();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.endpoint_input.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
