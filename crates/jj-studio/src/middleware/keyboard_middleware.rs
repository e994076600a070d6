//! KeyboardMiddleware - translates key presses into actions
//!
//! Three layers, first one to handle the key wins:
//!
//! 1. Priority keys: Ctrl+C always quits, Esc cancels text entry or closes the view.
//! 2. Capabilities: views with TEXT_INPUT receive characters, Backspace,
//!    Ctrl+U and Enter as text input.
//! 3. Keymap: the key (or two-key sequence) is looked up in the keymap, and
//!    the resulting action is dispatched only if the active view accepts it.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: text input
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(input) = text_input_for(&key) {
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }
        }

        // Layer 3: keymap + gating
        match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) => {
                log::debug!("Waiting for second key in sequence (first: {})", first);
                self.pending_key = Some(PendingKey::new(first));
            }
            KeyMatch::Commands(commands) => {
                self.pending_key = None;
                let accepted = commands
                    .into_iter()
                    .filter(|command| {
                        !command.is_navigation() || capabilities.supports_vim_navigation()
                    })
                    .map(|command| (command, command.to_action()))
                    .find(|(_, action)| view.is_none_or(|v| v.accepts_action(action)));
                match accepted {
                    Some((command, action)) => {
                        log::debug!("Command {:?} accepted, dispatching", command);
                        dispatcher.dispatch(action);
                    }
                    None => log::debug!("No command for {:?} accepted by active view", key),
                }
            }
            KeyMatch::Unbound => {
                self.pending_key = None;
            }
        }
    }
}

/// Text input action for a key, when the key edits a text field
fn text_input_for(key: &KeyEvent) -> Option<TextInputAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(TextInputAction::Char(c))
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        _ => None,
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{NavigationAction, SessionAction};
    use crate::reducers::app_reducer::reduce;
    use crate::views::DirectoryPickerView;
    use std::sync::mpsc::{self, Receiver};

    fn press(
        middleware: &mut KeyboardMiddleware,
        state: &AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Receiver<Action> {
        let (tx, rx) = mpsc::channel();
        let action = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)));
        assert!(!middleware.handle(&action, state, &Dispatcher::new(tx)));
        rx
    }

    fn picker_state() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::PushView(Box::new(DirectoryPickerView::new()))),
        )
    }

    #[test]
    fn test_o_selects_repository() {
        let mut mw = KeyboardMiddleware::new();
        let rx = press(
            &mut mw,
            &AppState::default(),
            KeyCode::Char('o'),
            KeyModifiers::NONE,
        );
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::SelectRepository))
        ));
    }

    #[test]
    fn test_gg_sequence_goes_to_top() {
        let mut mw = KeyboardMiddleware::new();
        let state = AppState::default();

        let rx = press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());

        let rx = press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Navigate(NavigationAction::ToTop))
        ));
    }

    #[test]
    fn test_picker_takes_characters_instead_of_commands() {
        let mut mw = KeyboardMiddleware::new();
        let state = picker_state();

        let rx = press(&mut mw, &state, KeyCode::Char('o'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Char('o')))
        ));

        let rx = press(&mut mw, &state, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::ClearLine))
        ));

        let rx = press(&mut mw, &state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Confirm))
        ));
    }

    #[test]
    fn test_escape_depends_on_view() {
        let mut mw = KeyboardMiddleware::new();

        let rx = press(&mut mw, &picker_state(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Escape))
        ));

        let rx = press(&mut mw, &AppState::default(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Close))));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut mw = KeyboardMiddleware::new();
        let rx = press(
            &mut mw,
            &picker_state(),
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        );
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_gated_command_is_dropped() {
        let mut mw = KeyboardMiddleware::new();
        // Down is bound to navigation, which the picker does not accept
        let rx = press(&mut mw, &picker_state(), KeyCode::Down, KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());
    }
}
