//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into view-specific actions
//! using the active view's translate_text_input method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::TextInput(input) = action else {
            return true;
        };

        match state
            .active_view()
            .and_then(|view| view.translate_text_input(input.clone()))
        {
            Some(translated) => {
                log::debug!("TextInputMiddleware: {:?} -> {:?}", input, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("TextInput action not handled by active view: {:?}", input),
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{DirectoryPickerAction, GlobalAction, TextInputAction};
    use crate::reducers::app_reducer::reduce;
    use crate::views::DirectoryPickerView;
    use std::sync::mpsc;

    #[test]
    fn test_picker_receives_typed_characters() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::PushView(Box::new(DirectoryPickerView::new()))),
        );

        let forwarded = TextInputMiddleware::new().handle(
            &Action::TextInput(TextInputAction::Char('x')),
            &state,
            &dispatcher,
        );

        assert!(!forwarded);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::DirectoryPicker(DirectoryPickerAction::Char('x')))
        ));
    }

    #[test]
    fn test_text_input_without_taker_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let forwarded = TextInputMiddleware::new().handle(
            &Action::TextInput(TextInputAction::Char('x')),
            &AppState::default(),
            &Dispatcher::new(tx),
        );
        assert!(!forwarded);
        assert!(rx.try_recv().is_err());
    }
}
