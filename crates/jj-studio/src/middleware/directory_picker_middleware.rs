//! Directory Picker Middleware
//!
//! Opens the picker for `SelectRepository` and turns the picker's
//! Confirm/Cancel into exactly one session outcome:
//! `DirectorySelected`, `PickerCancelled` or `PickerFailed`.

use std::fs;
use std::path::Path;

use crate::actions::{Action, DirectoryPickerAction, GlobalAction, SessionAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, PickerConfig};
use crate::views::DirectoryPickerView;

pub struct DirectoryPickerMiddleware;

impl DirectoryPickerMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectoryPickerMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the typed input into the picker's outcome
fn resolve_selection(input: &str, config: &PickerConfig) -> SessionAction {
    let input = input.trim();
    if input.is_empty() {
        return SessionAction::PickerCancelled;
    }

    let path = Path::new(input);
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            return SessionAction::PickerFailed {
                message: format!("Cannot open {}: {}", input, err),
            }
        }
    };
    if config.directory_only && !metadata.is_dir() {
        return SessionAction::PickerFailed {
            message: format!("{} is not a directory", input),
        };
    }

    // Show and validate the absolute path, not whatever was typed
    let path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| input.to_string());
    SessionAction::DirectorySelected { path }
}

impl Middleware for DirectoryPickerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Session(SessionAction::SelectRepository) => {
                log::info!("DirectoryPickerMiddleware: opening picker");
                dispatcher.dispatch(Action::DirectoryPicker(DirectoryPickerAction::Open(
                    PickerConfig::repository(state.config.picker_title.clone()),
                )));
                dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                    DirectoryPickerView::new(),
                ))));
                false
            }

            Action::DirectoryPicker(DirectoryPickerAction::Confirm) => {
                let picker = &state.directory_picker;
                let outcome = resolve_selection(&picker.input, &picker.config);
                log::info!("DirectoryPickerMiddleware: {:?}", outcome);
                dispatcher.dispatch(Action::DirectoryPicker(DirectoryPickerAction::Close));
                if let SessionAction::PickerFailed { message } = &outcome {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        message.clone(),
                        "Open",
                    )));
                }
                dispatcher.dispatch(Action::Session(outcome));
                false
            }

            Action::DirectoryPicker(DirectoryPickerAction::Cancel) => {
                log::info!("DirectoryPickerMiddleware: picker dismissed");
                dispatcher.dispatch(Action::DirectoryPicker(DirectoryPickerAction::Close));
                dispatcher.dispatch(Action::Session(SessionAction::PickerCancelled));
                false
            }

            _ => true,
        }
    }
}
