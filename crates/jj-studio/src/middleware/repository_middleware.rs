//! Repository Middleware
//!
//! Runs the backend side of the session:
//! - `DirectorySelected` validates the directory, then loads its changes
//! - `Reload` / `LoadChanges` fetch the change list of a repository
//!
//! Backend calls run on a tokio runtime owned by the middleware. Each call is
//! tagged with a generation; results dispatched back carry it so that, when
//! `discard_stale_results` is enabled, results of superseded calls are dropped
//! before they reach the reducer.

use std::sync::Arc;

use jj_client::{JjBackend, JjCliClient};
use jj_studio_config::AppConfig;
use tokio::runtime::Runtime;

use crate::actions::{Action, SessionAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

const SOURCE_OPEN: &str = "Open";
const SOURCE_LOAD: &str = "Load";

pub struct RepositoryMiddleware {
    runtime: Runtime,
    backend: Arc<dyn JjBackend>,
    /// Generation of the most recently issued backend call
    generation: u64,
}

impl RepositoryMiddleware {
    /// Middleware talking to the `jj` executable named in `config`
    pub fn new(config: &AppConfig) -> Self {
        Self::with_backend(Arc::new(JjCliClient::new(
            config.jj_command.clone(),
            config.change_limit,
        )))
    }

    pub fn with_backend(backend: Arc<dyn JjBackend>) -> Self {
        Self {
            runtime: Runtime::new().expect("Failed to create tokio runtime"),
            backend,
            generation: 0,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether `action` reports on a call that has since been superseded
    fn is_stale(&self, action: &SessionAction) -> bool {
        action
            .generation()
            .is_some_and(|generation| generation != self.generation)
    }

    fn validate(&mut self, path: &str, dispatcher: &Dispatcher) {
        let generation = self.next_generation();
        let path = path.to_string();
        log::info!("RepositoryMiddleware: validating {} (generation {})", path, generation);

        dispatcher.dispatch(Action::Session(SessionAction::ValidationStarted {
            path: path.clone(),
            generation,
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Opening {}", path),
            SOURCE_OPEN,
        )));

        let backend = Arc::clone(&self.backend);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = match backend.validate_repository(&path).await {
                Ok(true) => SessionAction::ValidationSucceeded { path, generation },
                Ok(false) => SessionAction::ValidationRejected { path, generation },
                Err(err) => SessionAction::ValidationFailed {
                    path,
                    generation,
                    message: err.to_string(),
                },
            };
            dispatcher.dispatch(Action::Session(outcome));
        });
    }

    fn load_changes(&mut self, path: &str, dispatcher: &Dispatcher) {
        let generation = self.next_generation();
        let path = path.to_string();
        log::info!("RepositoryMiddleware: loading changes of {} (generation {})", path, generation);

        dispatcher.dispatch(Action::Session(SessionAction::LoadStarted {
            path: path.clone(),
            generation,
        }));

        let backend = Arc::clone(&self.backend);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = match backend.list_changes(&path).await {
                Ok(changes) => SessionAction::Loaded {
                    path,
                    generation,
                    changes,
                },
                Err(err) => SessionAction::LoadFailed {
                    path,
                    generation,
                    message: err.to_string(),
                },
            };
            dispatcher.dispatch(Action::Session(outcome));
        });
    }

    /// Status bar feedback for a completed call
    fn report(action: &SessionAction, dispatcher: &Dispatcher) {
        let status = match action {
            SessionAction::ValidationRejected { path, .. } => {
                StatusBarAction::info(format!("{} is not a JJ repository", path), SOURCE_OPEN)
            }
            SessionAction::ValidationFailed { message, .. } => {
                StatusBarAction::error(message.clone(), SOURCE_OPEN)
            }
            SessionAction::Loaded { changes, .. } => StatusBarAction::success(
                format!("Loaded {} changes", changes.len()),
                SOURCE_LOAD,
            ),
            SessionAction::LoadFailed { message, .. } => {
                StatusBarAction::error(message.clone(), SOURCE_LOAD)
            }
            _ => return,
        };
        dispatcher.dispatch(Action::StatusBar(status));
    }
}

impl Middleware for RepositoryMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Session(session_action) = action else {
            return true;
        };

        match session_action {
            SessionAction::DirectorySelected { path } => {
                self.validate(path, dispatcher);
                false
            }

            SessionAction::Reload => {
                let path = &state.session.repository_path;
                if path.is_empty() {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        "No repository selected",
                        SOURCE_LOAD,
                    )));
                } else {
                    self.load_changes(path, dispatcher);
                }
                false
            }

            SessionAction::LoadChanges { path } => {
                self.load_changes(path, dispatcher);
                false
            }

            completion if completion.is_completion() => {
                if self.is_stale(completion) && state.config.discard_stale_results {
                    log::info!(
                        "RepositoryMiddleware: dropping stale result (generation {:?}, latest {})",
                        completion.generation(),
                        self.generation
                    );
                    return false;
                }

                Self::report(completion, dispatcher);
                if let SessionAction::ValidationSucceeded { path, .. } = completion {
                    dispatcher.dispatch(Action::Session(SessionAction::LoadChanges {
                        path: path.clone(),
                    }));
                }
                true
            }

            _ => true,
        }
    }
}
