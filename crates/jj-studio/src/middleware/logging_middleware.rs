use crate::actions::{Action, GlobalAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Key presses are logged by the keyboard middleware
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            // Change lists can be large, log their size only
            Action::Session(SessionAction::Loaded {
                path,
                generation,
                changes,
            }) => {
                log::debug!(
                    "Action: Session(Loaded {{ path: {:?}, generation: {}, changes: {} }})",
                    path,
                    generation,
                    changes.len()
                );
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
