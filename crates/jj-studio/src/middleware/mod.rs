use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod directory_picker_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod repository_middleware;
pub mod text_input_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so backend calls and file
/// system checks never block the render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `state`: read-only snapshot taken before the action
    /// - `dispatcher`: actions dispatched here re-enter the chain from the start
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
