//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the current view (pop from stack, quit on the last one)
    Close,
    /// Quit the application
    Quit,
    /// Push a floating view onto the stack
    PushView(Box<dyn View>),
}
