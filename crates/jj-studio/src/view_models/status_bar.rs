//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::AppState;
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Icon for the status kind
    pub icon: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05"), empty for the greeting
    pub timestamp: String,
    /// Operation that produced the message
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        match state.status_bar.latest() {
            Some(msg) => Self {
                icon: msg.kind.icon(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default()
                    .fg(theme.status_color(msg.kind))
                    .add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style,
            },
            None => Self {
                icon: "👋",
                message: "Welcome to JJ Studio".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusKind, StatusMessage};

    #[test]
    fn test_greeting_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert_eq!(vm.message, "Welcome to JJ Studio");
        assert!(vm.source.is_empty());
    }

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state
            .status_bar
            .push(StatusMessage::new(StatusKind::Error, "disk error", "Load"));
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "disk error");
        assert_eq!(vm.source, "Load");
        assert_eq!(vm.icon, StatusKind::Error.icon());
    }
}
