//! Directory Picker View
//!
//! Floating path-entry popup used to choose a repository directory.

use crate::actions::{Action, DirectoryPickerAction, GlobalAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, DirectoryPickerState};
use crate::theme::Theme;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct DirectoryPickerView;

impl DirectoryPickerView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectoryPickerView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DirectoryPickerView {
    fn view_id(&self) -> ViewId {
        ViewId::DirectoryPicker
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.directory_picker, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => DirectoryPickerAction::Char(c),
            TextInputAction::Backspace => DirectoryPickerAction::Backspace,
            TextInputAction::ClearLine => DirectoryPickerAction::ClearInput,
            TextInputAction::Escape => DirectoryPickerAction::Cancel,
            TextInputAction::Confirm => DirectoryPickerAction::Confirm,
        };
        Some(Action::DirectoryPicker(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        // Session commands must not fire while a path is being typed
        matches!(
            action,
            Action::DirectoryPicker(_) | Action::TextInput(_) | Action::Global(GlobalAction::Quit)
        )
    }
}

/// Render the picker as a centered floating window over a dimmed screen
fn render(picker: &DirectoryPickerState, theme: &Theme, area: Rect, f: &mut Frame) {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_width = (area.width * 60 / 100).clamp(40.min(area.width), 90.min(area.width));
    let popup_height = 7.min(area.height);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" open  ", theme.muted()),
        Span::styled("Ctrl+U", theme.key_hint()),
        Span::styled(" clear  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", picker.config.title))
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Path field
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::styled(
            picker.config.prompt(),
            theme.key_description(),
        )),
        chunks[0],
    );

    // Keep the end of long paths visible
    let field_width = usize::from(chunks[2].width.saturating_sub(3));
    let input_len = picker.input.chars().count();
    let visible: String = picker
        .input
        .chars()
        .skip(input_len.saturating_sub(field_width))
        .collect();

    let field = Line::from(vec![
        Span::styled("> ", theme.key_hint()),
        Span::styled(visible, theme.text()),
        Span::styled("█", theme.key_hint().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    f.render_widget(Paragraph::new(field), chunks[2]);
}
