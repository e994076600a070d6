//! Session view
//!
//! Base view of the stack: header, the current session screen and the status bar.

use crate::actions::{Action, ChangeListAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{
    ChangeEntryViewModel, SessionHeaderViewModel, SessionViewMode, StatusBarViewModel,
};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SessionView;

impl SessionView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SessionView {
    fn view_id(&self) -> ViewId {
        ViewId::Session
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => ChangeListAction::NavigateNext,
            NavigationAction::Previous => ChangeListAction::NavigatePrevious,
            NavigationAction::ToTop => ChangeListAction::NavigateToTop,
            NavigationAction::ToBottom => ChangeListAction::NavigateToBottom,
        };
        Some(Action::ChangeList(action))
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Session screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(&SessionHeaderViewModel::from_state(state), &state.theme, chunks[0], f);

    let theme = &state.theme;
    match SessionViewMode::from_session(&state.session, &state.config.timestamp_format) {
        SessionViewMode::Welcome => render_welcome(state, chunks[1], f),
        SessionViewMode::Loading => render_message(
            theme,
            "Loading...",
            vec![Line::styled("⏳ Loading...", theme.warning())],
            chunks[1],
            f,
        ),
        SessionViewMode::Error { message } => render_message(
            theme,
            "Error",
            vec![Line::styled(message, theme.error())],
            chunks[1],
            f,
        ),
        SessionViewMode::ChangesLoaded { entries } => {
            render_changes(&entries, state.change_list.selected, theme, chunks[1], f)
        }
        SessionViewMode::EmptyRepository => render_message(
            theme,
            "Changes",
            vec![Line::styled("No changes found in this repository", theme.muted())],
            chunks[1],
            f,
        ),
    }

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[2]);
}

fn render_header(vm: &SessionHeaderViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut left = vec![Span::styled(format!(" {} ", vm.title), theme.panel_title())];
    if let Some(path) = &vm.repository_path {
        left.push(Span::styled(path.clone(), theme.text()));
    }

    let mut right = vec![
        Span::styled(vm.select_hint.clone(), theme.key_hint()),
        Span::styled(format!(" {} ", vm.select_label), theme.key_description()),
    ];
    if let Some(hint) = &vm.reload_hint {
        right.push(Span::styled(format!(" {}", hint), theme.key_hint()));
        right.push(Span::styled(" Reload ", theme.key_description()));
    }

    let block = Block::default().style(theme.panel_background());
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(Line::from(left)), area);
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}

fn render_welcome(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let hint = SessionHeaderViewModel::from_state(state).select_hint;
    let lines = vec![
        Line::styled("Welcome to JJ Studio", theme.panel_title()),
        Line::default(),
        Line::styled("Select a Jujutsu repository to browse its changes.", theme.text()),
        Line::from(vec![
            Span::styled("Press ", theme.muted()),
            Span::styled(hint, theme.key_hint()),
            Span::styled(" to Select Repository", theme.muted()),
        ]),
    ];
    render_message(theme, "Welcome", lines, area, f);
}

fn render_message(theme: &Theme, title: &str, lines: Vec<Line>, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(format!(" {} ", title))
        .title_style(theme.panel_title());

    // Vertically center the content inside the border
    let inner_height = area.height.saturating_sub(2);
    let padding = inner_height.saturating_sub(lines.len() as u16) / 2;
    let mut text = vec![Line::default(); usize::from(padding)];
    text.extend(lines);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_changes(
    entries: &[ChangeEntryViewModel],
    selected: usize,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let description = if entry.description.is_empty() {
                Span::styled("(no description)", theme.muted())
            } else {
                Span::styled(entry.description.clone(), theme.text())
            };
            let details = Line::from(vec![
                Span::raw("  "),
                Span::styled(entry.change_id.clone(), theme.change_id()),
                Span::raw(" "),
                Span::styled(entry.commit_id.clone(), theme.commit_id()),
                Span::styled(format!("  {}  ", entry.author), theme.key_description()),
                Span::styled(entry.timestamp.clone(), theme.muted()),
            ]);
            ListItem::new(vec![Line::from(description), details])
        })
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(format!(" Changes ({}) ", entries.len()))
        .title_style(theme.panel_title());

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(entries.len().saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut list_state);
}
