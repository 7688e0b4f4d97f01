use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::search::Status;

const INPUT_HEIGHT: u16 = 3;
const COLUMN_GAP: usize = 2;
const HIGHLIGHT_SYMBOL: &str = "> ";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let [input_area, options_area, status_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(&self.input, input_area);
        self.render_options(frame, options_area);
        self.render_status(frame, status_area);
    }

    fn render_options(&self, frame: &mut Frame, area: Rect) {
        let suggestions = &self.search.suggestions;
        if suggestions.is_empty() {
            return;
        }

        let label_width = suggestions
            .iter()
            .map(|s| s.label.width())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = suggestions
            .iter()
            .map(|s| {
                let padding = " ".repeat(label_width - s.label.width() + COLUMN_GAP);
                let mut spans = vec![
                    Span::styled(s.label.clone(), Style::default().fg(Color::White)),
                    Span::raw(padding),
                ];
                if let Some(detail) = &s.detail {
                    spans.push(Span::styled(
                        detail.clone(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut state = ListState::default().with_selected(self.highlighted);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = match self.search.status {
            Status::Idle => (String::new(), Style::default()),
            Status::Pending => (
                "Searching…".to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Status::Loaded if self.search.suggestions.is_empty() => (
                "No packages found".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Status::Loaded => (
                format!("{} packages", self.search.suggestions.len()),
                Style::default().fg(Color::DarkGray),
            ),
            Status::Failed => (
                "Search failed, keep typing to retry".to_string(),
                Style::default().fg(Color::Red),
            ),
        };

        let hints = Span::styled(
            "  Enter: open  Tab: blur  Esc: clear/quit",
            Style::default().fg(Color::DarkGray),
        );
        let line = Line::from(vec![Span::styled(text, style), hints]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
