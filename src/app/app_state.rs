use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::search::{SearchState, Suggestion};

/// Whether the search input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Elsewhere,
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    /// Latest snapshot published by the search session
    pub search: SearchState,
    /// Index of the highlighted option, if any
    pub highlighted: Option<usize>,
    pub focus: Focus,
    pub(super) should_quit: bool,
}

impl App {
    /// Create a new App with the given input placeholder
    pub fn new(placeholder: &str) -> Self {
        let mut input = TextArea::default();

        // Configure for single-line input
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", placeholder)),
        );
        input.set_placeholder_text(placeholder);

        // Remove default underline from cursor line
        input.set_cursor_line_style(Style::default());

        let mut app = Self {
            input,
            search: SearchState::default(),
            highlighted: None,
            focus: Focus::InputField,
            should_quit: false,
        };
        app.refresh_input_style();
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current raw text in the input
    pub fn text(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        self.highlighted.and_then(|i| self.search.suggestions.get(i))
    }

    /// Mirror a snapshot from the search session
    ///
    /// The highlight is dropped whenever the option list changes.
    pub fn apply_snapshot(&mut self, state: SearchState) {
        if state.suggestions != self.search.suggestions {
            self.highlighted = None;
        }
        self.search = state;
    }

    pub(super) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.refresh_input_style();
    }

    pub(super) fn clear_input(&mut self) {
        self.input.select_all();
        self.input.cut();
        self.highlighted = None;
    }

    fn refresh_input_style(&mut self) {
        let color = match self.focus {
            Focus::InputField => Color::Cyan,
            Focus::Elsewhere => Color::DarkGray,
        };
        if let Some(block) = self.input.block().cloned() {
            self.input.set_block(block.border_style(Style::default().fg(color)));
        }
    }
}
