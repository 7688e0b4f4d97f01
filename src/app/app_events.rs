use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::search::UiEvent;

impl App {
    /// Handle a terminal event, returning the surface event it produces
    pub fn handle_terminal_event(&mut self, event: Event) -> Option<UiEvent> {
        match event {
            // Only key presses; releases and repeats would double-type
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            _ => None,
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<UiEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if key.code == KeyCode::Tab {
            return self.toggle_focus();
        }

        if self.focus == Focus::Elsewhere {
            // Typing anywhere brings focus back to the input
            self.set_focus(Focus::InputField);
        }

        match key.code {
            KeyCode::Esc => self.handle_escape(),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Down => self.move_highlight(1),
            KeyCode::Up => self.move_highlight(-1),
            _ => self.edit_input(key),
        }
    }

    fn toggle_focus(&mut self) -> Option<UiEvent> {
        match self.focus {
            Focus::InputField => {
                self.set_focus(Focus::Elsewhere);
                Some(UiEvent::blurred())
            }
            Focus::Elsewhere => {
                self.set_focus(Focus::InputField);
                None
            }
        }
    }

    /// Esc clears a non-empty input, and quits from an empty one
    fn handle_escape(&mut self) -> Option<UiEvent> {
        if self.text().is_empty() {
            self.should_quit = true;
            return None;
        }
        self.clear_input();
        Some(UiEvent::cleared())
    }

    fn select_highlighted(&mut self) -> Option<UiEvent> {
        let id = self.highlighted_suggestion()?.id.clone();
        self.clear_input();
        Some(UiEvent::selected(id))
    }

    fn move_highlight(&mut self, delta: isize) -> Option<UiEvent> {
        let count = self.search.suggestions.len();
        if count == 0 {
            return None;
        }

        let next = match self.highlighted {
            None if delta > 0 => 0,
            None => count - 1,
            Some(current) => (current as isize + delta).rem_euclid(count as isize) as usize,
        };
        self.highlighted = Some(next);

        let label = self.search.suggestions[next].label.clone();
        Some(UiEvent::navigated(label))
    }

    /// Forward the key to the text input; report only actual text changes
    fn edit_input(&mut self, key: KeyEvent) -> Option<UiEvent> {
        let before = self.text().to_string();
        self.input.input(key);
        let after = self.text();

        if after == before {
            return None;
        }
        Some(UiEvent::typed(after))
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
