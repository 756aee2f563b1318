use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::client::TitleSource;
use crate::controller::SearchController;
use crate::ui;

/// Terminal application wrapping a [`SearchController`].
pub struct App<S> {
    controller: SearchController<S>,
    spinner_frame: usize,
    should_quit: bool,
}

impl<S> App<S>
where
    S: TitleSource + 'static,
{
    pub fn new(source: Arc<S>, debounce: Duration) -> Self {
        Self {
            controller: SearchController::new(source, debounce),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SearchController<S> {
        &self.controller
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.controller.retry(),
                KeyCode::Char('u') => self.controller.clear(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.controller.push_char(c),
            KeyCode::Backspace => self.controller.pop_char(),
            _ => {}
        }
    }

    pub fn tick(&mut self) {
        self.controller.drain_events();
        if self.controller.view().is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        ui::render(frame, self.controller.view(), self.spinner_frame);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
