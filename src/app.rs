use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::key::KeyInput;
use crate::location::History;
use crate::navigator::{KeyHandleResult, ShortcutNavigator};
use crate::pages::Page;
use crate::scheduler::TimerQueue;
use crate::toast::Toast;

/// Per-page state. Replaced wholesale on navigation.
pub struct Document {
    pub toast: Toast,
    pub timers: TimerQueue,
    loaded_at: Instant,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            toast: Toast::new(),
            timers: TimerQueue::new(),
            loaded_at: Instant::now(),
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub help_visible: bool,
    pub navigator: ShortcutNavigator,
    pub history: History,
    pub document: Document,
}

impl App {
    pub fn new(start: impl Into<String>) -> Self {
        let history = History::new(start);
        info!(location = history.current(), "page loaded");
        Self {
            should_quit: false,
            help_visible: false,
            navigator: ShortcutNavigator::default(),
            history,
            document: Document::default(),
        }
    }

    pub fn page(&self) -> Page<'_> {
        Page::resolve(self.history.current())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let input = KeyInput::from(key);
        let result = self.navigator.handle_keydown(
            &input,
            &mut self.document.toast,
            &mut self.document.timers,
        );
        if result == KeyHandleResult::Consumed {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            // Some terminals report `?` as the unshifted key plus Shift
            KeyCode::Char(c) if c == '?' || (c == '/' && input.shift) => {
                self.help_visible = !self.help_visible;
            }
            _ => {}
        }
    }

    /// Called once the page has been laid out for drawing.
    pub fn on_layout(&mut self) {
        self.document.toast.attach();
    }

    pub fn tick(&mut self) {
        let elapsed = self.document.loaded_at.elapsed();
        self.run_timers_until(elapsed);
    }

    /// Fire every timer due by `elapsed` (measured from page load), then load
    /// whatever page they asked for.
    pub fn run_timers_until(&mut self, elapsed: Duration) {
        for action in self.document.timers.advance_to(elapsed) {
            self.navigator
                .dispatch(action, &mut self.document.toast, &mut self.history);
        }

        if let Some(location) = self.history.commit() {
            info!(%location, "page loaded");
            self.document = Document::default();
        }
    }
}
