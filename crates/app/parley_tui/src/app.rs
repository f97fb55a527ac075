use parley_client::ChatSession;
use ratatui::layout::Rect;

use crate::ui;

/// Transcript scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    /// Stay pinned to the newest message.
    Follow,
    /// Fixed offset in wrapped lines from the top.
    At(u16),
}

pub struct App {
    pub session: ChatSession,
    /// Proxy the session talks to, shown in the title.
    pub server: String,
    pub scroll: Scroll,
    /// Area of the last drawn frame, for hit-testing and scroll bounds.
    pub viewport: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: ChatSession, server: impl Into<String>) -> Self {
        Self {
            session,
            server: server.into(),
            scroll: Scroll::Follow,
            viewport: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    fn max_scroll(&self) -> u16 {
        let inner = ui::inner(ui::layout(self.viewport).transcript);
        ui::transcript_height(self.session.widget(), inner.width).saturating_sub(inner.height)
    }

    /// Offset the transcript is drawn at.
    pub fn scroll_offset(&self) -> u16 {
        let max = self.max_scroll();
        match self.scroll {
            Scroll::Follow => max,
            Scroll::At(offset) => offset.min(max),
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = Scroll::At(self.scroll_offset().saturating_sub(lines));
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let next = self.scroll_offset().saturating_add(lines);
        self.scroll = if next >= self.max_scroll() {
            Scroll::Follow
        } else {
            Scroll::At(next)
        };
    }

    pub fn submit(&mut self) {
        if self.session.submit().is_some() {
            self.scroll = Scroll::Follow;
        }
    }
}
