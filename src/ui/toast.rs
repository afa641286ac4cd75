//! Transient notifications shown in the top-right corner.
//!
//! Uploads and other dashboard effects surface here instead of in the views.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Toast severity, which decides color and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
}

impl ToastLevel {
    pub fn color(&self) -> Color {
        match self {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Warning => Color::Yellow,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            ToastLevel::Info => "[i]",
            ToastLevel::Success => "[+]",
            ToastLevel::Warning => "[!]",
        }
    }

    pub fn lifetime(&self) -> Duration {
        match self {
            ToastLevel::Info | ToastLevel::Success => Duration::from_secs(3),
            ToastLevel::Warning => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Queue of visible toasts, newest last.
#[derive(Debug)]
pub struct ToastState {
    pub toasts: VecDeque<Toast>,
    pub max_visible: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_max_visible(3)
    }
}

impl ToastState {
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Show a toast created at `now`, evicting the oldest when full.
    pub fn push_at(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        self.toasts.push_back(Toast {
            message: message.into(),
            level,
            expires_at: now + level.lifetime(),
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.push_at(message, level, Instant::now());
    }

    /// Drop toasts that expired by `now`.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

/// Shorten `text` to `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Render toasts stacked down the top-right corner.
pub fn render_toasts(f: &mut Frame, toast_state: &ToastState) {
    let frame_area = f.size();
    let width = 48u16.min(frame_area.width.saturating_sub(4));
    let height = 3u16;
    let x = frame_area.width.saturating_sub(width + 2);

    for (i, toast) in toast_state.toasts.iter().enumerate() {
        let y = 1 + (i as u16) * height;
        if y + height > frame_area.height {
            break;
        }
        let area = Rect::new(x, y, width, height);
        f.render_widget(Clear, area);

        let color = toast.level.color();
        let prefix = toast.level.prefix();
        let max_len = (width as usize).saturating_sub(prefix.len() + 4);
        let content = Line::from(vec![
            Span::styled(prefix, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(truncate(&toast.message, max_len), Style::default().fg(Color::White)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black));
        f.render_widget(Paragraph::new(content).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_evicted_when_full() {
        let mut state = ToastState::with_max_visible(2);
        state.push("First", ToastLevel::Info);
        state.push("Second", ToastLevel::Success);
        state.push("Third", ToastLevel::Warning);

        assert_eq!(state.len(), 2);
        assert_eq!(state.toasts.front().unwrap().message, "Second");
        assert_eq!(state.toasts.back().unwrap().message, "Third");
    }

    #[test]
    fn tick_expires_by_level_lifetime() {
        let start = Instant::now();
        let mut state = ToastState::default();
        state.push_at("uploaded", ToastLevel::Success, start);
        state.push_at("odd extension", ToastLevel::Warning, start);

        state.tick(start + Duration::from_secs(4));
        assert_eq!(state.len(), 1);
        assert_eq!(state.toasts[0].level, ToastLevel::Warning);

        state.tick(start + Duration::from_secs(5));
        assert!(state.is_empty());
    }

    #[test]
    fn zero_capacity_still_shows_one() {
        let mut state = ToastState::with_max_visible(0);
        state.push("only", ToastLevel::Info);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Uploaded café-notes.pdf", 12), "Uploaded ...");
    }
}
