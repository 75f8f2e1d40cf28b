//! Footer status bar
//!
//! Key hints for the current screen on the left; on the collection screen the
//! right side shows how many recipes pass the filter and when they were
//! fetched.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use rdeck_app::{AppState, FetchState, Screen};

use crate::theme::styles;

const COLLECTION_HINTS: &[(&str, &str)] = &[
    ("←↑↓→", "move"),
    ("Tab", "filter"),
    ("Enter", "open"),
    ("r", "reload"),
    ("q", "quit"),
];

const DETAIL_HINTS: &[(&str, &str)] = &[("↑↓", "scroll"), ("PgUp/PgDn", "page"), ("Esc", "back")];

/// `"<shown> of <total> recipes"`
pub fn count_text(shown: usize, total: usize) -> String {
    format!("{shown} of {total} recipes")
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Line<'static> {
        let hints = match self.state.screen {
            Screen::Collection => COLLECTION_HINTS,
            Screen::Detail => DETAIL_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn summary(&self) -> Option<Line<'static>> {
        if self.state.screen != Screen::Collection {
            return None;
        }
        let collection = &self.state.collection;
        match &collection.fetch {
            FetchState::Ready { recipes, fetched_at } => Some(Line::from(vec![
                Span::styled(
                    count_text(collection.visible().len(), recipes.len()),
                    styles::text_secondary(),
                ),
                Span::styled(
                    format!("  {} ", fetched_at.format("%H:%M:%S")),
                    styles::text_muted(),
                ),
            ])),
            _ => None,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_line(area.x, area.y, &self.hints(), area.width);

        if let Some(summary) = self.summary() {
            let width = summary.width() as u16;
            if width < area.width {
                buf.set_line(area.x + area.width - width, area.y, &summary, width);
            }
        }
    }
}
