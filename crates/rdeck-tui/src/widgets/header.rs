//! Header bar widget
//!
//! App title, active locator, and the fetch status dot.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use rdeck_app::FetchState;

use super::text::truncate_with_ellipsis;
use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Recipe Deck";

/// Main header showing the app title and the locator being browsed
pub struct MainHeader<'a> {
    locator: &'a str,
    fetch: Option<&'a FetchState>,
}

impl<'a> MainHeader<'a> {
    pub fn new(locator: &'a str) -> Self {
        Self {
            locator,
            fetch: None,
        }
    }

    /// Show a status dot for the collection fetch
    pub fn with_fetch(mut self, fetch: &'a FetchState) -> Self {
        self.fetch = Some(fetch);
        self
    }

    fn status_dot(&self) -> Span<'static> {
        match self.fetch {
            Some(FetchState::Ready { .. }) => Span::styled("●", styles::accent()),
            Some(FetchState::Failed { .. }) => Span::styled("●", styles::status_red()),
            Some(FetchState::Pending) | None => Span::styled("○", styles::text_muted()),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let prefix = vec![
            Span::raw(" "),
            self.status_dot(),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
        ];
        let prefix_width = Line::from(prefix.clone()).width();
        let room = usize::from(inner.width).saturating_sub(prefix_width + 1);

        let mut spans = prefix;
        spans.push(Span::styled(
            truncate_with_ellipsis(self.locator, room),
            styles::text_secondary(),
        ));

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_locator() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("https://dummyjson.com/recipes"), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, APP_TITLE));
        assert!(term.line_contains(1, "https://dummyjson.com/recipes"));
    }

    #[test]
    fn test_header_truncates_long_locator() {
        let mut term = TestTerminal::compact();
        let locator = "https://example.com/a/very/long/path/to/a/recipe/collection.json";
        term.render_widget(MainHeader::new(locator), Rect::new(0, 0, 40, 3));

        assert!(term.line_contains(1, "…"));
        assert!(!term.buffer_contains("collection.json"));
    }

    #[test]
    fn test_header_status_dot_reflects_failure() {
        let failed = FetchState::Failed {
            message: "x".to_string(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(
            MainHeader::new("recipes.json").with_fetch(&failed),
            Rect::new(0, 0, 80, 3),
        );

        assert_eq!(term.cell_at(2, 1), Some("●"));
    }
}
