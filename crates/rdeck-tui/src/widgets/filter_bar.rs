//! Filter control bar
//!
//! One control per category label plus the leading `All` control. The active
//! control is drawn inverted; the first nine carry their digit shortcut.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use rdeck_core::CategoryFilter;

use crate::theme::styles;

/// Gap between two controls
const SEPARATOR: &str = " ";

/// Drawn before the first control when earlier ones are scrolled off
const SCROLL_MARKER: &str = "‹";

/// Text of the control at `index`, e.g. `" 1 All "`
pub fn control_text(index: usize, filter: &CategoryFilter) -> String {
    if index < 9 {
        format!(" {} {} ", index + 1, filter.label())
    } else {
        format!(" {} ", filter.label())
    }
}

pub struct FilterBar<'a> {
    controls: &'a [CategoryFilter],
    active: &'a CategoryFilter,
}

impl<'a> FilterBar<'a> {
    pub fn new(controls: &'a [CategoryFilter], active: &'a CategoryFilter) -> Self {
        Self { controls, active }
    }

    /// First control to draw so the active one fits in `width`
    ///
    /// Counts the gaps between drawn controls and, once scrolled, the marker.
    fn first_visible(&self, texts: &[String], width: usize) -> usize {
        let active = self
            .controls
            .iter()
            .position(|c| c == self.active)
            .unwrap_or(0);

        let mut start = 0;
        while start < active {
            let controls: usize = texts[start..=active].iter().map(|t| t.width()).sum();
            let gaps = (active - start) * SEPARATOR.width();
            let marker = if start > 0 { SCROLL_MARKER.width() } else { 0 };
            if controls + gaps + marker <= width {
                break;
            }
            start += 1;
        }
        start
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // No collection, no controls
        if self.controls.is_empty() {
            return;
        }

        let block =
            styles::glass_block(false).title(Span::styled(" Categories ", styles::text_muted()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let texts: Vec<String> = self
            .controls
            .iter()
            .enumerate()
            .map(|(i, c)| control_text(i, c))
            .collect();
        let start = self.first_visible(&texts, usize::from(inner.width));

        let mut spans = Vec::new();
        if start > 0 {
            spans.push(Span::styled(SCROLL_MARKER, styles::text_muted()));
        }
        for (filter, text) in self.controls.iter().zip(texts).skip(start) {
            let style = if filter == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(SEPARATOR));
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
