//! Detail view for a single recipe
//!
//! Every optional attribute is shown either with its value or with the
//! fallback text from [`RecipeFacts`]. The record comes from [`DetailState`];
//! the render pass writes the scroll bounds back into it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use rdeck_app::state::NOT_FOUND_MESSAGE;
use rdeck_app::DetailState;
use rdeck_core::{Recipe, RecipeFacts};

use super::text::wrap_words;
use crate::theme::styles;

/// Column width of the field labels
const LABEL_WIDTH: usize = 13;

pub struct RecipeDetail {
    show_image: bool,
}

impl RecipeDetail {
    pub fn new() -> Self {
        Self { show_image: true }
    }

    pub fn show_image(mut self, show_image: bool) -> Self {
        self.show_image = show_image;
        self
    }
}

/// A `label  value` row
fn field<'a>(label: &'a str, value: String, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), styles::text_muted()),
        Span::styled(value, value_style),
    ])
}

/// List item with a marker and a hanging indent for wrapped lines
fn list_item(marker: String, text: &str, width: usize) -> Vec<Line<'static>> {
    let indent = marker.chars().count();
    wrap_words(text, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let lead = if i == 0 {
                Span::styled(marker.clone(), styles::accent())
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(chunk, styles::text_primary())])
        })
        .collect()
}

/// Full body of the detail view for `recipe`, wrapped to `width`
pub fn detail_lines(recipe: &Recipe, width: usize, show_image: bool) -> Vec<Line<'_>> {
    let facts = RecipeFacts::from_recipe(recipe);
    let mut lines: Vec<Line> = wrap_words(facts.name, width)
        .into_iter()
        .map(|l| Line::styled(l, styles::title()))
        .collect();

    if show_image && !facts.image.is_empty() {
        lines.push(Line::styled(facts.image, styles::link()));
    }
    lines.push(Line::default());

    lines.push(field("Rating", facts.rating, styles::rating()));
    lines.push(field("Difficulty", facts.difficulty, styles::text_primary()));
    lines.push(field("Cuisine", facts.cuisine, styles::text_primary()));
    lines.push(field("Servings", facts.servings, styles::text_primary()));
    lines.push(field("Prep time", facts.prep_time, styles::text_primary()));
    lines.push(field("Cook time", facts.cook_time, styles::text_primary()));
    lines.push(field("Calories", facts.calories, styles::text_primary()));
    if !recipe.categories.is_empty() {
        lines.push(field("Meal type", recipe.categories.join(", "), styles::category()));
    }
    if let Some(tags) = recipe.tags.as_deref().filter(|t| !t.is_empty()) {
        lines.push(field("Tags", tags.join(", "), styles::text_secondary()));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Ingredients", styles::heading()));
    for ingredient in facts.ingredients {
        lines.extend(list_item("  • ".to_string(), ingredient, width));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Instructions", styles::heading()));
    for (i, step) in facts.instructions.iter().enumerate() {
        lines.extend(list_item(format!("  {}. ", i + 1), step, width));
    }

    lines
}

impl Default for RecipeDetail {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for RecipeDetail {
    type State = DetailState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DetailState) {
        let Some(recipe) = state.recipe.as_ref() else {
            state.max_scroll = 0;
            state.scroll = 0;
            Line::styled(NOT_FOUND_MESSAGE, styles::status_red())
                .centered()
                .render(Rect { height: 1, ..area }, buf);
            return;
        };

        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        // Leave the last column for the scrollbar
        let text_area = Rect {
            width: inner.width - 1,
            ..inner
        };
        let lines = detail_lines(recipe, usize::from(text_area.width), self.show_image);
        let total = lines.len();

        state.viewport_height = text_area.height;
        state.max_scroll = u16::try_from(total.saturating_sub(usize::from(text_area.height)))
            .unwrap_or(u16::MAX);
        state.scroll = state.scroll.min(state.max_scroll);

        Paragraph::new(lines)
            .scroll((state.scroll, 0))
            .render(text_area, buf);

        if state.max_scroll > 0 {
            let mut scrollbar_state =
                ScrollbarState::new(usize::from(state.max_scroll)).position(usize::from(state.scroll));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .render(inner, buf, &mut scrollbar_state);
        }
    }
}
