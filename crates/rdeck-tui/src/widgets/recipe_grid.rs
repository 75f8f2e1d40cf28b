//! Responsive grid of recipe cards
//!
//! The column count follows the area width (see [`layout::grid_columns`]).
//! When the rows don't fit, the grid scrolls so the focused card stays on
//! screen.

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use rdeck_core::Recipe;

use super::RecipeCard;
use crate::layout;
use crate::theme::styles;

/// Shown in the grid area when the filtered subset is empty
pub const EMPTY_GRID_MESSAGE: &str = "No recipes to show";

pub struct RecipeGrid<'a> {
    recipes: &'a [&'a Recipe],
    focused: usize,
    show_images: bool,
}

impl<'a> RecipeGrid<'a> {
    pub fn new(recipes: &'a [&'a Recipe], focused: usize) -> Self {
        Self {
            recipes,
            focused,
            show_images: true,
        }
    }

    pub fn show_images(mut self, show_images: bool) -> Self {
        self.show_images = show_images;
        self
    }
}

impl Widget for RecipeGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.recipes.is_empty() {
            Line::styled(EMPTY_GRID_MESSAGE, styles::text_muted())
                .centered()
                .render(Rect { height: 1, ..area }, buf);
            return;
        }

        let columns = layout::grid_columns(area.width);
        let rows_on_screen = layout::visible_rows(area.height);
        let focused_row = self.focused / columns;
        let first_row = layout::first_visible_row(focused_row, rows_on_screen);

        let cells = layout::grid_cells(area, columns, rows_on_screen);
        let first_index = first_row * columns;

        for (cell, (index, recipe)) in cells
            .into_iter()
            .zip(self.recipes.iter().enumerate().skip(first_index))
        {
            RecipeCard::new(recipe)
                .focused(index == self.focused)
                .show_image(self.show_images)
                .render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use rdeck_source::test_utils::sample_recipes;

    #[test]
    fn test_grid_renders_every_card_when_it_fits() {
        let recipes = sample_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        let mut term = TestTerminal::with_size(120, 20);
        let area = term.area();

        term.render_widget(RecipeGrid::new(&refs, 0), area);

        for recipe in &recipes {
            assert!(term.buffer_contains(&recipe.name), "missing {}", recipe.name);
        }
        assert_eq!(term.count_in_area("╭", area), recipes.len());
    }

    #[test]
    fn test_grid_scrolls_to_focused_card() {
        let recipes = sample_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        // 40 columns -> one card per row; 12 rows -> two cards on screen
        let mut term = TestTerminal::with_size(40, 12);
        let area = term.area();

        term.render_widget(RecipeGrid::new(&refs, 4), area);

        assert!(term.buffer_contains("Brownies"));
        assert!(!term.buffer_contains("Fluffy Pancakes"));
    }

    #[test]
    fn test_empty_grid_shows_message_and_no_cards() {
        let mut term = TestTerminal::new();
        let area = term.area();

        term.render_widget(RecipeGrid::new(&[], 0), area);

        assert!(term.buffer_contains(EMPTY_GRID_MESSAGE));
        assert_eq!(term.count_in_area("╭", area), 0);
    }
}
