//! Summary card for one recipe in the collection grid

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use rdeck_core::facts::rating_badge;
use rdeck_core::Recipe;

use super::text::truncate_with_ellipsis;
use crate::theme::styles;

pub struct RecipeCard<'a> {
    recipe: &'a Recipe,
    focused: bool,
    show_image: bool,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            focused: false,
            show_image: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_image(mut self, show_image: bool) -> Self {
        self.show_image = show_image;
        self
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let recipe = self.recipe;
        let name_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::title()
        };
        let mut lines = vec![Line::from(Span::styled(
            truncate_with_ellipsis(&recipe.name, width),
            name_style,
        ))];

        lines.push(if recipe.categories.is_empty() {
            Line::from(Span::styled("Uncategorized", styles::text_muted()))
        } else {
            Line::from(Span::styled(
                truncate_with_ellipsis(&recipe.categories.join(" · "), width),
                styles::category(),
            ))
        });

        let mut meta = Vec::new();
        if let Some(badge) = rating_badge(recipe.rating) {
            meta.push(Span::styled(badge, styles::rating()));
        }
        if let Some(cuisine) = recipe.cuisine.as_deref().filter(|c| !c.trim().is_empty()) {
            meta.push(Span::styled(cuisine.to_string(), styles::text_secondary()));
        }
        if let Some(total) = recipe.total_time_minutes() {
            meta.push(Span::styled(format!("{total} min"), styles::text_muted()));
        }
        let meta = intersperse(meta, || Span::raw("  "));
        lines.push(Line::from(meta));

        if self.show_image && !recipe.image.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(&recipe.image, width),
                styles::link(),
            )));
        }

        lines
    }
}

fn intersperse<T>(items: Vec<T>, sep: impl Fn() -> T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(sep());
        }
        out.push(item);
    }
    out
}

impl Widget for RecipeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = usize::from(inner.width);
        for (row, line) in self.lines(width).iter().enumerate().take(usize::from(inner.height)) {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}
