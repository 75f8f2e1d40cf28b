//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::Frame;

use rdeck_app::state::{AppState, FetchState, Screen, LOADING_MESSAGE};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this writes back render geometry the update loop needs:
/// the grid column count and the detail scroll bounds.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.screen);

    frame.render_widget(
        widgets::MainHeader::new(&state.collection.locator).with_fetch(&state.collection.fetch),
        areas.header,
    );

    match state.screen {
        Screen::Collection => render_collection(frame, &areas, state),
        Screen::Detail => {
            let detail = widgets::RecipeDetail::new().show_image(state.settings.ui.show_images);
            frame.render_stateful_widget(detail, areas.body, &mut state.detail);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);
}

fn render_collection(frame: &mut Frame, areas: &layout::ScreenAreas, state: &mut AppState) {
    state.collection.grid_columns = layout::grid_columns(areas.body.width);

    let collection = &state.collection;
    match &collection.fetch {
        FetchState::Pending => render_message(
            frame,
            areas.body,
            LOADING_MESSAGE,
            styles::text_secondary(),
        ),
        FetchState::Failed { message } => {
            render_message(frame, areas.body, message, styles::status_red())
        }
        FetchState::Ready { .. } => {
            let controls = collection.filter_controls();
            if let Some(filters) = areas.filters {
                frame.render_widget(
                    widgets::FilterBar::new(&controls, &collection.filter),
                    filters,
                );
            }

            let visible = collection.visible();
            let grid = widgets::RecipeGrid::new(&visible, collection.focused)
                .show_images(state.settings.ui.show_images);
            frame.render_widget(grid, areas.body);
        }
    }
}

/// A single centered line at the top of `area`
fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let line = Line::styled(text, style).centered();
    frame.render_widget(line, Rect { height: 1, ..area });
}
