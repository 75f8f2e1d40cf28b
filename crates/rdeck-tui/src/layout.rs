//! Screen layout definitions for the TUI
//!
//! Provides the main screen split and the responsive card grid geometry.

use ratatui::layout::{Constraint, Layout, Rect};

use rdeck_app::Screen;

/// Height of one recipe card including its border
pub const CARD_HEIGHT: u16 = 6;

/// Content widths at which the grid gains a column
const COLUMN_BREAKPOINTS: [u16; 4] = [60, 90, 120, 170];

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with the active locator
    pub header: Rect,

    /// Filter controls; only present on the collection screen
    pub filters: Option<Rect>,

    /// Card grid or detail body
    pub body: Rect,

    /// Key hints and counts
    pub footer: Rect,
}

/// Create the main screen layout for the given screen
pub fn create(area: Rect, screen: Screen) -> ScreenAreas {
    match screen {
        Screen::Collection => {
            let [header, filters, body, footer] = Layout::vertical([
                Constraint::Length(3), // Header (glass container)
                Constraint::Length(3), // Filter bar (glass container)
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

            ScreenAreas {
                header,
                filters: Some(filters),
                body,
                footer,
            }
        }
        Screen::Detail => {
            let [header, body, footer] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

            ScreenAreas {
                header,
                filters: None,
                body,
                footer,
            }
        }
    }
}

/// Number of grid columns for a content width
pub fn grid_columns(width: u16) -> usize {
    COLUMN_BREAKPOINTS
        .iter()
        .take_while(|&&bp| width >= bp)
        .count()
        + 1
}

/// Number of full card rows that fit in `height` (at least one)
pub fn visible_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// First grid row to draw so that `focused_row` stays on screen
pub fn first_visible_row(focused_row: usize, visible_rows: usize) -> usize {
    (focused_row + 1).saturating_sub(visible_rows.max(1))
}

/// Split `area` into `rows x columns` card cells, row-major
pub fn grid_cells(area: Rect, columns: usize, rows: usize) -> Vec<Rect> {
    let columns = columns.max(1) as u32;
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns); columns as usize])
                .split(*row)
                .to_vec()
        })
        .collect()
}
