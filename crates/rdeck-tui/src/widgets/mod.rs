//! Custom widget components

mod filter_bar;
mod header;
mod recipe_card;
mod recipe_detail;
mod recipe_grid;
mod status_bar;
pub mod text;

pub use filter_bar::{control_text, FilterBar};
pub use header::{MainHeader, APP_TITLE};
pub use recipe_card::RecipeCard;
pub use recipe_detail::{detail_lines, RecipeDetail};
pub use recipe_grid::{RecipeGrid, EMPTY_GRID_MESSAGE};
pub use status_bar::{count_text, StatusBar};
