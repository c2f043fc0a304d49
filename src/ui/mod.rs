//! Terminal UI: the driver loop that owns the game and saves it after every
//! change, and the view that renders it.

mod app;
mod game_view;

pub use app::App;
