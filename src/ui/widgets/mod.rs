//! Reusable UI widgets

mod blueprint;
mod help_panel;
mod status_bar;

pub use blueprint::render_cell_blueprint;
pub use help_panel::render_help_panel;
pub use status_bar::render_status_bar;
