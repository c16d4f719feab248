pub mod app;
mod context;
mod month_pane;

pub use app::App;
pub use context::{Context, Theme};
pub use month_pane::MonthPane;
