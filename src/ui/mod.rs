pub mod app;
pub mod colors;

pub use app::TuiApp;
pub use colors::TableColors;
