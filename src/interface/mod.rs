pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_menu_csv, write_week_csv};
pub use prompts::prompt_suggestion;
pub use render::{display_exact, display_festival_menu, display_search, display_week_plan};
