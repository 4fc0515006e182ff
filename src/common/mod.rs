pub mod logging;
pub mod progress;
pub mod utils;

pub use logging::*;
pub use progress::create_count_progress_bar;
pub use utils::*;
