pub mod cli;
pub mod logging;

pub use logging::{init_logging, parse_level, select_level};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
