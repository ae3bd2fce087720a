pub mod color;
pub mod config;
pub mod results;

pub use color::{clean_name, ColorDefinition, HexCode};
pub use config::AppConfig;
pub use results::{FindResult, MatchResult};
