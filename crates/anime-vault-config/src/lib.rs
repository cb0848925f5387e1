pub mod config;
pub mod paths;

pub use config::{Config, SearchConfig};
pub use paths::{container_base_path, PathManager};
