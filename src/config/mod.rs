//! Project configuration loaded from `.complexity.toml`.

mod core;
mod loader;

pub use self::core::ProjectConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
