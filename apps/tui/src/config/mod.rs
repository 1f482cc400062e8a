// Configuration module: dataset locations from environment/.env.

mod config;

pub use config::{debug_enabled, get_data_dir, init_app_config, DataPaths};
