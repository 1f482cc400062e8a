use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Resolved locations of the two dataset files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub elections: PathBuf,
    pub income: PathBuf,
}

/// Initializes the application configuration from the environment.
/// Missing variables fall back to the bundled sample data layout.
pub fn init_app_config() -> DataPaths {
    // Load environment variables from .env file
    dotenv().ok();

    let data_dir = get_data_dir();
    let elections =
        env::var("ELECTIONS_FILE").unwrap_or_else(|_| "eleccions-23j-seccions.geojson".to_string());
    let income =
        env::var("INCOME_FILE").unwrap_or_else(|_| "renda-seccions.geojson".to_string());

    DataPaths {
        elections: data_dir.join(elections),
        income: data_dir.join(income),
    }
}

/// Gets the directory holding the GeoJSON datasets.
pub fn get_data_dir() -> PathBuf {
    env::var("DATA_DIR").map_or_else(|_| PathBuf::from("./data"), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| value == "1")
}
