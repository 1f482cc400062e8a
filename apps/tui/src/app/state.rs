use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::init_app_config;
use crate::domain::Dataset;
use crate::geocoder::Geocoder;
use crate::map::feature::{Feature, FeatureCollection, ScreenPoint};
use crate::map::memory::VectorMap;

pub struct App {
    pub running: bool,
    pub dataset: Dataset,
    pub map: VectorMap,
    pub geocoder: Geocoder,
    /// Inspection crosshair, viewport cells.
    pub cursor: ScreenPoint,
    pub status_message: String,
    pub show_help: bool,
    pub searching: bool,
    pub search_input: String,
    pub filter_index: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            dataset: Dataset::Eleccions,
            map: VectorMap::new(),
            geocoder: Geocoder::new(),
            cursor: ScreenPoint::new(40.0, 12.0),
            status_message: String::new(),
            show_help: false,
            searching: false,
            search_input: String::new(),
            filter_index: 0,
        }
    }

    /// Loads the configured GeoJSON datasets into the map. A missing
    /// income file only disables that view; without any dataset the app
    /// cannot start.
    pub fn initialize_data(&mut self) -> Result<()> {
        let paths = init_app_config();

        for (dataset, path) in [
            (Dataset::Eleccions, &paths.elections),
            (Dataset::Renda, &paths.income),
        ] {
            match load_features(path) {
                Ok(features) => {
                    self.map
                        .add_base_layer(dataset.layer(), features)
                        .wrap_err_with(|| format!("registering layer {}", dataset.layer()))?;
                }
                Err(e) => {
                    // Log-only: the view is simply disabled.
                    eprintln!("Dataset '{}' unavailable: {e}", dataset.as_str());
                }
            }
        }

        if !self.dataset_loaded(self.dataset) {
            if self.dataset_loaded(self.dataset.other()) {
                self.dataset = self.dataset.other();
            } else {
                return Err(color_eyre::eyre::eyre!(
                    "no dataset could be loaded from {}",
                    paths.elections.parent().unwrap_or(Path::new(".")).display()
                ));
            }
        }

        self.map.fit_bounds(self.dataset.layer());
        // Initial filter state, reapplied idempotently on every init.
        self.apply_filter("all");
        Ok(())
    }

    pub fn dataset_loaded(&self, dataset: Dataset) -> bool {
        self.map.has_base_layer(dataset.layer())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn load_features(path: &Path) -> Result<Vec<Feature>> {
    let file = File::open(path).wrap_err_with(|| format!("opening {}", path.display()))?;
    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("parsing {}", path.display()))?;
    Ok(collection.features)
}
