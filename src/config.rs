use crate::astro_math::Degrees;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct SkyPlotConfig {
    pub observation_location: ObservingLocation,
    pub chart: ChartSettings,
    pub plot: PlotDefaults,
}

impl SkyPlotConfig {
    /// Loads a TOML config, writing the defaults out if the file doesn't exist yet
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = confy::load_path(path)?;
        debug!(path = %path.display(), "loaded sky plot config");
        Ok(config)
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        confy::store_path(path, self)?;
        Ok(())
    }
}

/* Location */
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservingLocation {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub elevation: f64,
}

impl Default for ObservingLocation {
    fn default() -> Self {
        Self {
            latitude: 51.47,
            longitude: 0.0,
            elevation: 15.0,
        }
    }
}

/* Chart Output */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    /// Rendered on every redraw. `.svg` selects SVG, anything else PNG
    pub output: Option<PathBuf>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: None,
            output: None,
        }
    }
}

/* Plot Options */
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDefaults {
    pub north_to_east_ccw: bool,
    pub grid: bool,
    pub az_label_offset_deg: Degrees,
}

impl Default for PlotDefaults {
    fn default() -> Self {
        Self {
            north_to_east_ccw: true,
            grid: true,
            az_label_offset_deg: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SkyPlotConfig::default();
        assert_eq!(config.observation_location.latitude, 51.47);
        assert!(config.plot.north_to_east_ccw);
        assert!(config.plot.grid);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.output, None);
    }

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky_plot.toml");

        let mut config = SkyPlotConfig::default();
        config.observation_location.longitude = -17.88;
        config.plot.grid = false;
        config.chart.title = Some("Tonight".to_string());
        config.store(&path).unwrap();

        let loaded = SkyPlotConfig::load(&path).unwrap();
        assert_eq!(loaded.observation_location.longitude, -17.88);
        assert!(!loaded.plot.grid);
        assert_eq!(loaded.chart.title.as_deref(), Some("Tonight"));
    }
}
