use super::{zip_ticks, CompassPoint, PolarPoint, PolarSurface, ThetaDirection, Tick};
use crate::angle::Angle;
use crate::astro_math::{deg_to_rad, Degrees};
use crate::config::ChartSettings;
use crate::errors::{Error, Result};
use crate::style::{ResolvedStyle, StyleOptions};
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One `scatter` call's worth of points
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayer {
    pub points: Vec<PolarPoint>,
    pub style: ResolvedStyle,
}

/// A polar chart that keeps everything drawn on it, so it can be re-rendered
/// to any plotters backend and overlaid by later calls.
#[derive(Debug, Clone)]
pub struct SkyChart {
    pub(super) settings: ChartSettings,
    pub(super) theta_zero: CompassPoint,
    pub(super) theta_direction: ThetaDirection,
    pub(super) rlim: Option<(f64, f64)>,
    pub(super) grid: bool,
    pub(super) rgrids: Vec<Tick>,
    pub(super) rgrid_angle: Degrees,
    pub(super) thetagrids: Vec<Tick>,
    pub(super) theta_label_frac: f64,
    pub(super) layers: Vec<ScatterLayer>,
    redraws: usize,
}

impl Default for SkyChart {
    fn default() -> Self {
        Self::from_settings(&ChartSettings::default())
    }
}

impl SkyChart {
    pub fn from_settings(settings: &ChartSettings) -> Self {
        let thetagrids = (0..8)
            .map(|i| {
                let position = i as f64 * 45.;
                Tick {
                    position,
                    label: format!("{}\u{b0}", position),
                }
            })
            .collect();
        Self {
            settings: settings.clone(),
            theta_zero: CompassPoint::East,
            theta_direction: ThetaDirection::CounterClockwise,
            rlim: None,
            grid: true,
            rgrids: Vec::new(),
            rgrid_angle: 22.5,
            thetagrids,
            theta_label_frac: 1.1,
            layers: Vec::new(),
            redraws: 0,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn theta_zero_location(&self) -> CompassPoint {
        self.theta_zero
    }

    pub fn theta_direction(&self) -> ThetaDirection {
        self.theta_direction
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn layers(&self) -> &[ScatterLayer] {
        &self.layers
    }

    pub fn rgrids(&self) -> &[Tick] {
        &self.rgrids
    }

    pub fn rgrid_angle(&self) -> Degrees {
        self.rgrid_angle
    }

    pub fn thetagrids(&self) -> &[Tick] {
        &self.thetagrids
    }

    /// How many times the chart has been redrawn
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Explicit limits, or 0 to the largest plotted radius
    pub fn rlim(&self) -> (f64, f64) {
        self.rlim.unwrap_or_else(|| {
            let max = self
                .layers
                .iter()
                .flat_map(|l| l.points.iter().map(|p| p.r))
                .fold(0., f64::max);
            (0., if max > 0. { max } else { 1. })
        })
    }

    /// Counter-clockwise screen angle of a data angle, in radians
    pub fn screen_angle(&self, theta: f64) -> f64 {
        deg_to_rad(self.theta_zero.screen_offset()) + self.theta_direction.sign() * theta
    }

    /// Pixel offset from the chart centre, y growing downwards
    pub fn screen_offset(&self, point: PolarPoint, radius_px: f64) -> (f64, f64) {
        let (min, max) = self.rlim();
        let distance = (point.r - min) / (max - min) * radius_px;
        let angle = self.screen_angle(point.theta);
        (distance * angle.cos(), -distance * angle.sin())
    }

    /// Renders once to `path`, PNG unless the extension is `svg`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let size = (self.settings.width, self.settings.height);
        let is_svg = path
            .extension()
            .map_or(false, |e| e.eq_ignore_ascii_case("svg"));

        if is_svg {
            let root = SVGBackend::new(path, size).into_drawing_area();
            self.render(&root)?;
            root.present().map_err(Error::drawing)?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            self.render(&root)?;
            root.present().map_err(Error::drawing)?;
        }
        debug!(path = %path.display(), layers = self.layers.len(), "sky chart saved");
        Ok(())
    }

    pub fn render_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.settings.width, self.settings.height))
                    .into_drawing_area();
            self.render(&root)?;
            root.present().map_err(Error::drawing)?;
        }
        Ok(svg)
    }
}

impl PolarSurface for SkyChart {
    fn set_theta_zero_location(&mut self, location: CompassPoint) {
        self.theta_zero = location;
    }

    fn set_theta_direction(&mut self, direction: ThetaDirection) {
        self.theta_direction = direction;
    }

    fn scatter(&mut self, points: &[PolarPoint], style: &StyleOptions) -> Result<()> {
        if let Some(p) = points.iter().find(|p| !p.theta.is_finite() || !p.r.is_finite()) {
            return Err(Error::InvalidValue(format!(
                "Cannot plot non-finite point ({}, {})",
                p.theta, p.r
            )));
        }
        let style = style.resolve(self.layers.len());
        self.layers.push(ScatterLayer {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn set_rlim(&mut self, min: f64, max: f64) -> Result<()> {
        if !(min.is_finite() && max.is_finite()) || min == max {
            return Err(Error::InvalidValue(format!(
                "Radial limits ({}, {}) are not usable",
                min, max
            )));
        }
        self.rlim = Some((min, max));
        Ok(())
    }

    fn set_grid(&mut self, visible: bool) {
        self.grid = visible;
    }

    fn set_rgrids(&mut self, radii: &[f64], labels: &[String], angle: Angle) -> Result<()> {
        self.rgrids = zip_ticks(radii, labels)?;
        self.rgrid_angle = angle.to_degrees();
        Ok(())
    }

    fn set_thetagrids(&mut self, angles: &[Degrees], labels: &[String], frac: f64) -> Result<()> {
        self.thetagrids = zip_ticks(angles, labels)?;
        self.theta_label_frac = frac;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.redraws += 1;
        if let Some(output) = self.settings.output.clone() {
            self.save(output)?;
        }
        Ok(())
    }
}
