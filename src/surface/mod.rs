pub use chart::*;

use crate::angle::Angle;
use crate::astro_math::{Degrees, Radians};
use crate::errors::Result;
use crate::style::StyleOptions;

mod chart;
mod render;

/// Where `theta = 0` sits on screen
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum CompassPoint {
    North,
    East,
    South,
    West,
}

impl CompassPoint {
    /// Screen angle of this point, counter-clockwise from the positive x axis
    pub fn screen_offset(self) -> Degrees {
        match self {
            CompassPoint::East => 0.,
            CompassPoint::North => 90.,
            CompassPoint::West => 180.,
            CompassPoint::South => 270.,
        }
    }
}

/// Sense in which theta grows on screen
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ThetaDirection {
    CounterClockwise,
    Clockwise,
}

impl ThetaDirection {
    pub fn sign(self) -> f64 {
        match self {
            ThetaDirection::CounterClockwise => 1.,
            ThetaDirection::Clockwise => -1.,
        }
    }
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PolarPoint {
    pub theta: Radians,
    pub r: f64,
}

impl PolarPoint {
    pub fn new(theta: Radians, r: f64) -> Self {
        Self { theta, r }
    }
}

/// A grid line position and the text shown next to it
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// The drawing operations a sky plot needs from a polar plotting surface.
pub trait PolarSurface {
    fn set_theta_zero_location(&mut self, location: CompassPoint);

    fn set_theta_direction(&mut self, direction: ThetaDirection);

    /// Adds one layer of points. An empty slice still adds the layer.
    fn scatter(&mut self, points: &[PolarPoint], style: &StyleOptions) -> Result<()>;

    fn set_rlim(&mut self, min: f64, max: f64) -> Result<()>;

    fn set_grid(&mut self, visible: bool);

    /// Radial grid circles. Labels are drawn along the spoke at `angle`.
    fn set_rgrids(&mut self, radii: &[f64], labels: &[String], angle: Angle) -> Result<()>;

    /// Angular grid spokes, in degrees. Labels sit at `frac` times the outer radius.
    fn set_thetagrids(&mut self, angles: &[Degrees], labels: &[String], frac: f64)
        -> Result<()>;

    /// Pushes the current state to wherever the surface is displayed
    fn redraw(&mut self) -> Result<()>;
}

pub(crate) fn zip_ticks(positions: &[f64], labels: &[String]) -> Result<Vec<Tick>> {
    if positions.len() != labels.len() {
        return Err(crate::errors::Error::InvalidValue(format!(
            "{} tick positions were given {} labels",
            positions.len(),
            labels.len()
        )));
    }
    Ok(positions
        .iter()
        .zip(labels)
        .map(|(&position, label)| Tick {
            position,
            label: label.clone(),
        })
        .collect())
}
