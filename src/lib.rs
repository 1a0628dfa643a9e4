//! Sky charts for observation planning.
//!
//! [`plot_sky`] asks an [`AltAzProvider`] where a target is at each requested
//! instant and scatters the visible positions onto a [`PolarSurface`], with the
//! zenith at the centre, the horizon at the rim and North at the top.

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod angle;
pub mod astro_math;
pub mod config;
pub mod errors;
pub mod observer;
pub mod sky;
pub mod style;
pub mod surface;
pub mod time;

pub use angle::{Angle, AngleUnit};
pub use config::{ChartSettings, ObservingLocation, PlotDefaults, SkyPlotConfig};
pub use errors::{Error, Result};
pub use observer::{AltAz, AltAzProvider, FixedTarget, Observer, SkyTarget};
pub use sky::{plot_sky, SkyPlotOptions};
pub use style::{Marker, Rgb, StyleOptions};
pub use surface::{CompassPoint, PolarPoint, PolarSurface, SkyChart, ThetaDirection};
pub use time::TimeSamples;
