//! Sky charts: where a target sits in the local sky over one or more instants,
//! drawn as a polar plot with the zenith at the centre and the horizon at the rim.

use crate::angle::Angle;
use crate::astro_math::Degrees;
use crate::config::PlotDefaults;
use crate::errors::{Error, Result};
use crate::observer::{AltAz, AltAzProvider, SkyTarget};
use crate::style::StyleOptions;
use crate::surface::{CompassPoint, PolarPoint, PolarSurface, ThetaDirection};
use crate::time::TimeSamples;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Radius of the horizon; the zenith sits at 1 so it isn't a degenerate point
pub const HORIZON_RADIUS: f64 = 91.;
pub const ZENITH_RADIUS: f64 = 1.;

const DEGREE_SIGN: char = '\u{b0}';

#[derive(Debug, Clone, PartialEq)]
pub struct SkyPlotOptions {
    pub style: StyleOptions,
    /// Azimuth grows counter-clockwise (North up, East left). False flips it.
    pub north_to_east_ccw: bool,
    pub grid: bool,
    /// Shifts the azimuth tick labels only, not where points land. Moving it
    /// off zero makes N/E/S/W disagree with the azimuths printed next to them.
    pub az_label_offset: Angle,
}

impl Default for SkyPlotOptions {
    fn default() -> Self {
        Self {
            style: StyleOptions::default(),
            north_to_east_ccw: true,
            grid: true,
            az_label_offset: Angle::degrees(0.),
        }
    }
}

impl From<&PlotDefaults> for SkyPlotOptions {
    fn from(defaults: &PlotDefaults) -> Self {
        Self {
            style: StyleOptions::default(),
            north_to_east_ccw: defaults.north_to_east_ccw,
            grid: defaults.grid,
            az_label_offset: Angle::degrees(defaults.az_label_offset_deg),
        }
    }
}

/// Maps an altitude onto the chart radius
pub fn altitude_to_radius(alt: Angle) -> f64 {
    HORIZON_RADIUS - alt.to_degrees()
}

/// The plottable part of a set of positions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkyPoints {
    pub visible: Vec<PolarPoint>,
    pub below_horizon: Vec<DateTime<Utc>>,
}

/// Splits positions into chart points and the instants at which the target
/// was under the horizon. The horizon itself counts as visible.
pub fn project(times: &TimeSamples, positions: &[AltAz]) -> Result<SkyPoints> {
    if positions.len() != times.len() {
        return Err(Error::InvalidValue(format!(
            "Expected {} positions, got {}",
            times.len(),
            positions.len()
        )));
    }

    let mut points = SkyPoints::default();
    for (time, pos) in times.iter().zip(positions) {
        let r = altitude_to_radius(pos.alt);
        if r > HORIZON_RADIUS {
            points.below_horizon.push(*time);
        } else {
            points.visible.push(PolarPoint::new(pos.az.to_radians(), r));
        }
    }
    Ok(points)
}

/// Azimuth value shown at each of the seven labelled spokes, in [0, 360)
pub fn azimuth_label_angles(offset: Angle) -> [Degrees; 7] {
    let offset = offset.to_degrees();
    let mut angles = [0.; 7];
    for (chunk, angle) in angles.iter_mut().enumerate() {
        *angle = Angle::degrees(offset + chunk as f64 * 45.)
            .wrap_at_360()
            .to_degrees();
    }
    angles
}

/// Shortest round-trip form with at least one decimal, and a signed two-digit
/// exponent when the value is small enough to print in scientific notation
fn format_label_value(value: Degrees) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.unsigned_abs()
            ),
            Err(_) => text,
        },
        None => text,
    }
}

/// Labels for the spokes at 0, 45, ..., 315 degrees. Cardinal spokes get their
/// compass letter; the last spoke is left blank.
pub fn azimuth_labels(offset: Angle) -> Vec<String> {
    let mut labels: Vec<String> = azimuth_label_angles(offset)
        .iter()
        .enumerate()
        .map(|(chunk, angle)| {
            let value = format_label_value(*angle);
            match chunk {
                0 => format!("N \n{}{} Az", value, DEGREE_SIGN),
                2 => format!("E\n{}{}", value, DEGREE_SIGN),
                4 => format!("S\n{}{}", value, DEGREE_SIGN),
                6 => format!("W\n{}{}", value, DEGREE_SIGN),
                _ => format!("{}{}", value, DEGREE_SIGN),
            }
        })
        .collect();
    labels.push(String::new());
    labels
}

pub fn azimuth_tick_angles() -> Vec<Degrees> {
    (0..8).map(|i| i as f64 * 45.).collect()
}

/// Altitude rings from the centre outwards
pub fn altitude_ticks() -> (Vec<f64>, Vec<String>) {
    let radii = (1..106).step_by(15).map(f64::from).collect();
    let labels = [
        format!("90{}", DEGREE_SIGN),
        String::new(),
        format!("60{}", DEGREE_SIGN),
        String::new(),
        format!("30{}", DEGREE_SIGN),
        String::new(),
        format!("0{} Alt.", DEGREE_SIGN),
    ]
    .to_vec();
    (radii, labels)
}

/// Plots `target` as seen by `observer` at each instant in `time`.
///
/// Draws onto `surface` when one is given, so repeated calls build up a
/// multi-target chart; otherwise a fresh surface is created. Instants at
/// which the target is below the horizon are skipped with a warning. Errors
/// from the observer or the surface are returned as-is.
pub fn plot_sky<T, O, S, I>(
    target: &T,
    observer: &O,
    time: I,
    surface: Option<S>,
    options: &SkyPlotOptions,
) -> Result<S>
where
    T: SkyTarget + ?Sized,
    O: AltAzProvider<T> + ?Sized,
    S: PolarSurface + Default,
    I: TryInto<TimeSamples>,
    Error: From<<I as TryInto<TimeSamples>>::Error>,
{
    let mut surface = surface.unwrap_or_default();
    let target_name = target.name().unwrap_or("");
    let style = options.style.with_defaults(target_name);

    let times: TimeSamples = time.try_into()?;
    let positions = observer.altaz(&times, target)?;
    let points = project(&times, &positions)?;
    debug!(
        "Plotting {} of {} positions, azimuth labels offset by {}",
        points.visible.len(),
        times.len(),
        options.az_label_offset
    );

    for time in &points.below_horizon {
        let name = if target_name.is_empty() {
            "Unknown Name"
        } else {
            target_name
        };
        warn!(
            "Target \"{}\" is below the horizon at time: {}",
            name,
            time.to_rfc3339()
        );
    }

    surface.set_theta_zero_location(CompassPoint::North);
    if !options.north_to_east_ccw {
        surface.set_theta_direction(ThetaDirection::Clockwise);
    }

    surface.scatter(&points.visible, &style)?;
    surface.set_rlim(ZENITH_RADIUS, HORIZON_RADIUS)?;
    surface.set_grid(options.grid);

    let (radii, radial_labels) = altitude_ticks();
    surface.set_rgrids(&radii, &radial_labels, Angle::degrees(-45.))?;
    surface.set_thetagrids(
        &azimuth_tick_angles(),
        &azimuth_labels(options.az_label_offset),
        1.2,
    )?;

    surface.redraw()?;
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleUnit;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_radial_transform_boundaries() {
        assert_float_absolute_eq!(altitude_to_radius(Angle::degrees(90.)), 1., 1E-9);
        assert_float_absolute_eq!(altitude_to_radius(Angle::degrees(0.)), 91., 1E-9);
        assert!(altitude_to_radius(Angle::degrees(-0.0001)) > HORIZON_RADIUS);
        assert_float_absolute_eq!(
            altitude_to_radius(Angle::new(std::f64::consts::FRAC_PI_4, AngleUnit::Radians)),
            46.,
            1E-9
        );
    }

    #[test]
    fn test_project_filters_below_horizon() {
        let times = TimeSamples::new(vec![at(1), at(2), at(3)]).unwrap();
        let positions = [
            AltAz::new(Angle::degrees(0.), Angle::degrees(90.)),
            AltAz::new(Angle::degrees(-0.0001), Angle::degrees(180.)),
            AltAz::new(Angle::degrees(30.), Angle::degrees(270.)),
        ];
        let points = project(&times, &positions).unwrap();

        assert_eq!(points.below_horizon, vec![at(2)]);
        assert_eq!(points.visible.len(), 2);
        assert_float_absolute_eq!(points.visible[0].r, 91., 1E-9);
        assert_float_absolute_eq!(points.visible[0].theta, std::f64::consts::FRAC_PI_2, 1E-9);
        assert_float_absolute_eq!(points.visible[1].r, 61., 1E-9);
    }

    #[test]
    fn test_project_rejects_mismatched_lengths() {
        let times = TimeSamples::single(at(1));
        assert!(project(&times, &[]).is_err());
    }

    #[test]
    fn test_label_angles_wrap() {
        assert_eq!(
            azimuth_label_angles(Angle::degrees(0.)),
            [0., 45., 90., 135., 180., 225., 270.]
        );
        assert_eq!(
            azimuth_label_angles(Angle::degrees(100.)),
            [100., 145., 190., 235., 280., 325., 10.]
        );
        for offset in [
            -1e20, -725., -90., -0.5, -1e-20, 0., 44.9, 359.9, 360., 1000., 1e17, 1e20,
        ] {
            for a in azimuth_label_angles(Angle::degrees(offset)) {
                assert!((0. ..360.).contains(&a), "{} from offset {}", a, offset);
            }
        }
    }

    #[test]
    fn test_tiny_negative_offset_labels_zero() {
        let angles = azimuth_label_angles(Angle::degrees(-1e-20));
        assert_eq!(angles[0], 0.);
        assert_eq!(angles[1], 45.);
        assert_eq!(azimuth_labels(Angle::degrees(-1e-20))[0], "N \n0.0\u{b0} Az");
    }

    #[test]
    fn test_label_offset_accepts_other_units() {
        let angles = azimuth_label_angles(Angle::hours(1.));
        assert_float_absolute_eq!(angles[0], 15., 1E-9);
    }

    #[test]
    fn test_label_text() {
        let labels = azimuth_labels(Angle::degrees(0.));
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "N \n0.0\u{b0} Az");
        assert_eq!(labels[1], "45.0\u{b0}");
        assert_eq!(labels[2], "E\n90.0\u{b0}");
        assert_eq!(labels[4], "S\n180.0\u{b0}");
        assert_eq!(labels[6], "W\n270.0\u{b0}");
        assert_eq!(labels[7], "");

        let shifted = azimuth_labels(Angle::degrees(22.5));
        assert_eq!(shifted[0], "N \n22.5\u{b0} Az");
    }

    #[test]
    fn test_label_value_exponent() {
        assert_eq!(format_label_value(45.), "45.0");
        assert_eq!(format_label_value(0.0001), "0.0001");
        assert_eq!(format_label_value(1e-5), "1e-05");
        assert_eq!(format_label_value(2.5e-7), "2.5e-07");
        assert_eq!(format_label_value(1e-100), "1e-100");

        let labels = azimuth_labels(Angle::degrees(1e-5));
        assert_eq!(labels[0], "N \n1e-05\u{b0} Az");
    }

    #[test]
    fn test_altitude_ticks() {
        let (radii, labels) = altitude_ticks();
        assert_eq!(radii, vec![1., 16., 31., 46., 61., 76., 91.]);
        assert_eq!(labels[0], "90\u{b0}");
        assert_eq!(labels[1], "");
        assert_eq!(labels[6], "0\u{b0} Alt.");
    }

    #[test]
    fn test_options_from_config() {
        let options = SkyPlotOptions::from(&PlotDefaults {
            north_to_east_ccw: false,
            grid: false,
            az_label_offset_deg: 10.,
        });
        assert!(!options.north_to_east_ccw);
        assert!(!options.grid);
        assert_eq!(options.az_label_offset.to_degrees(), 10.);
    }
}
