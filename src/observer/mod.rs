pub use target::*;

use crate::angle::Angle;
use crate::astro_math::{self, Hours};
use crate::config::ObservingLocation;
use crate::errors::{check_latitude, check_longitude, Result};
use crate::time::TimeSamples;
use chrono::{DateTime, Utc};

mod target;

/// Local horizontal coordinates of a target at one instant
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct AltAz {
    pub alt: Angle,
    pub az: Angle,
}

impl AltAz {
    pub fn new(alt: Angle, az: Angle) -> Self {
        Self { alt, az }
    }
}

/// Computes where a target sits in the local sky.
///
/// Implementations return exactly one position per instant, in the same
/// order as `times`.
pub trait AltAzProvider<T: ?Sized> {
    fn altaz(&self, times: &TimeSamples, target: &T) -> Result<Vec<AltAz>>;
}

/// A fixed site on the ground
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Observer {
    location: ObservingLocation,
}

impl Observer {
    pub fn new(location: ObservingLocation) -> Result<Self> {
        check_latitude(location.latitude)?;
        check_longitude(location.longitude)?;
        Ok(Self { location })
    }

    pub fn location(&self) -> &ObservingLocation {
        &self.location
    }

    /// The local mean sidereal time at this site
    pub fn local_sidereal_time(&self, time: DateTime<Utc>) -> Hours {
        astro_math::local_sidereal_time(time, self.location.longitude)
    }

    fn fixed_altaz(&self, time: DateTime<Utc>, target: &FixedTarget) -> AltAz {
        let lat = self.location.latitude;
        let ha = astro_math::hour_angle(time, self.location.longitude, target.right_ascension());
        AltAz::new(
            Angle::degrees(astro_math::alt_from_ha_dec(ha, target.declination(), lat)),
            Angle::degrees(astro_math::az_from_ha_dec(ha, target.declination(), lat)),
        )
    }
}

impl AltAzProvider<FixedTarget> for Observer {
    fn altaz(&self, times: &TimeSamples, target: &FixedTarget) -> Result<Vec<AltAz>> {
        Ok(times.iter().map(|t| self.fixed_altaz(*t, target)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn greenwich() -> Observer {
        Observer::new(ObservingLocation {
            latitude: 51.47,
            longitude: 0.0,
            elevation: 15.0,
        })
        .unwrap()
    }

    #[test]
    fn test_invalid_location() {
        let loc = ObservingLocation {
            latitude: 95.,
            ..Default::default()
        };
        assert!(Observer::new(loc).is_err());
    }

    #[test]
    fn test_transit_altitude() {
        // A target on the meridian culminates at 90 - |lat - dec|
        let observer = greenwich();
        let time = Utc.with_ymd_and_hms(2021, 1, 30, 21, 20, 0).unwrap();
        let ra = observer.local_sidereal_time(time);
        let target = FixedTarget::new(Angle::hours(ra), Angle::degrees(20.)).unwrap();

        let positions = observer.altaz(&time.into(), &target).unwrap();
        assert_eq!(positions.len(), 1);
        assert_float_absolute_eq!(positions[0].alt.to_degrees(), 90. - 31.47, 1E-6);
        assert_float_absolute_eq!(positions[0].az.to_degrees(), 180., 1E-4);
    }

    #[test]
    fn test_one_position_per_instant() {
        let observer = greenwich();
        let times = TimeSamples::new(vec![
            Utc.with_ymd_and_hms(2021, 1, 30, 18, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 30, 21, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 31, 0, 0, 0).unwrap(),
        ])
        .unwrap();
        let polaris = FixedTarget::new(Angle::hms(2, 31, 49.1), Angle::dms(89, 15, 51.))
            .unwrap()
            .with_name("Polaris");

        let positions = observer.altaz(&times, &polaris).unwrap();
        assert_eq!(positions.len(), 3);
        for p in positions {
            // Polaris hugs the pole, which stands at the site latitude
            assert_float_absolute_eq!(p.alt.to_degrees(), 51.47, 1.);
            let az = p.az.to_degrees();
            assert!(az < 2. || az > 358., "azimuth {} not near North", az);
        }
    }
}
