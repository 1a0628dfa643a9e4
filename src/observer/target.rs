use crate::angle::Angle;
use crate::astro_math::{Degrees, Hours};
use crate::errors::{check_dec, check_ra, Result};

/// Anything that can be shown on a sky chart.
pub trait SkyTarget {
    /// Display name, used for the legend and in warnings
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A target at fixed equatorial coordinates (proper motion ignored)
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTarget {
    name: Option<String>,
    right_ascension: Hours,
    declination: Degrees,
}

impl FixedTarget {
    pub fn new(right_ascension: Angle, declination: Angle) -> Result<Self> {
        let right_ascension = right_ascension.to_hours();
        let declination = declination.to_degrees();
        check_ra(right_ascension)?;
        check_dec(declination)?;
        Ok(Self {
            name: None,
            right_ascension,
            declination,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Right ascension (hours)
    pub fn right_ascension(&self) -> Hours {
        self.right_ascension
    }

    /// Declination (degrees, positive North)
    pub fn declination(&self) -> Degrees {
        self.declination
    }
}

impl SkyTarget for FixedTarget {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
