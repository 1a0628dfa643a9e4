use crate::astro_math::{self, Degrees, Hours, Radians};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
    Hours,
    Arcminutes,
    Arcseconds,
}

impl AngleUnit {
    /// Size of one unit, in degrees
    fn in_degrees(self) -> Degrees {
        match self {
            AngleUnit::Degrees => 1.,
            AngleUnit::Radians => astro_math::rad_to_deg(1.),
            AngleUnit::Hours => astro_math::hours_to_deg(1.),
            AngleUnit::Arcminutes => 1. / 60.,
            AngleUnit::Arcseconds => 1. / 3600.,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "\u{b0}",
            AngleUnit::Radians => " rad",
            AngleUnit::Hours => "h",
            AngleUnit::Arcminutes => "'",
            AngleUnit::Arcseconds => "\"",
        }
    }
}

/// An angular quantity that remembers the unit it was given in.
///
/// Conversions happen only where a consumer needs a specific unit, so a value
/// built from hours or radians never silently passes through as degrees.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub const fn degrees(value: Degrees) -> Self {
        Self::new(value, AngleUnit::Degrees)
    }

    pub const fn radians(value: Radians) -> Self {
        Self::new(value, AngleUnit::Radians)
    }

    pub const fn hours(value: Hours) -> Self {
        Self::new(value, AngleUnit::Hours)
    }

    /// Degrees, arcminutes and arcseconds. The sign is taken from `degrees`.
    pub fn dms(degrees: i32, minutes: u32, seconds: f64) -> Self {
        let magnitude = astro_math::ms_to_dec(degrees.unsigned_abs(), minutes, seconds);
        Self::degrees(if degrees < 0 { -magnitude } else { magnitude })
    }

    /// Hours, minutes and seconds of right ascension
    pub fn hms(hours: u32, minutes: u32, seconds: f64) -> Self {
        Self::hours(astro_math::ms_to_dec(hours, minutes, seconds))
    }

    pub fn to_degrees(self) -> Degrees {
        match self.unit {
            AngleUnit::Degrees => self.value,
            unit => self.value * unit.in_degrees(),
        }
    }

    pub fn to_radians(self) -> Radians {
        match self.unit {
            AngleUnit::Radians => self.value,
            _ => astro_math::deg_to_rad(self.to_degrees()),
        }
    }

    pub fn to_hours(self) -> Hours {
        match self.unit {
            AngleUnit::Hours => self.value,
            _ => astro_math::deg_to_hours(self.to_degrees()),
        }
    }

    /// Wraps into [0, 360) degrees. A tiny negative value can round up to
    /// exactly 360, which is folded back to 0.
    pub fn wrap_at_360(self) -> Self {
        let wrapped = self.to_degrees().rem_euclid(360.);
        Self::degrees(if wrapped >= 360. { 0. } else { wrapped })
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::degrees(0.)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}
