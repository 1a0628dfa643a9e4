use chrono::{DateTime, Datelike, Timelike, Utc};
use polynomials::poly;
use std::f64::consts::{PI, TAU};

pub type Hours = f64;
pub type Degrees = f64;
pub type Radians = f64;

pub fn deg_to_rad(degrees: Degrees) -> Radians {
    PI * degrees / 180.
}

pub fn rad_to_deg(rad: Radians) -> Degrees {
    180. * rad / PI
}

pub fn hours_to_rad(hours: Hours) -> Radians {
    PI * hours / 12.
}

pub fn rad_to_hours(rad: Radians) -> Hours {
    12. * rad / PI
}

pub fn deg_to_hours(deg: Degrees) -> Hours {
    deg / 15.
}

pub fn hours_to_deg(hours: Hours) -> Degrees {
    hours * 15.
}

// Convert hms to hours or dms to degrees
pub fn ms_to_dec(d: u32, minutes: u32, seconds: f64) -> f64 {
    (d as f64) + (minutes as f64) / 60. + seconds / 3600.
}

/// Julian Date of a UTC instant, including the fractional day
/// see https://scienceworld.wolfram.com/astronomy/JulianDate.html
pub fn julian_date(time: DateTime<Utc>) -> f64 {
    let y = time.year() as f64;
    let m = time.month() as f64;
    let d = time.day() as f64;

    let mut jd = 367. * y;
    jd -= f64::floor(7. * (y + f64::floor((m + 9.) / 12.)) / 4.);
    jd -= f64::floor(3. * (f64::floor((y + (m - 9.) / 7.) / 100.) + 1.) / 4.);
    jd += f64::floor(275. * m / 9.);
    jd += d;
    jd += 1721028.5;
    let seconds = time.second() as f64 + time.nanosecond() as f64 * 1E-9;
    jd + ms_to_dec(time.hour(), time.minute(), seconds) / 24.
}

// see https://thecynster.home.blog/2019/11/04/calculating-sidereal-time/
pub fn greenwich_sidereal_time(time: DateTime<Utc>) -> Hours {
    // TT-UTC is fixed at the 2017 leap second count
    const LEAP_SECOND_TOTAL: u32 = 27;

    let jd_utc = julian_date(time);

    let du = jd_utc - 2451545.0;
    let theta = rad_to_hours(modulo(
        TAU * (0.779_057_273_264f64 + 1.002_737_811_911_354_5f64 * du),
        TAU,
    ));

    let poly = poly![
        0.014506,
        4612.156534,
        1.3915817,
        -0.00000044,
        -0.000029956,
        -0.0000000368,
    ];
    let jd_tt = jd_utc + ((LEAP_SECOND_TOTAL as f64 + 32.184) / 3600.) / 24.;
    let t = (jd_tt - 2451545.0) / 36525.; // centuries

    // Evaluating a non-empty polynomial never fails
    let arcseconds = poly.eval(t).unwrap_or_default();
    let gmstp = deg_to_hours(modulo(arcseconds / 3600., 360.));

    modulo(theta + gmstp, 24.)
}

/// longitude in degrees, positive East
pub fn local_sidereal_time(time: DateTime<Utc>, longitude: Degrees) -> Hours {
    modulo(greenwich_sidereal_time(time) + deg_to_hours(longitude), 24.)
}

/// Hour angle of a right ascension, in [0, 24)
pub fn hour_angle(time: DateTime<Utc>, longitude: Degrees, ra: Hours) -> Hours {
    modulo(local_sidereal_time(time, longitude) - ra, 24.)
}

pub fn alt_from_ha_dec(ha: Hours, dec: Degrees, lat: Degrees) -> Degrees {
    let ha = hours_to_rad(ha);
    let dec = deg_to_rad(dec);
    let lat = deg_to_rad(lat);
    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    rad_to_deg(sin_alt.clamp(-1., 1.).asin())
}

/// Azimuth measured from North through East, in [0, 360).
/// Undefined at the zenith and nadir, where 0 is returned.
pub fn az_from_ha_dec(ha: Hours, dec: Degrees, lat: Degrees) -> Degrees {
    let alt = deg_to_rad(alt_from_ha_dec(ha, dec, lat));
    let ha = hours_to_rad(ha);
    let dec = deg_to_rad(dec);
    let lat = deg_to_rad(lat);

    let denominator = alt.cos() * lat.cos();
    if denominator.abs() < 1E-12 {
        return 0.;
    }
    let cos_a = ((dec.sin() - alt.sin() * lat.sin()) / denominator).clamp(-1., 1.);
    let a = rad_to_deg(cos_a.acos());

    if 0. < ha.sin() {
        modulo(360. - a, 360.)
    } else {
        a
    }
}

pub fn modulo(val: f64, base: f64) -> f64 {
    ((val % base) + base) % base
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct TestPos {
        ha: Hours,
        dec: Degrees,
        alt: Degrees,
        az: Degrees,
        lat: Degrees,
    }

    #[test]
    fn test_deg_to_rad() {
        assert_eq!(deg_to_rad(0.), 0.);
        assert_float_relative_eq!(deg_to_rad(55.), 0.9599311);
        assert_float_relative_eq!(deg_to_rad(-10.), -0.1745329);
    }

    #[test]
    fn test_rad_to_deg() {
        assert_eq!(rad_to_deg(0.), 0.);
        assert_float_relative_eq!(rad_to_deg(1.), 57.29578);
        assert_float_relative_eq!(rad_to_deg(-8.), -458.3662);
    }

    #[test]
    fn test_hours_conversions() {
        assert_float_relative_eq!(hours_to_rad(1.), 0.261799, 1E-4);
        assert_float_relative_eq!(rad_to_hours(1.), 3.8197, 1E-4);
        assert_float_relative_eq!(deg_to_hours(-8.), -0.53333333333333333);
        assert_float_relative_eq!(hours_to_deg(-8.), -120.);
    }

    #[test]
    fn test_ms_to_dec() {
        assert_eq!(ms_to_dec(0, 0, 0.), 0.);
        assert_float_relative_eq!(ms_to_dec(1, 1, 1.), 1.0169444);
    }

    #[test]
    fn test_julian_date() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_float_absolute_eq!(julian_date(j2000), 2451545.0, 1E-6);
    }

    #[test]
    fn test_greenwich_sidereal_time() {
        assert_float_relative_eq!(
            greenwich_sidereal_time(Utc.with_ymd_and_hms(1969, 1, 6, 1, 5, 0).unwrap()),
            8.1127421203,
            1E-4
        );
        assert_float_relative_eq!(
            greenwich_sidereal_time(Utc.with_ymd_and_hms(2021, 1, 30, 21, 20, 0).unwrap()),
            6.0219108930,
            1E-4
        );
    }

    #[test]
    fn test_local_sidereal_time() {
        assert_float_relative_eq!(
            local_sidereal_time(Utc.with_ymd_and_hms(1969, 1, 6, 1, 5, 0).unwrap(), -55.5),
            4.4127385800,
            1E-4
        );
        assert_float_absolute_eq!(
            hour_angle(
                Utc.with_ymd_and_hms(2021, 1, 30, 21, 20, 0).unwrap(),
                90.,
                12.
            ),
            0.0219108930,
            1E-4
        );
    }

    #[test]
    fn test_alt_az_from_ha_dec() {
        let tests = [
            TestPos {
                ha: deg_to_hours(336.683),
                dec: 19.1824,
                lat: 43.07833,
                alt: ms_to_dec(59, 5, 10.),
                az: ms_to_dec(133, 18, 29.),
            },
            TestPos {
                ha: deg_to_hours(54.382617),
                dec: 36.466667,
                lat: 52.5,
                alt: 49.169122,
                az: 269.14634,
            },
            TestPos {
                ha: ms_to_dec(22, 3, 55.79),
                dec: -ms_to_dec(26, 23, 11.1),
                lat: ms_to_dec(37, 45, 3.),
                alt: ms_to_dec(20, 19, 20.5),
                az: ms_to_dec(152, 23, 39.3),
            },
            TestPos {
                ha: ms_to_dec(13, 35, 44.69),
                dec: -ms_to_dec(21, 27, 41.3),
                lat: ms_to_dec(51, 28, 40.12),
                alt: -ms_to_dec(54, 41, 22.7),
                az: ms_to_dec(40, 47, 16.3),
            },
        ];

        for test in &tests {
            assert_float_absolute_eq!(alt_from_ha_dec(test.ha, test.dec, test.lat), test.alt, 1E-3);
            assert_float_absolute_eq!(az_from_ha_dec(test.ha, test.dec, test.lat), test.az, 1E-3);
        }
    }

    #[test]
    fn test_zenith_has_defined_azimuth() {
        assert_float_absolute_eq!(alt_from_ha_dec(0., 51.47, 51.47), 90., 1E-5);
        assert!(az_from_ha_dec(0., 51.47, 51.47).is_finite());
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(TAU, PI), 0.);
        assert_eq!(modulo(-365., 360.), 355.);
    }
}
