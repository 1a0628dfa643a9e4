use crate::astro_math::{Degrees, Hours};
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidValue(String),

    #[error("At least one time instant is required")]
    EmptyTimeSamples,

    #[error("Could not parse time \"{input}\": {source}")]
    TimeParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Position for target \"{target}\" could not be computed: {message}")]
    Position { target: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error("Drawing error: {0}")]
    Drawing(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

impl Error {
    /// Wraps any backend failure raised while drawing
    pub fn drawing(e: impl std::fmt::Display) -> Self {
        Error::Drawing(e.to_string())
    }
}

pub fn check_dec(dec: Degrees) -> Result<()> {
    if (-90. ..=90.).contains(&dec) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!(
            "Declination of {} is not valid",
            dec
        )))
    }
}

pub fn check_ra(ra: Hours) -> Result<()> {
    if (0. ..24.).contains(&ra) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!(
            "Right Ascension of {} is not valid",
            ra
        )))
    }
}

pub fn check_latitude(latitude: Degrees) -> Result<()> {
    if (-90. ..=90.).contains(&latitude) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!(
            "Latitude of {} is outside the valid range of -90 to 90",
            latitude
        )))
    }
}

pub fn check_longitude(longitude: Degrees) -> Result<()> {
    if (-180. ..=180.).contains(&longitude) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!(
            "Longitude of {} is outside the valid range of -180 to 180",
            longitude
        )))
    }
}
