use crate::errors::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::ops::Deref;

/// An ordered, never-empty set of instants at which a target is sampled.
///
/// A lone instant becomes a one-element sequence, so downstream code always
/// iterates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSamples(Vec<DateTime<Utc>>);

impl TimeSamples {
    pub fn new(times: Vec<DateTime<Utc>>) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::EmptyTimeSamples);
        }
        Ok(Self(times))
    }

    pub fn single(time: DateTime<Utc>) -> Self {
        Self(vec![time])
    }

    /// Parses RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` (UTC) or bare dates
    /// (midnight UTC).
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self> {
        let times = inputs
            .iter()
            .map(|s| parse_instant(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(times)
    }

    pub fn as_slice(&self) -> &[DateTime<Utc>] {
        &self.0
    }
}

pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(t.and_utc());
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(d) => Ok(d.and_time(chrono::NaiveTime::MIN).and_utc()),
        Err(source) => Err(Error::TimeParse {
            input: input.to_string(),
            source,
        }),
    }
}

impl Deref for TimeSamples {
    type Target = [DateTime<Utc>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for TimeSamples {
    fn from(time: DateTime<Utc>) -> Self {
        Self::single(time)
    }
}

impl TryFrom<Vec<DateTime<Utc>>> for TimeSamples {
    type Error = Error;

    fn try_from(times: Vec<DateTime<Utc>>) -> Result<Self> {
        Self::new(times)
    }
}

impl TryFrom<&[DateTime<Utc>]> for TimeSamples {
    type Error = Error;

    fn try_from(times: &[DateTime<Utc>]) -> Result<Self> {
        Self::new(times.to_vec())
    }
}

impl<'a> IntoIterator for &'a TimeSamples {
    type Item = &'a DateTime<Utc>;
    type IntoIter = std::slice::Iter<'a, DateTime<Utc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
