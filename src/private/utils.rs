use std::time::{Duration, SystemTime};

use chrono::{DateTime, Datelike as _, Utc};

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("out of range")]
    OutOfRange,
}

/// A point in time with second precision.
///
/// The range is `1970-01-01T00:00:00Z..=9999-12-31T23:59:59Z`, so every value
/// can be written as an XML schema `dateTime` with a four-digit year.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct UnixTimestamp(DateTime<Utc>);

impl UnixTimestamp {
    pub(crate) fn from_system_time(system_time: SystemTime) -> Result<Self, Error> {
        let secs = system_time
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| Error::OutOfRange)?
            .as_secs();
        Self::from_secs(secs)
    }

    pub(crate) fn checked_add(self, duration: Duration) -> Result<Self, Error> {
        let secs = u64::try_from(self.0.timestamp()).map_err(|_| Error::OutOfRange)?;
        let secs = secs
            .checked_add(duration.as_secs())
            .ok_or(Error::OutOfRange)?;
        Self::from_secs(secs)
    }

    /// e.g. `2024-01-01T00:00:00Z`
    pub(crate) fn to_xml_schema_date_time(self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    fn from_secs(secs: u64) -> Result<Self, Error> {
        let secs = i64::try_from(secs).map_err(|_| Error::OutOfRange)?;
        let date_time = DateTime::<Utc>::from_timestamp(secs, 0).ok_or(Error::OutOfRange)?;
        if date_time.year() > 9999 {
            return Err(Error::OutOfRange);
        }
        Ok(Self(date_time))
    }
}
