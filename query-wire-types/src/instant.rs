/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Instant value for representing query-protocol timestamps.
//!
//! Unlike [`std::time::Instant`], this instant is not opaque. The time inside
//! of it can be read and modified, and it holds the logic for parsing and
//! formatting timestamps in the formats the query protocol family uses: epoch
//! seconds on the wire and RFC 3339 date-time for display.

use std::error::Error as StdError;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Instant in time.
///
/// Represented as seconds and sub-second nanos since the Unix epoch
/// (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    /// Creates an `Instant` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an `Instant` from a number of seconds and sub-second nanos
    /// since the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if `subsecond_nanos` is a full second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= 1_000_000_000 {
            panic!("{} is > 1_000_000_000", subsecond_nanos)
        }
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Parses an `Instant` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => {
                let parsed = OffsetDateTime::parse(s, &Rfc3339)
                    .map_err(|_| InstantParseError::Invalid("invalid RFC 3339 date-time"))?;
                Ok(Instant {
                    seconds: parsed.unix_timestamp(),
                    subsecond_nanos: parsed.nanosecond(),
                })
            }
            Format::EpochSeconds => match s.parse::<i64>() {
                Ok(seconds) => Ok(Instant::from_secs(seconds)),
                Err(_) => Err(InstantParseError::Invalid("invalid epoch seconds")),
            },
        }
    }

    /// Returns the epoch seconds component of the `Instant`.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component of the `Instant`.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Formats the `Instant` to a string using the given `format`.
    ///
    /// Returns a `ConversionError` when the instant falls outside the range
    /// the format can represent (RFC 3339 is limited to years 0 through 9999).
    pub fn fmt(&self, format: Format) -> Result<String, ConversionError> {
        match format {
            Format::DateTime => {
                let nanos =
                    self.seconds as i128 * NANOS_PER_SECOND + self.subsecond_nanos as i128;
                let date_time = OffsetDateTime::from_unix_timestamp_nanos(nanos)
                    .map_err(|_| ConversionError("instant is out of range for RFC 3339"))?;
                date_time
                    .format(&Rfc3339)
                    .map_err(|_| ConversionError("instant could not be formatted as RFC 3339"))
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    Ok(format!("{}", self.seconds))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    Ok(format!(
                        "{}.{}",
                        self.seconds,
                        fraction.trim_end_matches('0')
                    ))
                }
            }
        }
    }
}

/// Formats for representing an `Instant` in the query protocol family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC 3339 date-time, rendered in UTC (`2015-01-25T08:00:00Z`).
    DateTime,
    /// Number of whole seconds since the Unix epoch.
    EpochSeconds,
}

/// Failure to convert an `Instant` to another representation.
#[derive(Debug)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure to parse an `Instant` from a string.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstantParseError {
    /// The input was not a valid rendering of the requested format.
    Invalid(&'static str),
}

impl StdError for InstantParseError {}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;

    #[test]
    fn date_time_fmt() {
        let instant = Instant::from_secs(1422172800);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2015-01-25T08:00:00Z");
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1422172800");

        let instant = Instant::from_secs(1576540098);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
    }

    #[test]
    fn fmt_zero_seconds_in_minute() {
        let instant = Instant::from_secs(1576540080);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:00Z");
    }

    #[test]
    fn fmt_subsecond_nanos() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
    }

    #[test]
    fn date_time_parse() {
        let instant = Instant::from_str("2015-01-25T08:00:00Z", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_secs(1422172800));

        let instant = Instant::from_str("not a date", Format::DateTime);
        assert!(instant.is_err());
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            Instant::from_str("1422172800", Format::EpochSeconds).unwrap(),
            Instant::from_secs(1422172800)
        );
        assert!(Instant::from_str("1422172800.5", Format::EpochSeconds).is_err());
    }

    #[test]
    fn out_of_range_date_time() {
        assert!(Instant::from_secs(i64::MAX).fmt(Format::DateTime).is_err());
    }

    proptest! {
        #[test]
        fn date_time_round_trips_whole_seconds(epoch_secs in -62_135_596_800i64..253_402_300_799) {
            let instant = Instant::from_secs(epoch_secs);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_round_trips(epoch_secs in any::<i64>()) {
            let instant = Instant::from_secs(epoch_secs);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
