/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps as they travel over the wire.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
///
/// Instants before the epoch are stored with negative `seconds` and a positive
/// `subsecond_nanos` that counts forward from `seconds`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        if nanos >= NANOS_PER_SECOND {
            Instant::from_secs_and_nanos(epoch_seconds + 1, nanos - NANOS_PER_SECOND)
        } else {
            Instant::from_secs_and_nanos(epoch_seconds, nanos)
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(-(duration.as_secs() as i64)),
                    nanos => Instant {
                        seconds: -(duration.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    /// Parses an instant from `s` using the wire `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant with the wire `format`.
    ///
    /// `EpochSeconds` never fails. `DateTime` fails for instants outside of the
    /// representable calendar range.
    pub fn fmt(&self, format: Format) -> Result<String, FormatError> {
        match format {
            Format::DateTime => format::date_time::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Timestamp wire formats
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 date-time, `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Fractional seconds since the epoch, `1576540098.52`
    EpochSeconds,
}

/// Failure to parse an [`Instant`] from a string.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    message: Cow<'static, str>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse timestamp: {}", self.message)
    }
}

impl StdError for ParseError {}

/// Failure to format an [`Instant`].
#[derive(Debug, Eq, PartialEq)]
pub struct FormatError {
    message: Cow<'static, str>,
}

impl FormatError {
    pub(crate) fn new(message: impl Into<Cow<'static, str>>) -> Self {
        FormatError {
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to format timestamp: {}", self.message)
    }
}

impl StdError for FormatError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn from_f64() {
        assert_eq!(Instant::from_f64(5.5), Instant::from_secs_and_nanos(5, 500_000_000));
        assert_eq!(Instant::from_f64(-1.5), Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(Instant::from_f64(1576540098.0), Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn from_system_time() {
        assert_eq!(
            Instant::from_system_time(UNIX_EPOCH + Duration::from_millis(1500)),
            Instant::from_secs_and_nanos(1, 500_000_000)
        );
        assert_eq!(
            Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500)),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        assert_eq!(
            Instant::from_system_time(UNIX_EPOCH - Duration::from_secs(3)),
            Instant::from_epoch_seconds(-3)
        );
    }

    #[test]
    fn ordering() {
        let earlier = Instant::from_secs_and_nanos(10, 5);
        let later = Instant::from_secs_and_nanos(10, 6);
        assert!(earlier < later);
        assert!(Instant::from_epoch_seconds(-1) < Instant::from_epoch_seconds(0));
    }

    #[test]
    fn fractional_rounding_carries() {
        assert_eq!(
            Instant::from_fractional_seconds(1, 0.9999999999),
            Instant::from_epoch_seconds(2)
        );
    }

    #[test]
    fn from_str_dispatches_on_format() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(Instant::from_str("2019-12-16T23:48:18Z", Format::EpochSeconds).is_err());
    }
}
