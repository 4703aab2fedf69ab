/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub(crate) mod epoch_seconds {
    use crate::instant::{ParseError, NANOS_PER_SECOND};
    use crate::Instant;

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5"
    pub(crate) fn format(instant: &Instant) -> String {
        if instant.subsecond_nanos == 0 {
            return itoa::Buffer::new().format(instant.seconds).to_owned();
        }
        let fraction = format!("{:09}", fraction_nanos(instant));
        let fraction = fraction.trim_end_matches('0');
        if instant.seconds < 0 {
            // -2s + 0.5s is written as -1.5
            format!("-{}.{}", (instant.seconds + 1).unsigned_abs(), fraction)
        } else {
            format!("{}.{}", instant.seconds, fraction)
        }
    }

    fn fraction_nanos(instant: &Instant) -> u32 {
        if instant.seconds < 0 {
            NANOS_PER_SECOND - instant.subsecond_nanos
        } else {
            instant.subsecond_nanos
        }
    }

    pub(crate) fn parse(value: &str) -> Result<Instant, ParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(ParseError::new("missing digits after `.`")),
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(ParseError::new("expected a decimal number of seconds"));
        }
        if fraction.len() > 9 {
            return Err(ParseError::new("more than nanosecond precision"));
        }
        let whole: i64 = whole
            .parse()
            .map_err(|_| ParseError::new("epoch seconds out of range"))?;
        let nanos = match fraction.len() {
            0 => 0,
            digits => {
                let value: u32 = fraction
                    .parse()
                    .map_err(|_| ParseError::new("invalid fractional seconds"))?;
                value * 10_u32.pow(9 - digits as u32)
            }
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(whole, nanos),
            (true, 0) => Instant::from_epoch_seconds(-whole),
            (true, nanos) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }

    fn is_digits(value: &str) -> bool {
        value.bytes().all(|b| b.is_ascii_digit())
    }
}

pub(crate) mod date_time {
    use crate::instant::{FormatError, ParseError, NANOS_PER_SECOND};
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(instant: &Instant) -> Result<String, FormatError> {
        let date_time = DateTime::<Utc>::from_timestamp(instant.seconds, instant.subsecond_nanos)
            .ok_or_else(|| FormatError::new("instant is outside of the supported date range"))?;
        let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        // AutoSi pads the fraction out to millis/micros/nanos
        Ok(
            match rfc3339
                .strip_suffix('Z')
                .and_then(|timestamp| timestamp.split_once('.'))
            {
                Some((whole, fraction)) => format!("{}.{}Z", whole, fraction.trim_end_matches('0')),
                None => rfc3339,
            },
        )
    }

    pub(crate) fn parse(value: &str) -> Result<Instant, ParseError> {
        let date_time = DateTime::parse_from_rfc3339(value)
            .map_err(|err| ParseError::new(format!("invalid date-time `{}`: {}", value, err)))?;
        // chrono reports leap seconds as nanos >= 1s
        let nanos = date_time
            .timestamp_subsec_nanos()
            .min(NANOS_PER_SECOND - 1);
        Ok(Instant::from_secs_and_nanos(date_time.timestamp(), nanos))
    }
}

#[cfg(test)]
mod test {
    use super::{date_time, epoch_seconds};
    use crate::Instant;
    use proptest::prelude::*;

    #[test]
    fn epoch_seconds_format() {
        assert_eq!(epoch_seconds::format(&Instant::from_epoch_seconds(0)), "0");
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(1576540098, 520_000_000)),
            "1576540098.52"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(-1, 500_000_000)),
            "-0.5"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(-2, 250_000_000)),
            "-1.75"
        );
        assert_eq!(epoch_seconds::format(&Instant::from_epoch_seconds(-10)), "-10");
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            epoch_seconds::parse("1576540098.52"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            epoch_seconds::parse("-0.5"),
            Ok(Instant::from_secs_and_nanos(-1, 500_000_000))
        );
        assert_eq!(epoch_seconds::parse("-10"), Ok(Instant::from_epoch_seconds(-10)));
        assert!(epoch_seconds::parse("").is_err());
        assert!(epoch_seconds::parse("1.").is_err());
        assert!(epoch_seconds::parse(".5").is_err());
        assert!(epoch_seconds::parse("1.0000000001").is_err());
        assert!(epoch_seconds::parse("12a").is_err());
    }

    #[test]
    fn date_time_format() {
        assert_eq!(
            date_time::format(&Instant::from_epoch_seconds(1576540090)).unwrap(),
            "2019-12-16T23:48:10Z"
        );
        assert_eq!(
            date_time::format(&Instant::from_secs_and_nanos(1576540098, 123_000_000)).unwrap(),
            "2019-12-16T23:48:18.123Z"
        );
        assert_eq!(
            date_time::format(&Instant::from_secs_and_nanos(1576540098, 100)).unwrap(),
            "2019-12-16T23:48:18.0000001Z"
        );
        assert!(date_time::format(&Instant::from_epoch_seconds(i64::MAX)).is_err());
    }

    #[test]
    fn date_time_parse() {
        assert_eq!(
            date_time::parse("2019-12-16T23:48:18.52Z"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            date_time::parse("2019-12-16T15:48:18-08:00"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(date_time::parse("2019-12-16").is_err());
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            prop_assert_eq!(epoch_seconds::parse(&epoch_seconds::format(&instant)), Ok(instant));
        }

        #[test]
        fn date_time_round_trip(seconds in -10_000_000_000i64..200_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = date_time::format(&instant).unwrap();
            prop_assert_eq!(date_time::parse(&formatted), Ok(instant));
        }
    }
}
