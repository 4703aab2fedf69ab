/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::{Error, ErrorReason};
use crate::escape::unescape_string;
use smithy_types::base64;
use smithy_types::instant::Format;
use smithy_types::{Blob, Instant, Number};
use std::borrow::Cow;
use std::convert::TryFrom;

pub use crate::escape::Error as EscapeError;

/// New-type around `&str` that indicates the string is an escaped JSON string.
/// Provides functions for retrieving the string in either form.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// Returns the escaped string value
    pub fn as_escaped_str(&self) -> &str {
        self.0
    }

    /// Unescapes the string and returns it.
    /// If the string doesn't need unescaping, it will be returned directly.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Represents the location of a token
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    /// Creates a custom error from the offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        Error::new(ErrorReason::Custom(msg), Some(self.0))
    }
}

/// Enum representing the different JSON tokens that can be returned by json_token_iter.
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray {
        offset: Offset,
    },
    EndArray {
        offset: Offset,
    },
    ObjectKey {
        offset: Offset,
        key: EscapedStr<'a>,
    },
    StartObject {
        offset: Offset,
    },
    EndObject {
        offset: Offset,
    },
    ValueBool {
        offset: Offset,
        value: bool,
    },
    ValueNull {
        offset: Offset,
    },
    ValueNumber {
        offset: Offset,
        value: Number,
    },
    ValueString {
        offset: Offset,
        value: EscapedStr<'a>,
    },
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> Offset {
        use Token::*;
        *match self {
            StartArray { offset } => offset,
            EndArray { offset } => offset,
            ObjectKey { offset, .. } => offset,
            StartObject { offset } => offset,
            EndObject { offset } => offset,
            ValueBool { offset, .. } => offset,
            ValueNull { offset } => offset,
            ValueNumber { offset, .. } => offset,
            ValueString { offset, .. } => offset,
        }
    }

    /// Builds an error from the token's offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        self.offset().error(msg)
    }
}

macro_rules! expect_fn {
    ($name:ident, $typ:ident) => {
        pub fn $name(token_result: Option<Result<Token<'_>, Error>>) -> Result<(), Error> {
            match token_result.transpose()? {
                Some(Token::$typ { .. }) => Ok(()),
                Some(token) => {
                    Err(token.error(Cow::Borrowed(concat!("expected ", stringify!($typ)))))
                }
                None => Err(Error::new(
                    ErrorReason::Custom(Cow::Borrowed(concat!("expected ", stringify!($typ)))),
                    None,
                )),
            }
        }
    };
}

expect_fn!(expect_start_object, StartObject);
expect_fn!(expect_start_array, StartArray);

/// Expects a [Token::ValueNull] or [Token::ValueBool].
pub fn expect_bool_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<bool>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
        _ => Err(Error::custom("expected ValueBool or ValueNull")),
    }
}

/// Expects a [Token::ValueNull] or [Token::ValueNumber].
pub fn expect_number_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<Number>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
        _ => Err(Error::custom("expected ValueNumber or ValueNull")),
    }
}

/// Expects a [Token::ValueNull] or [Token::ValueString]. The string is returned **escaped**.
pub fn expect_string_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<EscapedStr<'_>>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { value, .. }) => Ok(Some(value)),
        _ => Err(Error::custom("expected ValueString or ValueNull")),
    }
}

/// Expects a [Token::ValueNull] or a base64 encoded [Token::ValueString], and decodes it into a [Blob].
pub fn expect_blob_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<Blob>, Error> {
    Ok(match expect_string_or_null(token)? {
        Some(value) => Some(Blob::new(
            base64::decode(value.to_unescaped()?.as_ref())
                .map_err(|err| Error::custom(format!("failed to decode base64: {}", err)))?,
        )),
        None => None,
    })
}

/// Expects a [Token::ValueNull] or a timestamp in the given `timestamp_format`.
///
/// Epoch seconds are read from numbers, date-times from strings.
pub fn expect_timestamp_or_null(
    token: Option<Result<Token<'_>, Error>>,
    timestamp_format: Format,
) -> Result<Option<Instant>, Error> {
    Ok(match timestamp_format {
        Format::EpochSeconds => match expect_number_or_null(token)? {
            Some(Number::PosInt(seconds)) => Some(Instant::from_epoch_seconds(
                i64::try_from(seconds)
                    .map_err(|_| Error::custom("epoch seconds out of range for a timestamp"))?,
            )),
            Some(Number::NegInt(seconds)) => Some(Instant::from_epoch_seconds(seconds)),
            Some(Number::Float(seconds)) => Some(Instant::from_f64(seconds)),
            None => None,
        },
        Format::DateTime => match expect_string_or_null(token)? {
            Some(value) => Some(
                Instant::from_str(value.to_unescaped()?.as_ref(), timestamp_format)
                    .map_err(|err| Error::custom(err.to_string()))?,
            ),
            None => None,
        },
    })
}

/// Skips an entire value in the token stream. Errors if it isn't a value.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    skip_inner(0, tokens)
}

/// Skips the remainder of an object or array whose start token was already consumed.
pub fn skip_to_end<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    skip_inner(1, tokens)
}

// Tracks nesting with a counter rather than recursion so that arbitrarily deep
// unknown values can't exhaust the stack.
fn skip_inner<'a>(
    mut depth: usize,
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => {
                depth += 1;
            }
            Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) => {
                debug_assert!(depth > 0);
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Some(Token::ValueNull { .. })
            | Some(Token::ValueBool { .. })
            | Some(Token::ValueNumber { .. })
            | Some(Token::ValueString { .. }) => {
                if depth == 0 {
                    break;
                }
            }
            Some(Token::ObjectKey { .. }) => {}
            None => return Err(Error::custom("expected value")),
        }
    }
    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::deserialize::ErrorReason::UnexpectedToken;
    use crate::deserialize::json_token_iter;

    pub fn start_array<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::StartArray {
            offset: Offset(offset),
        }))
    }

    pub fn end_array<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::EndArray {
            offset: Offset(offset),
        }))
    }

    pub fn start_object<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::StartObject {
            offset: Offset(offset),
        }))
    }

    pub fn end_object<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::EndObject {
            offset: Offset(offset),
        }))
    }

    pub fn object_key<'a>(offset: usize, key: &'a str) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ObjectKey {
            offset: Offset(offset),
            key: EscapedStr::new(key),
        }))
    }

    pub fn value_bool<'a>(offset: usize, boolean: bool) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueBool {
            offset: Offset(offset),
            value: boolean,
        }))
    }

    pub fn value_number<'a>(offset: usize, number: Number) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNumber {
            offset: Offset(offset),
            value: number,
        }))
    }

    pub fn value_null<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNull {
            offset: Offset(offset),
        }))
    }

    pub fn value_string<'a>(offset: usize, string: &'a str) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueString {
            offset: Offset(offset),
            value: EscapedStr::new(string),
        }))
    }

    #[test]
    fn skip_simple_value() {
        let mut tokens = json_token_iter(b"null true");
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_array() {
        let mut tokens = json_token_iter(b"[1, 2, 3, 4] true");
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_object() {
        let mut tokens = json_token_iter(b"{\"one\": 5, \"two\": 3} true");
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn mismatched_braces() {
        // The skip_value function doesn't need to explicitly handle these cases since
        // token iterator's parser handles them. This test confirms that assumption.
        assert_eq!(
            Err(Error::new(UnexpectedToken(']', "'}', ','"), Some(10),)),
            skip_value(&mut json_token_iter(br#"[{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(UnexpectedToken(']', "'}', ','"), Some(9),)),
            skip_value(&mut json_token_iter(br#"{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(UnexpectedToken('}', "']', ','"), Some(4),)),
            skip_value(&mut json_token_iter(br#"[5,6}"#))
        );
    }

    #[test]
    fn skip_nested() {
        let mut tokens = json_token_iter(
            br#"
            {"struct": {"foo": 5, "bar": 11, "arr": [1, 2, 3, {}, 5, []]},
             "arr": [[], [[]], [{"arr":[]}]],
             "simple": "foo"}
            true
        "#,
        );
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn test_expect_start_object() {
        assert_eq!(
            Err(Error::new(
                ErrorReason::Custom("expected StartObject".into()),
                Some(2)
            )),
            expect_start_object(value_bool(2, true))
        );
        assert_eq!(Ok(()), expect_start_object(start_object(0)));
    }

    #[test]
    fn test_expect_start_array() {
        assert_eq!(
            Err(Error::new(
                ErrorReason::Custom("expected StartArray".into()),
                Some(2)
            )),
            expect_start_array(value_bool(2, true))
        );
        assert_eq!(Ok(()), expect_start_array(start_array(0)));
    }

    #[test]
    fn skip_rest_of_object() {
        let mut tokens = json_token_iter(br#"{"a": [1, {"b": null}], "c": 2} true"#);
        assert_eq!(start_object(0), tokens.next());
        assert_eq!(object_key(1, "a"), tokens.next());
        skip_to_end(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_deeply_nested_value() {
        let depth = 100_000;
        let mut input = Vec::with_capacity(depth * 2 + 5);
        input.extend(std::iter::repeat(b'[').take(depth));
        input.extend(std::iter::repeat(b']').take(depth));
        input.extend_from_slice(b" true");
        let mut tokens = json_token_iter(&input);
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_unterminated_nested_value() {
        assert_eq!(
            Err(Error::new(ErrorReason::UnexpectedEos, Some(13))),
            skip_value(&mut json_token_iter(b"[[{\"a\": [1]}]"))
        );
    }

    #[test]
    fn skip_value_at_end_of_input() {
        assert_eq!(
            Err(Error::custom("expected value")),
            skip_value(&mut json_token_iter(b""))
        );
    }

    #[test]
    fn test_expect_string_or_null() {
        assert_eq!(Ok(None), expect_string_or_null(value_null(0)));
        assert_eq!(
            Ok(Some(EscapedStr::new("test\\n"))),
            expect_string_or_null(value_string(0, "test\\n"))
        );
        assert_eq!(
            Err(Error::custom("expected ValueString or ValueNull")),
            expect_string_or_null(value_bool(0, true))
        );
    }

    #[test]
    fn test_expect_number_or_null() {
        assert_eq!(Ok(None), expect_number_or_null(value_null(0)));
        assert_eq!(
            Ok(Some(Number::PosInt(5))),
            expect_number_or_null(value_number(0, Number::PosInt(5)))
        );
        assert_eq!(
            Err(Error::custom("expected ValueNumber or ValueNull")),
            expect_number_or_null(value_bool(0, true))
        );
    }

    #[test]
    fn test_expect_bool_or_null() {
        assert_eq!(Ok(None), expect_bool_or_null(value_null(0)));
        assert_eq!(Ok(Some(false)), expect_bool_or_null(value_bool(0, false)));
        assert_eq!(
            Err(Error::custom("expected ValueBool or ValueNull")),
            expect_bool_or_null(value_string(0, "true"))
        );
    }

    #[test]
    fn test_expect_blob_or_null() {
        assert_eq!(Ok(None), expect_blob_or_null(value_null(0)));
        assert_eq!(
            Ok(Some(Blob::new("hello!"))),
            expect_blob_or_null(value_string(0, "aGVsbG8h"))
        );
        assert!(expect_blob_or_null(value_string(0, "not base64")).is_err());
    }

    #[test]
    fn test_expect_timestamp_or_null() {
        assert_eq!(
            Ok(None),
            expect_timestamp_or_null(value_null(0), Format::EpochSeconds)
        );
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(1576540098))),
            expect_timestamp_or_null(
                value_number(0, Number::PosInt(1576540098)),
                Format::EpochSeconds
            )
        );
        assert_eq!(
            Ok(Some(Instant::from_secs_and_nanos(1576540098, 500_000_000))),
            expect_timestamp_or_null(
                value_number(0, Number::Float(1576540098.5)),
                Format::EpochSeconds
            )
        );
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(1576540098))),
            expect_timestamp_or_null(value_string(0, "2019-12-16T23:48:18Z"), Format::DateTime)
        );
        assert!(
            expect_timestamp_or_null(value_string(0, "1576540098"), Format::EpochSeconds).is_err()
        );
    }

    #[test]
    fn epoch_seconds_beyond_i64_are_rejected() {
        assert_eq!(
            Err(Error::custom("epoch seconds out of range for a timestamp")),
            expect_timestamp_or_null(
                value_number(0, Number::PosInt(i64::MAX as u64 + 1)),
                Format::EpochSeconds
            )
        );
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(i64::MAX))),
            expect_timestamp_or_null(
                value_number(0, Number::PosInt(i64::MAX as u64)),
                Format::EpochSeconds
            )
        );
    }
}
