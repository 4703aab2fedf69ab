/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON string"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    match value
        .bytes()
        .position(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        Some(index) => Cow::Owned(escape_string_inner(&value[..index], &value[index..])),
        None => Cow::Borrowed(value),
    }
}

fn escape_string_inner(start: &str, rest: &str) -> String {
    let mut escaped = String::with_capacity(start.len() + rest.len() + 1);
    escaped.push_str(start);
    for chr in rest.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            _ => escaped.push(chr),
        }
    }
    escaped
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub fn unescape_string(value: &str) -> Result<Cow<'_, str>, Error> {
    match value.bytes().position(|byte| byte == b'\\') {
        Some(index) => {
            unescape_string_inner(&value.as_bytes()[..index], &value.as_bytes()[index..])
                .map(Cow::Owned)
        }
        None => Ok(Cow::Borrowed(value)),
    }
}

fn unescape_string_inner(start: &[u8], rest: &[u8]) -> Result<String, Error> {
    let mut unescaped = Vec::with_capacity(start.len() + rest.len());
    unescaped.extend_from_slice(start);

    let mut index = 0;
    while index < rest.len() {
        if rest[index] != b'\\' {
            unescaped.push(rest[index]);
            index += 1;
            continue;
        }
        let escape = *rest.get(index + 1).ok_or(Error::UnexpectedEndOfString)?;
        match escape {
            b'u' => index += read_unicode_escapes(&rest[index..], &mut unescaped)?,
            _ => {
                unescaped.push(match escape {
                    b'\\' => b'\\',
                    b'/' => b'/',
                    b'"' => b'"',
                    b'b' => 0x08,
                    b'f' => 0x0C,
                    b'n' => b'\n',
                    b'r' => b'\r',
                    b't' => b'\t',
                    _ => return Err(Error::InvalidEscapeCharacter(escape.into())),
                });
                index += 2;
            }
        }
    }
    String::from_utf8(unescaped).map_err(|_| Error::InvalidUtf8)
}

fn is_utf16_low_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xDC00
}

fn is_utf16_high_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xD800
}

/// Reads one `\uXXXX` sequence from the start of `rest`
fn read_codepoint(rest: &[u8]) -> Result<u16, Error> {
    if rest.len() < 6 {
        return Err(Error::UnexpectedEndOfString);
    }
    if &rest[0..2] != b"\\u" {
        // the first word is always prefixed, so this is the low half of a pair
        return Err(Error::ExpectedSurrogatePair(
            String::from_utf8_lossy(&rest[0..6]).into(),
        ));
    }
    let digits = std::str::from_utf8(&rest[2..6]).map_err(|_| Error::InvalidUtf8)?;
    // from_str_radix would accept a leading `+`
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::InvalidUnicodeEscape(digits.into()));
    }
    u16::from_str_radix(digits, 16).map_err(|_| Error::InvalidUnicodeEscape(digits.into()))
}

/// Reads a Unicode escape, plus its low word when it starts a surrogate pair.
/// Returns the number of bytes consumed.
fn read_unicode_escapes(bytes: &[u8], into: &mut Vec<u8>) -> Result<usize, Error> {
    let high = read_codepoint(bytes)?;
    let (bytes_read, chr) = if is_utf16_high_surrogate(high) {
        let low = read_codepoint(&bytes[6..])?;
        if !is_utf16_low_surrogate(low) {
            return Err(Error::InvalidSurrogatePair(high, low));
        }
        let codepoint = 0x10000 + (high - 0xD800) as u32 * 0x400 + (low - 0xDC00) as u32;
        let chr = std::char::from_u32(codepoint).ok_or(Error::InvalidSurrogatePair(high, low))?;
        (12, chr)
    } else {
        let chr = std::char::from_u32(high as u32)
            .ok_or_else(|| Error::InvalidUnicodeEscape(format!("{:04X}", high)))?;
        (6, chr)
    };
    into.extend_from_slice(chr.encode_utf8(&mut [0; 4]).as_bytes());
    Ok(bytes_read)
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, Error};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("caf\u{e9}\\n", escape_string("caf\u{e9}\n").as_ref());
    }

    #[test]
    fn unescape_no_escapes() {
        let unescaped = unescape_string("test test").unwrap();
        assert_eq!("test test", unescaped);
        assert!(matches!(unescaped, Cow::Borrowed(_)));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\x08f\x0Co\to\r\n",
            unescape_string(r#"\bf\fo\to\r\n"#).unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("a/b", unescape_string(r#"a\/b"#).unwrap());
        assert_eq!("\u{e9}", unescape_string(r#"\u00e9"#).unwrap());
        assert_eq!("\u{1F600}", unescape_string(r#"\ud83d\ude00"#).unwrap());
    }

    #[test]
    fn unescape_failures() {
        assert_eq!(Err(Error::UnexpectedEndOfString), unescape_string("foo\\"));
        assert_eq!(
            Err(Error::InvalidEscapeCharacter('q')),
            unescape_string(r#"\q"#)
        );
        assert_eq!(
            Err(Error::InvalidUnicodeEscape("+04D".into())),
            unescape_string(r#"\u+04D"#)
        );
        assert_eq!(
            Err(Error::ExpectedSurrogatePair("ab1234".into())),
            unescape_string(r#"\ud83dab1234"#)
        );
        assert_eq!(
            Err(Error::InvalidSurrogatePair(0xD83D, 0x0041)),
            unescape_string(r#"\ud83d\u0041"#)
        );
        assert_eq!(Err(Error::UnexpectedEndOfString), unescape_string(r#"\u00"#));
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn escape_then_unescape(s in ".*") {
            let escaped = escape_string(&s);
            assert_eq!(s, unescape_string(&escaped).unwrap());
        }
    }
}
