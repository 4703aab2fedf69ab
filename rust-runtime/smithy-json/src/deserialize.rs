/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Number;
use ErrorReason::*;

mod error;
pub mod token;

pub use error::{Error, ErrorReason};
pub use token::{EscapeError, EscapedStr, Offset, Token};

/// JSON token parser as a Rust iterator
///
/// This parser will parse and yield exactly one [Token] per iterator `next()` call.
/// Validation is done on the fly, so it is possible for it to parse an invalid JSON document
/// until it gets to the first [Error].
///
/// JSON string values are left escaped in the [Token::ValueString] as an [EscapedStr],
/// which is a new type around a slice of original `input` bytes so that the caller can decide
/// when to unescape and allocate into a [String].
///
/// The parser *will* accept multiple valid JSON values. For example, `b"null true"` will
/// yield `ValueNull` and `ValueTrue`. It is the responsibility of the caller to handle this for
/// their use-case.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

/// Internal parser state for the iterator. Used to context between successive `next` calls.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    /// Entry point. Expecting any JSON value.
    Initial,
    /// Expecting the next token to be the *first* value in an array, or the end of the array.
    ArrayFirstValueOrEnd,
    /// Expecting the next token to the next value in an array, or the end of the array.
    ArrayNextValueOrEnd,
    /// Expecting the next token to be the *first* key in the object, or the end of the object.
    ObjectFirstKeyOrEnd,
    /// Expecting the next token to the next object key, or the end of the object.
    ObjectNextKeyOrEnd,
    /// Expecting the next token to be the value of a field in an object.
    ObjectFieldValue,
}

/// An iterator over a `&[u8]` that yields `Result<Token, Error>` with [Token] being JSON tokens.
/// Construct with [json_token_iter].
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    /// Previews the next byte.
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    /// Expects there to be another byte coming up, and previews it.
    /// If there isn't, an `UnexpectedEos` error is returned.
    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte().ok_or_else(|| self.error(UnexpectedEos))
    }

    /// Advances to the next byte in the stream.
    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    /// Advances and returns the next byte in the stream.
    fn next_byte(&mut self) -> Option<u8> {
        let next = self.peek_byte();
        self.advance();
        next
    }

    /// Expects there to be another byte coming up, and returns it while advancing.
    /// If there isn't, an `UnexpectedEos` error is returned.
    fn next_expect(&mut self) -> Result<u8, Error> {
        self.next_byte().ok_or_else(|| self.error(UnexpectedEos))
    }

    /// Creates an error at the given `offset` in the stream.
    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    /// Creates an error at the current offset in the stream.
    fn error(&self, reason: ErrorReason) -> Error {
        self.error_at(self.index, reason)
    }

    /// Advances until it hits a non-whitespace character or the end of the slice.
    fn discard_whitespace(&mut self) {
        while let Some(byte) = self.peek_byte() {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Returns the top of the state stack (current state).
    fn state(&self) -> State {
        self.state_stack[self.state_stack.len() - 1]
    }

    /// Replaces the top of the state stack with a new `state`.
    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    /// Returns current offset
    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    /// Discards the '{' character and pushes the `ObjectFirstKeyOrEnd` state.
    fn start_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        let byte = self.next_byte();
        debug_assert_eq!(byte, Some(b'{'));
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    /// Discards the '}' character and pops the current state.
    fn end_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        let (byte, state) = (self.next_byte(), self.state_stack.pop());
        debug_assert_eq!(byte, Some(b'}'));
        debug_assert!(
            state == Some(State::ObjectFirstKeyOrEnd) || state == Some(State::ObjectNextKeyOrEnd)
        );
        Token::EndObject { offset }
    }

    /// Discards the '[' character and pushes the `ArrayFirstValueOrEnd` state.
    fn start_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        let byte = self.next_byte();
        debug_assert_eq!(byte, Some(b'['));
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    /// Discards the ']' character and pops the current state.
    fn end_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        let (byte, state) = (self.next_byte(), self.state_stack.pop());
        debug_assert_eq!(byte, Some(b']'));
        debug_assert!(
            state == Some(State::ArrayFirstValueOrEnd) || state == Some(State::ArrayNextValueOrEnd)
        );
        Token::EndArray { offset }
    }

    /// Reads a JSON string out of the stream.
    fn read_string(&mut self) -> Result<&'a str, Error> {
        // Skip the starting quote
        let quote_byte = self.next_byte();
        debug_assert_eq!(quote_byte, Some(b'\"'));

        // Read bytes until a non-escaped end-quote. Unescaping is left to the caller
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&self.input[start..self.index])
                        .map_err(|_| self.error(InvalidUtf8))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    self.advance();
                    self.next_expect()?;
                }
                byte @ 0x00..=0x1F => return Err(self.error(UnexpectedControlCharacter(byte))),
                _ => self.advance(),
            }
        }
    }

    /// Expects the given literal to be next in the stream.
    fn expect_literal(&mut self, expected: &[u8]) -> Result<(), Error> {
        let (start, end) = (self.index, self.index + expected.len());
        if end > self.input.len() {
            return Err(self.error_at(self.input.len(), UnexpectedEos));
        }
        if expected != &self.input[start..end] {
            return Err(self.error_at(
                start,
                ExpectedLiteral(std::str::from_utf8(expected).unwrap_or_default().into()),
            ));
        }
        self.index = end;
        Ok(())
    }

    /// Advances passed the exponent part of a floating point number.
    fn skip_exponent(&mut self) {
        self.advance();
        match self.peek_byte() {
            Some(b'-') => self.advance(),
            Some(b'+') => self.advance(),
            _ => {}
        }
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.advance();
        }
    }

    /// Advances passed the decimal part of a floating point number.
    fn skip_decimal(&mut self) {
        self.advance();
        while let Some(byte) = self.peek_byte() {
            match byte {
                b'0'..=b'9' => self.advance(),
                b'e' | b'E' => self.skip_exponent(),
                _ => break,
            }
        }
    }

    /// Starting from the current location in the stream, this advances until
    /// it finds a character that doesn't look like its part of a number, and then
    /// returns `(start_index, end_index, negative, floating)`, with `start_index`
    /// and `end_index` representing the slice of the stream that is the number,
    /// `negative` whether or not it is a negative number, and `floating` whether or not
    /// it is floating point number.
    fn scan_number(&mut self) -> (usize, usize, bool, bool) {
        let start_index = self.index;
        let negative = if self.peek_byte() == Some(b'-') {
            self.advance();
            true
        } else {
            false
        };
        let mut floating = false;
        while let Some(byte) = self.peek_byte() {
            match byte {
                b'0'..=b'9' => self.advance(),
                b'.' => {
                    floating = true;
                    self.skip_decimal();
                }
                b'e' | b'E' => {
                    floating = true;
                    self.skip_exponent();
                }
                _ => break,
            }
        }
        (start_index, self.index, negative, floating)
    }

    /// Expects a number in the stream, and returns its value.
    fn expect_number(&mut self) -> Result<Number, Error> {
        let (start, end, negative, floating) = self.scan_number();
        // every byte in the range was checked by scan_number, so this is ASCII
        let number_str = std::str::from_utf8(&self.input[start..end])
            .map_err(|_| self.error_at(start, InvalidUtf8))?;

        use std::str::FromStr;
        Ok(if floating {
            Number::Float(
                f64::from_str(number_str).map_err(|_| self.error_at(start, InvalidNumber))?,
            )
        } else if negative {
            // If the negative value overflows, then stuff it into an f64
            let positive = u64::from_str(&number_str[1..])
                .map_err(|_| self.error_at(start, InvalidNumber))?;
            let negative = positive.wrapping_neg() as i64;
            if negative > 0 {
                Number::Float(-(positive as f64))
            } else {
                Number::NegInt(negative)
            }
        } else {
            Number::PosInt(
                u64::from_str(number_str).map_err(|_| self.error_at(start, InvalidNumber))?,
            )
        })
    }

    /// Reads a value from the stream and returns the next token. For objects and arrays,
    /// the entire object or array will not be ready, but rather, a [Token::StartObject]/[Token::StartArray]
    /// will be returned.
    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = self.offset();
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => self.read_string().map(|value| Token::ValueString {
                offset,
                value: EscapedStr::new(value),
            }),
            byte => {
                let value = match byte {
                    b'n' => self
                        .expect_literal(b"null")
                        .map(|_| Token::ValueNull { offset }),
                    b't' => self
                        .expect_literal(b"true")
                        .map(|_| Token::ValueBool { offset, value: true }),
                    b'f' => self
                        .expect_literal(b"false")
                        .map(|_| Token::ValueBool { offset, value: false }),
                    b'-' | (b'0'..=b'9') => self
                        .expect_number()
                        .map(|value| Token::ValueNumber { offset, value }),
                    byte => Err(self.error(UnexpectedToken(
                        byte.into(),
                        "'{', '[', '\"', 'null', 'true', 'false', <number>",
                    ))),
                }?;
                // Verify there are no unexpected trailers on the end of the value
                if let Some(byte) = self.peek_byte() {
                    match byte {
                        b' ' | b'\t' | b'\r' | b'\n' | b'}' | b']' | b',' => {}
                        _ => {
                            return Err(self.error(UnexpectedToken(
                                byte.into(),
                                "<whitespace>, '}', ']', ','",
                            )))
                        }
                    }
                }
                Ok(value)
            }
        }
    }

    /// Handles the [State::ArrayFirstValueOrEnd] state.
    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    /// Handles the [State::ArrayNextValueOrEnd] state.
    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    /// Expects an object key.
    fn object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = self.offset();
        match self.peek_expect()? {
            b'"' => {
                self.replace_state(State::ObjectFieldValue);
                self.read_string().map(|s| Token::ObjectKey {
                    offset,
                    key: EscapedStr::new(s),
                })
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "'\"'"))),
        }
    }

    /// Handles the [State::ObjectFirstKeyOrEnd] state.
    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            _ => self.object_key(),
        }
    }

    /// Handles the [State::ObjectNextKeyOrEnd] state.
    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                self.object_key()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    /// Handles the [State::ObjectFieldValue] state.
    fn state_object_field_value(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b':' => {
                self.advance();
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "':'"))),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        let result = match self.state() {
            State::Initial => self.peek_byte().map(|_| self.read_value()),
            State::ArrayFirstValueOrEnd => Some(self.state_array_first_value_or_end()),
            State::ArrayNextValueOrEnd => Some(self.state_array_next_value_or_end()),
            State::ObjectFirstKeyOrEnd => Some(self.state_object_first_key_or_end()),
            State::ObjectNextKeyOrEnd => Some(self.state_object_next_key_or_end()),
            State::ObjectFieldValue => Some(self.state_object_field_value()),
        };
        // Invalid JSON ends the iteration
        if let Some(Err(_)) = &result {
            self.index = self.input.len();
            self.state_stack.clear();
            self.state_stack.push(State::Initial);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::deserialize::{Error, ErrorReason::*};
    use crate::deserialize::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use crate::deserialize::{json_token_iter, EscapedStr, Token};
    use proptest::prelude::*;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert!(json_token_iter(b"").next().is_none());
        assert!(json_token_iter(b" ").next().is_none());
        assert!(json_token_iter(b"\t").next().is_none());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        assert_eq!(value_string(0, ""), iter.next());
        assert!(iter.next().is_none());

        let mut iter = json_token_iter(b" \r\n\t \"\"  ");
        assert_eq!(value_string(5, ""), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_array() {
        let mut iter = json_token_iter(b"[]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(end_array(1), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_object() {
        let mut iter = json_token_iter(b"{}");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(end_object(1), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_null() {
        assert_eq!(value_null(1), json_token_iter(b" null ").next());

        let mut iter = json_token_iter(b"[null, null,null]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_null(1), iter.next());
        assert_eq!(value_null(7), iter.next());
        assert_eq!(value_null(12), iter.next());
        assert_eq!(end_array(16), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_bools() {
        assert_eq!(
            Some(Err(Error::new(UnexpectedEos, Some(3)))),
            json_token_iter(b"tru").next()
        );
        assert_eq!(
            Some(Err(Error::new(ExpectedLiteral("true".to_string()), Some(0)))),
            json_token_iter(b"trux").next()
        );
        assert_eq!(
            Some(Err(Error::new(
                UnexpectedToken('e', "<whitespace>, '}', ']', ','"),
                Some(4)
            ))),
            json_token_iter(b"truee").next()
        );
        assert_eq!(value_bool(0, true), json_token_iter(b"true").next());
        assert_eq!(value_bool(0, false), json_token_iter(b"false").next());
    }

    #[test]
    fn literal_errors_are_not_masked_by_trailers() {
        assert_eq!(
            Some(Err(Error::new(UnexpectedEos, Some(10)))),
            json_token_iter(b"[true, nul").nth(2)
        );
        assert_eq!(
            Some(Err(Error::new(ExpectedLiteral("false".to_string()), Some(1)))),
            json_token_iter(b"[falsy]").nth(1)
        );
        assert_eq!(
            Some(Err(Error::new(ExpectedLiteral("null".to_string()), Some(0)))),
            json_token_iter(b"nulL").next()
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            value_number(0, Number::PosInt(1576540098)),
            json_token_iter(b"1576540098").next()
        );
        assert_eq!(
            value_number(0, Number::NegInt(-5)),
            json_token_iter(b"-5").next()
        );
        assert_eq!(
            value_number(0, Number::Float(1576540098.52)),
            json_token_iter(b"1576540098.52").next()
        );
        assert_eq!(
            value_number(0, Number::Float(-2.5e-3)),
            json_token_iter(b"-2.5E-3").next()
        );
        assert_eq!(
            value_number(0, Number::Float(-(u64::MAX as f64))),
            json_token_iter(b"-18446744073709551615").next()
        );
        assert_eq!(
            Some(Err(Error::new(InvalidNumber, Some(0)))),
            json_token_iter(b"1.2.3").next()
        );
        assert_eq!(
            Some(Err(Error::new(InvalidNumber, Some(0)))),
            json_token_iter(b"-").next()
        );
    }

    #[test]
    fn test_object_with_keys() {
        let mut iter = json_token_iter(br#"{ "KeyId" : "1234abcd", "Enabled":true, "Size": 32 }"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(2, "KeyId"), iter.next());
        assert_eq!(value_string(12, "1234abcd"), iter.next());
        assert_eq!(object_key(24, "Enabled"), iter.next());
        assert_eq!(value_bool(34, true), iter.next());
        assert_eq!(object_key(40, "Size"), iter.next());
        assert_eq!(value_number(48, Number::PosInt(32)), iter.next());
        assert_eq!(end_object(51), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_nested_structures() {
        let mut iter = json_token_iter(br#"{"Tags":[{"TagKey":"k"},[]]}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "Tags"), iter.next());
        assert_eq!(start_array(8), iter.next());
        assert_eq!(start_object(9), iter.next());
        assert_eq!(object_key(10, "TagKey"), iter.next());
        assert_eq!(value_string(19, "k"), iter.next());
        assert_eq!(end_object(22), iter.next());
        assert_eq!(start_array(24), iter.next());
        assert_eq!(end_array(25), iter.next());
        assert_eq!(end_array(26), iter.next());
        assert_eq!(end_object(27), iter.next());
        assert!(iter.next().is_none());
    }

    #[test]
    fn escaped_strings_stay_escaped() {
        let mut iter = json_token_iter(br#""line\nbreak \"quoted\"""#);
        match iter.next() {
            Some(Ok(Token::ValueString { value, .. })) => {
                assert_eq!(r#"line\nbreak \"quoted\""#, value.as_escaped_str());
                assert_eq!("line\nbreak \"quoted\"", value.to_unescaped().unwrap());
            }
            other => panic!("unexpected token: {:?}", other),
        }
        assert_eq!(
            Some(Ok(Token::ValueString {
                offset: crate::deserialize::Offset(0),
                value: EscapedStr::new("unicode: \\u00e9")
            })),
            json_token_iter(br#""unicode: \u00e9""#).next()
        );
    }

    #[test]
    fn unclosed_containers() {
        let mut iter = json_token_iter(b"[");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(Some(Err(Error::new(UnexpectedEos, Some(1)))), iter.next());
        assert!(iter.next().is_none());

        let mut iter = json_token_iter(br#"{"foo""#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "foo"), iter.next());
        assert_eq!(Some(Err(Error::new(UnexpectedEos, Some(6)))), iter.next());
        assert!(iter.next().is_none());

        let mut iter = json_token_iter(br#""unterminated"#);
        assert_eq!(
            Some(Err(Error::new(UnexpectedEos, Some(13)))),
            iter.next()
        );
    }

    #[test]
    fn unexpected_tokens() {
        let mut iter = json_token_iter(b"[1 2]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_number(1, Number::PosInt(1)), iter.next());
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('2', "']', ','"), Some(3)))),
            iter.next()
        );

        let mut iter = json_token_iter(b"{5: 1}");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('5', "'\"'"), Some(1)))),
            iter.next()
        );

        let mut iter = json_token_iter(br#"{"a" 1}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "a"), iter.next());
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('1', "':'"), Some(5)))),
            iter.next()
        );

        assert_eq!(
            Some(Err(Error::new(UnexpectedControlCharacter(0x0A), Some(1)))),
            json_token_iter(b"\"\n\"").next()
        );
    }

    proptest! {
        #[test]
        fn string_values_match_serde_json(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let mut iter = json_token_iter(json.as_bytes());
            match iter.next() {
                Some(Ok(Token::ValueString { value, .. })) => {
                    prop_assert_eq!(s, value.to_unescaped().unwrap().to_string());
                }
                other => return Err(TestCaseError::fail(format!("unexpected token: {:?}", other))),
            }
            prop_assert!(iter.next().is_none());
        }

        #[test]
        fn integers_match_serde_json(value: i64) {
            let json = serde_json::to_string(&value).unwrap();
            let expected = if value < 0 { Number::NegInt(value) } else { Number::PosInt(value as u64) };
            prop_assert_eq!(value_number(0, expected), json_token_iter(json.as_bytes()).next());
        }
    }
}
