/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Text encoding of primitives for query strings and XML bodies.
//!
//! Unlike JSON, these formats carry non-finite floats as `NaN`, `Infinity`
//! and `-Infinity`.

use std::fmt;

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Failure to parse a primitive from its text encoding
#[derive(Debug, Eq, PartialEq)]
pub struct PrimitiveParseError(&'static str);

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse input as {}", self.0)
    }
}

impl std::error::Error for PrimitiveParseError {}

/// Parses a primitive from its text encoding
///
/// ```rust
/// use smithy_types::primitive::Parse;
/// assert_eq!(i32::parse_smithy_primitive("123"), Ok(123));
/// assert!(f64::parse_smithy_primitive("-Infinity").unwrap().is_infinite());
/// ```
pub trait Parse
where
    Self: Sized,
{
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError("bool")),
        }
    }
}

macro_rules! parse_int {
    ($typ:ident) => {
        impl Parse for $typ {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                input
                    .parse::<$typ>()
                    .map_err(|_| PrimitiveParseError(stringify!($typ)))
            }
        }
    };
}

parse_int!(i8);
parse_int!(i16);
parse_int!(i32);
parse_int!(i64);

macro_rules! parse_float {
    ($typ:ident) => {
        impl Parse for $typ {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                match input {
                    NAN => Ok($typ::NAN),
                    INFINITY => Ok($typ::INFINITY),
                    NEG_INFINITY => Ok($typ::NEG_INFINITY),
                    other => other
                        .parse::<$typ>()
                        .map_err(|_| PrimitiveParseError(stringify!($typ))),
                }
            }
        }
    };
}

parse_float!(f32);
parse_float!(f64);

/// Encodes a primitive into text
///
/// ```rust
/// use smithy_types::primitive::Encoder;
/// assert_eq!(Encoder::from(12_i32).encode(), "12");
/// assert_eq!(Encoder::from(f64::NAN).encode(), "NaN");
/// ```
pub struct Encoder {
    value: Inner,
    num: Buffers,
}

enum Inner {
    Bool(bool),
    I64(i64),
    F32(f32),
    F64(f64),
}

#[derive(Default)]
struct Buffers {
    int: itoa::Buffer,
    float: ryu::Buffer,
}

impl Encoder {
    pub fn encode(&mut self) -> &str {
        match self.value {
            Inner::Bool(true) => "true",
            Inner::Bool(false) => "false",
            Inner::I64(v) => self.num.int.format(v),
            Inner::F32(v) if v.is_nan() => NAN,
            Inner::F32(v) if v == f32::INFINITY => INFINITY,
            Inner::F32(v) if v == f32::NEG_INFINITY => NEG_INFINITY,
            Inner::F32(v) => self.num.float.format_finite(v),
            Inner::F64(v) if v.is_nan() => NAN,
            Inner::F64(v) if v == f64::INFINITY => INFINITY,
            Inner::F64(v) if v == f64::NEG_INFINITY => NEG_INFINITY,
            Inner::F64(v) => self.num.float.format_finite(v),
        }
    }
}

impl From<Inner> for Encoder {
    fn from(value: Inner) -> Self {
        Encoder {
            value,
            num: Buffers::default(),
        }
    }
}

impl From<bool> for Encoder {
    fn from(input: bool) -> Self {
        Inner::Bool(input).into()
    }
}

macro_rules! encode_int {
    ($typ:ident) => {
        impl From<$typ> for Encoder {
            fn from(input: $typ) -> Self {
                Inner::I64(input as i64).into()
            }
        }
    };
}

encode_int!(i8);
encode_int!(i16);
encode_int!(i32);
encode_int!(i64);

impl From<f32> for Encoder {
    fn from(input: f32) -> Self {
        Inner::F32(input).into()
    }
}

impl From<f64> for Encoder {
    fn from(input: f64) -> Self {
        Inner::F64(input).into()
    }
}

#[cfg(test)]
mod test {
    use super::{Encoder, Parse};

    #[test]
    fn encodes_primitives() {
        assert_eq!(Encoder::from(true).encode(), "true");
        assert_eq!(Encoder::from(-5_i8).encode(), "-5");
        assert_eq!(Encoder::from(i64::MAX).encode(), "9223372036854775807");
        assert_eq!(Encoder::from(1.5_f32).encode(), "1.5");
        assert_eq!(Encoder::from(0.1_f32).encode(), "0.1");
        assert_eq!(Encoder::from(f64::INFINITY).encode(), "Infinity");
        assert_eq!(Encoder::from(f32::NEG_INFINITY).encode(), "-Infinity");
    }

    #[test]
    fn parses_primitives() {
        assert_eq!(bool::parse_smithy_primitive("true"), Ok(true));
        assert!(bool::parse_smithy_primitive("True").is_err());
        assert_eq!(i16::parse_smithy_primitive("-42"), Ok(-42));
        assert!(i8::parse_smithy_primitive("300").is_err());
        assert_eq!(f32::parse_smithy_primitive("2.25"), Ok(2.25));
        assert!(f64::parse_smithy_primitive("NaN").unwrap().is_nan());
        assert_eq!(f64::parse_smithy_primitive("Infinity"), Ok(f64::INFINITY));
        assert!(f64::parse_smithy_primitive("one").is_err());
    }
}
