/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by every generated service client.

pub mod base64;
pub mod error;
pub mod instant;
pub mod primitive;
pub mod retry;

pub use crate::error::Error;
pub use crate::instant::Instant;

/// Binary data, base64 encoded on text-based wire formats.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

macro_rules! to_num_fn {
    ($name:ident, $typ:ident) => {
        #[doc = concat!("Converts to a `", stringify!($typ), "`. This conversion may be lossy.")]
        pub fn $name(self) -> $typ {
            match self {
                Number::PosInt(val) => val as $typ,
                Number::NegInt(val) => val as $typ,
                Number::Float(val) => val as $typ,
            }
        }
    };
}

impl Number {
    to_num_fn!(to_f32, f32);
    to_num_fn!(to_f64, f64);

    to_num_fn!(to_i8, i8);
    to_num_fn!(to_i16, i16);
    to_num_fn!(to_i32, i32);
    to_num_fn!(to_i64, i64);

    to_num_fn!(to_u8, u8);
    to_num_fn!(to_u16, u16);
    to_num_fn!(to_u32, u32);
    to_num_fn!(to_u64, u64);
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Blob, Instant, Number};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::PosInt(5).to_i32(), 5);
        assert_eq!(Number::NegInt(-5).to_i64(), -5);
        assert_eq!(Number::Float(0.75).to_f32(), 0.75);
        assert_eq!(Number::Float(3.9).to_i32(), 3);
    }

    #[test]
    fn blob_equality() {
        assert_eq!(Blob::new("abc"), Blob::new(vec![b'a', b'b', b'c']));
        assert_ne!(Blob::new("abc"), Blob::new("abd"));
        assert_eq!(Blob::new("abc").into_inner(), b"abc".to_vec());
    }
}
