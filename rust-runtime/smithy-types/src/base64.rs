/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A correct, small, but not especially fast base64 implementation using the
//! standard alphabet with padding.

use std::error::Error;
use std::fmt;

const BASE64_ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PADDING: u8 = b'=';

/// Encode `input` into base64
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    encode_inner(input.as_ref())
}

fn encode_inner(input: &[u8]) -> String {
    // every 3 byte group (24 bits) becomes 4 characters of 6 bits each
    let char_ct = encoded_length(input.len());
    let mut output = String::with_capacity(char_ct);
    for chunk in input.chunks(3) {
        let mut block: u32 = 0;
        for (idx, byte) in chunk.iter().enumerate() {
            block |= (*byte as u32) << ((2 - idx) * 8);
        }
        let num_sextets = ((chunk.len() * 8) + 5) / 6;
        for idx in 0..num_sextets {
            let sextet = (block >> (18 - (6 * idx))) & 0b0011_1111;
            output.push(BASE64_ENCODE_TABLE[sextet as usize] as char);
        }
        for _ in 0..(4 - num_sextets) {
            output.push(PADDING as char);
        }
    }
    debug_assert_eq!(output.len(), char_ct);
    output
}

/// Number of characters needed to base64 encode `length` bytes
pub fn encoded_length(length: usize) -> usize {
    ((length + 2) / 3) * 4
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodeError {
    /// The input length is not a multiple of 4
    InvalidLength,
    /// A byte outside of the base64 alphabet
    InvalidByte(u8),
    /// Padding in the wrong place or more than two padding characters
    InvalidPadding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength => write!(f, "base64 input length must be a multiple of 4"),
            DecodeError::InvalidByte(byte) => write!(f, "invalid base64 byte: {:#04x}", byte),
            DecodeError::InvalidPadding => write!(f, "invalid base64 padding"),
        }
    }
}

impl Error for DecodeError {}

/// Decode `input` from base64
pub fn decode<T: AsRef<str>>(input: T) -> Result<Vec<u8>, DecodeError> {
    decode_inner(input.as_ref().as_bytes())
}

fn decode_inner(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength);
    }
    let chunk_ct = input.len() / 4;
    let mut output = Vec::with_capacity(chunk_ct * 3);
    for (chunk_idx, chunk) in input.chunks(4).enumerate() {
        let padding = chunk.iter().rev().take_while(|b| **b == PADDING).count();
        if padding > 2 || (padding > 0 && chunk_idx + 1 != chunk_ct) {
            return Err(DecodeError::InvalidPadding);
        }
        let mut block: u32 = 0;
        for (idx, byte) in chunk[..4 - padding].iter().enumerate() {
            let sextet = decode_sextet(*byte).ok_or(DecodeError::InvalidByte(*byte))?;
            block |= (sextet as u32) << (18 - (6 * idx));
        }
        for idx in 0..(3 - padding) {
            output.push((block >> (16 - (8 * idx))) as u8);
        }
    }
    Ok(output)
}

fn decode_sextet(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::{decode, encode, DecodeError};
    use proptest::prelude::*;

    #[test]
    fn test_base64() {
        assert_eq!(encode("abc"), "YWJj");
        assert_eq!(encode("anything you want."), "YW55dGhpbmcgeW91IHdhbnQu");
        assert_eq!(encode("anything you want"), "YW55dGhpbmcgeW91IHdhbnQ=");
        assert_eq!(encode("anything you wan"), "YW55dGhpbmcgeW91IHdhbg==");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_base64_utf8() {
        let decoded = "ユニコードとはか？";
        let encoded = "44Om44OL44Kz44O844OJ44Go44Gv44GL77yf";
        assert_eq!(encode(decoded), encoded);
        assert_eq!(decode(encoded).unwrap(), decoded.as_bytes());
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("YWJj").unwrap(), b"abc");
        assert_eq!(decode("YW55dGhpbmcgeW91IHdhbg==").unwrap(), b"anything you wan");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("YWJ"), Err(DecodeError::InvalidLength));
        assert_eq!(decode("YW!j"), Err(DecodeError::InvalidByte(b'!')));
        assert_eq!(decode("Y==="), Err(DecodeError::InvalidPadding));
        assert_eq!(decode("YQ==YWJj"), Err(DecodeError::InvalidPadding));
        assert_eq!(decode("Y=Jj"), Err(DecodeError::InvalidByte(b'=')));
    }

    proptest! {
        #[test]
        fn matches_base64_crate(input: Vec<u8>) {
            let encoded = encode(&input);
            prop_assert_eq!(&encoded, &base64::encode(&input));
            prop_assert_eq!(decode(&encoded).unwrap(), input);
        }
    }
}
