/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use smithy_types::instant::{Format, FormatError};
use smithy_types::{base64, Blob, Instant, Number};

/// Writes exactly one JSON value into `output`.
///
/// Obtained from [`JsonObjectWriter::key`] or [`JsonArrayWriter::value`]; every method consumes
/// the writer so a position can only ever receive one value.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes a null value.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes the boolean `value`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a string `value`, escaping it.
    pub fn string(self, value: &str) {
        append_string(self.output, value);
    }

    /// Writes a string `value` without escaping it.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    /// Writes a number `value`.
    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes a blob `value` as a base64 encoded string.
    pub fn blob(self, value: &Blob) {
        append_string_unchecked(self.output, &base64::encode(value));
    }

    /// Writes an Instant `value` with the given `format`.
    ///
    /// Epoch seconds are written as a number, other formats as a string.
    pub fn instant(self, instant: &Instant, format: Format) -> Result<(), FormatError> {
        let formatted = instant.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            _ => append_string(self.output, &formatted),
        }
        Ok(())
    }

    /// Starts an array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    /// Starts an object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts a value with the given `key`.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;

        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");

        JsonValueWriter::new(&mut self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts a new value in the array.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(&mut self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string(json: &mut String, value: &str) {
    append_string_unchecked(json, &escape_string(value));
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            // JSON has no NaN or Infinity
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                // ryu::Buffer is a fixed-size stack allocation, so this is cheap
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonArrayWriter, JsonObjectWriter};
    use crate::serialize::{append_number, append_string_unchecked};
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Blob, Instant, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn objects_inside_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().start_object().finish();
        array.value().start_object().finish();
        array.finish();
        assert_eq!("[{},{}]", &output);
    }

    #[test]
    fn object_inside_object() {
        let mut output = String::new();
        let mut outer = JsonObjectWriter::new(&mut output);

        let mut inner = outer.key("Settings").start_object();
        inner.key("Formality").string("FORMAL");
        inner.finish();

        outer.finish();
        assert_eq!(r#"{"Settings":{"Formality":"FORMAL"}}"#, &output);
    }

    #[test]
    fn array_inside_array() {
        let mut output = String::new();
        let mut outer = JsonArrayWriter::new(&mut output);

        let mut inner = outer.value().start_array();
        inner.value().number(Number::PosInt(5));
        inner.finish();

        outer.value().start_array().finish();
        outer.finish();

        assert_eq!("[[5],[]]", &output);
    }

    #[test]
    fn object() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("true_val").boolean(true);
        object.key("false_val").boolean(false);
        object.key("some_string").string("some\nstring\nvalue");
        object.key("unchecked_str").string_unchecked("unchecked");
        object.key("some_number").number(Number::Float(3.5));
        object.key("some_null").null();
        object.key("some_blob").blob(&Blob::new("hello!"));

        let mut array = object.key("some_mixed_array").start_array();
        array.value().string("1");
        array.value().number(Number::NegInt(-2));
        array.value().boolean(true);
        array.value().null();
        array.finish();

        object.finish();

        assert_eq!(
            r#"{"true_val":true,"false_val":false,"some_string":"some\nstring\nvalue","unchecked_str":"unchecked","some_number":3.5,"some_null":null,"some_blob":"aGVsbG8h","some_mixed_array":["1",-2,true,null]}"#,
            &output
        );
    }

    #[test]
    fn keys_are_escaped() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("ba\"r").start_array().finish();
        object.finish();
        assert_eq!(r#"{"ba\"r":[]}"#, &output);
    }

    #[test]
    fn instants() {
        let mut output = String::new();

        let mut object = JsonObjectWriter::new(&mut output);
        object
            .key("epoch_seconds")
            .instant(&Instant::from_f64(5.2), Format::EpochSeconds)
            .unwrap();
        object
            .key("date_time")
            .instant(
                &Instant::from_str("2021-05-24T15:34:50.123Z", Format::DateTime).unwrap(),
                Format::DateTime,
            )
            .unwrap();
        let mut array = object.key("list").start_array();
        array
            .value()
            .instant(&Instant::from_epoch_seconds(1576540098), Format::EpochSeconds)
            .unwrap();
        array.finish();
        object.finish();

        assert_eq!(
            r#"{"epoch_seconds":5.2,"date_time":"2021-05-24T15:34:50.123Z","list":[1576540098]}"#,
            &output,
        )
    }

    #[test]
    fn unformattable_instant() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        assert!(object
            .key("far_future")
            .instant(&Instant::from_epoch_seconds(i64::MAX), Format::DateTime)
            .is_err());
    }

    #[test]
    fn append_string_unchecked_no_escaping() {
        let mut value = String::new();
        append_string_unchecked(&mut value, "totally\ninvalid");
        assert_eq!("\"totally\ninvalid\"", &value);
    }

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, number);
        formatted
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", format_test_number(Number::PosInt(1)));
        assert_eq!("-1", format_test_number(Number::NegInt(-1)));
        assert_eq!("0.0", format_test_number(Number::Float(0.0)));
        assert_eq!("10000000000.0", format_test_number(Number::Float(1e10)));
        assert_eq!("-1.2", format_test_number(Number::Float(-1.2)));

        // matches serde_json for values JSON can't represent
        assert_eq!(
            serde_json::to_string(&f64::NAN).unwrap(),
            format_test_number(Number::Float(f64::NAN))
        );
        assert_eq!(
            serde_json::to_string(&f64::NEG_INFINITY).unwrap(),
            format_test_number(Number::Float(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn large_floats_use_exponent_notation() {
        let formatted = format_test_number(Number::Float(3.3685009462609734e134));
        assert_eq!("3.3685009462609734e134", formatted);
        assert_eq!(
            Ok(3.3685009462609734e134),
            formatted.parse::<f64>()
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json_int_format(value: i64) {
            let number = if value < 0 { Number::NegInt(value) } else { Number::PosInt(value as u64) };
            assert_eq!(serde_json::to_string(&value).unwrap(), format_test_number(number))
        }

        #[test]
        fn floats_match_serde_json_by_value(value: f64) {
            // exponent spelling (`e134` vs `e+134`) may differ, the value may not
            let ours = format_test_number(Number::Float(value));
            let theirs = serde_json::to_string(&value).unwrap();
            if value.is_finite() {
                assert_eq!(ours.parse::<f64>().map(f64::to_bits), Ok(value.to_bits()));
                assert_eq!(theirs.parse::<f64>().map(f64::to_bits), Ok(value.to_bits()));
            } else {
                assert_eq!("null", ours);
                assert_eq!(theirs, ours);
            }
        }
    }
}
