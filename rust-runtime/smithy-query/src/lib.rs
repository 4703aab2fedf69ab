/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use smithy_types::instant::{Format, FormatError};
use smithy_types::primitive::Encoder;
use smithy_types::{Instant, Number};
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the `Action` and `Version` of a request, then hands out value writers for its parameters.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Starts the top-level parameter named `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes the value of one parameter, or hands out nested writers for structure members,
/// list entries and map entries.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a member of the structure at this position.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Writes a boolean value.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(Encoder::from(value).encode());
    }

    /// Writes a string value, percent-encoding it.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Writes a number value. Non-finite floats are written as `NaN`, `Infinity` and `-Infinity`.
    pub fn number(mut self, value: Number) {
        self.write_param_name();
        match value {
            Number::PosInt(value) => self.output.push_str(&value.to_string()),
            Number::NegInt(value) => self.output.push_str(Encoder::from(value).encode()),
            Number::Float(value) => self.output.push_str(Encoder::from(value).encode()),
        }
    }

    /// Writes an instant value in the given `format`.
    pub fn instant(mut self, instant: &Instant, format: Format) -> Result<(), FormatError> {
        let formatted = instant.fmt(format)?;
        self.write_param_name();
        self.output.push_str(&encode(&formatted));
        Ok(())
    }

    /// Starts a list.
    ///
    /// Non-flat lists number their entries below a `member` segment, or below `member_override`
    /// when the model renames it. Flat lists number entries directly below the prefix.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    /// Starts a map whose entries write their key under `key_name` and value under `value_name`.
    pub fn start_map(self, flat: bool, key_name: &'a str, value_name: &'a str) -> QueryMapWriter<'a> {
        QueryMapWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    /// Starts the next entry of the list.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(entry_prefix))
    }

    /// Finishes the list. An empty list is written as a parameter without a value.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    /// Writes the `key` of the next entry and starts its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!("{}.entry.{}", self.prefix, self.next_index)
        };
        self.output.push_str(&format!(
            "&{}.{}={}",
            entry_prefix,
            self.key_name,
            encode(key)
        ));
        self.next_index += 1;
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", entry_prefix, self.value_name)),
        )
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "ListTopics", "2010-03-31");
        writer.finish();
        assert_eq!("Action=ListTopics&Version=2010-03-31", out);
    }

    #[test]
    fn query_list_writer() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateTopic", "2010-03-31");
        writer.prefix("Name").string("my-topic");

        let mut tags = writer.prefix("Tags").start_list(false, None);
        let mut first = tags.entry();
        first.prefix("Key").string("team");
        first.prefix("Value").string("data eng");
        tags.finish();

        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().string("a");
        flat.entry().string("b");
        flat.finish();

        let mut renamed = writer.prefix("Renamed").start_list(false, Some("item"));
        renamed.entry().number(Number::PosInt(3));
        renamed.finish();

        writer.finish();

        assert_eq!(
            "Action=CreateTopic&Version=2010-03-31\
             &Name=my-topic\
             &Tags.member.1.Key=team&Tags.member.1.Value=data%20eng\
             &Flat.1=a&Flat.2=b\
             &Renamed.item.1=3",
            out
        );
    }

    #[test]
    fn empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Action", "1");
        writer.prefix("Tags").start_list(false, None).finish();
        assert_eq!("Action=Action&Version=1&Tags=", out);
    }

    #[test]
    fn query_map_writer() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Publish", "2010-03-31");

        let mut attributes = writer.prefix("MessageAttributes").start_map(false, "Name", "Value");
        let mut value = attributes.entry("store");
        value.prefix("DataType").string("String");
        value.prefix("StringValue").string("example&corp");
        attributes.finish();

        let mut flat = writer.prefix("Flat").start_map(true, "K", "V");
        flat.entry("a b").boolean(true);
        flat.finish();

        writer.finish();

        assert_eq!(
            "Action=Publish&Version=2010-03-31\
             &MessageAttributes.entry.1.Name=store\
             &MessageAttributes.entry.1.Value.DataType=String\
             &MessageAttributes.entry.1.Value.StringValue=example%26corp\
             &Flat.1.K=a%20b&Flat.1.V=true",
            out
        );
    }

    #[test]
    fn primitives() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Test", "1");
        writer.prefix("neg").number(Number::NegInt(-5));
        writer.prefix("float").number(Number::Float(0.5));
        writer.prefix("inf").number(Number::Float(f64::NEG_INFINITY));
        writer.prefix("flag").boolean(false);
        writer
            .prefix("epoch")
            .instant(&Instant::from_epoch_seconds(5), Format::EpochSeconds)
            .unwrap();
        writer
            .prefix("date")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime)
            .unwrap();
        writer.finish();

        assert_eq!(
            "Action=Test&Version=1\
             &neg=-5&float=0.5&inf=-Infinity&flag=false\
             &epoch=5&date=2019-12-16T23%3A48%3A18Z",
            out
        );
    }
}
