/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error envelope of the awsQuery protocol.
//!
//! ```xml
//! <ErrorResponse>
//!     <Error>
//!         <Type>Sender</Type>
//!         <Code>InvalidParameter</Code>
//!         <Message>Invalid parameter: TopicArn</Message>
//!     </Error>
//!     <RequestId>a8dec8b3-33a4-11df-8963-01868b7c937a</RequestId>
//! </ErrorResponse>
//! ```

use smithy_types::Error as GenericError;
use smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlError};
use std::convert::TryFrom;

/// Reads the code, message and request id of an awsQuery error response.
pub fn parse_generic_error(body: &[u8]) -> Result<GenericError, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut err_builder = GenericError::builder();
    while let Some(mut tag) = root.next_tag()? {
        match tag.start_el().local() {
            "Error" => {
                while let Some(mut error_field) = tag.next_tag()? {
                    match error_field.start_el().local() {
                        "Code" => {
                            err_builder.code(try_data(&mut error_field)?);
                        }
                        "Message" => {
                            err_builder.message(try_data(&mut error_field)?);
                        }
                        _ => {}
                    }
                }
            }
            "RequestId" => {
                err_builder.request_id(try_data(&mut tag)?);
            }
            _ => {}
        }
    }
    let err = err_builder.build();
    tracing::trace!(error = %err, "parsed awsQuery error envelope");
    Ok(err)
}

/// Returns a decoder scoped to the `<Error>` element of an awsQuery error response so that
/// modeled error members can be read from it.
pub fn error_scope<'a, 'b>(doc: &'a mut Document<'b>) -> Result<ScopedDecoder<'b, 'a>, XmlError> {
    let root = doc
        .next_start_element()?
        .ok_or_else(|| XmlError::custom("no root found searching for an Error"))?;
    if !root.matches("ErrorResponse") {
        return Err(XmlError::custom("expected ErrorResponse as root"));
    }

    while let Some(el) = doc.next_start_element()? {
        if el.matches("Error") && el.depth() == 1 {
            return Ok(doc.scoped_to(el));
        }
        // otherwise, ignore it
    }
    Err(XmlError::custom("no Error found inside of ErrorResponse"))
}

#[cfg(test)]
mod test {
    use crate::query_errors::{error_scope, parse_generic_error};
    use smithy_xml::decode::{try_data, Document};
    use std::convert::TryFrom;

    #[test]
    fn parse_wrapped_error() {
        let xml = br#"<ErrorResponse>
    <Error>
        <Type>Sender</Type>
        <Code>InvalidParameter</Code>
        <Message>Invalid parameter: TopicArn &amp; more</Message>
        <AnotherSetting>some value</AnotherSetting>
    </Error>
    <RequestId>a8dec8b3-33a4-11df-8963-01868b7c937a</RequestId>
</ErrorResponse>
"#;
        let parsed = parse_generic_error(xml).expect("valid xml");
        assert_eq!(parsed.code(), Some("InvalidParameter"));
        assert_eq!(parsed.message(), Some("Invalid parameter: TopicArn & more"));
        assert_eq!(
            parsed.request_id(),
            Some("a8dec8b3-33a4-11df-8963-01868b7c937a")
        );
    }

    #[test]
    fn error_scope_finds_error_element() {
        let xml = br#"<ErrorResponse>
    <RequestId>foo-id</RequestId>
    <Error>
        <Type>Sender</Type>
        <Code>NotFound</Code>
        <Message>Topic does not exist</Message>
    </Error>
</ErrorResponse>
"#;
        let mut doc = Document::try_from(&xml[..]).expect("valid");
        let mut error = error_scope(&mut doc).expect("contains error");
        let mut codes = vec![];
        while let Some(mut tag) = error.next_tag().expect("valid xml") {
            if tag.start_el().matches("Code") {
                codes.push(try_data(&mut tag).expect("valid").to_string());
            }
        }
        assert_eq!(codes, vec!["NotFound".to_string()]);
    }

    #[test]
    fn error_scope_requires_error_response() {
        let xml = br#"<CreateTopicResponse><Error/></CreateTopicResponse>"#;
        let mut doc = Document::try_from(&xml[..]).expect("valid");
        assert!(error_scope(&mut doc).is_err());
    }

    #[test]
    fn invalid_escape_in_envelope_is_an_error() {
        let xml = br#"<ErrorResponse><Error code="&nope;"><Code>Throttled</Code></Error></ErrorResponse>"#;
        assert!(parse_generic_error(xml).is_err());
    }

    #[test]
    fn not_xml() {
        assert!(parse_generic_error(b"{\"__type\": \"FooError\"}").is_err());
    }
}
