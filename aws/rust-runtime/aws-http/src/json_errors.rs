/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error envelope of the awsJson protocols.

use crate::request_id::apply_request_id;
use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, HeaderValue};
use smithy_json::deserialize::token::skip_value;
use smithy_json::deserialize::{json_token_iter, Error as DeserializeError, Token};
use smithy_types::Error as GenericError;
use std::borrow::Cow;

/// Strips the namespace prefix (up to `#`) and the trailing URL (from `:`) off an error code.
///
/// ```rust
/// # use aws_http::json_errors::sanitize_error_code;
/// assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
/// assert_eq!(
///     sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
///     "FooError"
/// );
/// ```
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

struct ErrorBody<'a> {
    code: Option<Cow<'a, str>>,
    message: Option<Cow<'a, str>>,
}

fn parse_error_body(bytes: &[u8]) -> Result<ErrorBody<'_>, DeserializeError> {
    let mut tokens = json_token_iter(bytes).peekable();
    let (mut typ, mut code, mut message) = (None, None, None);
    if let Some(Token::StartObject { .. }) = tokens.next().transpose()? {
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    if let Some(Ok(Token::ValueString { value, .. })) = tokens.peek() {
                        match key.as_escaped_str() {
                            "code" => code = Some(value.to_unescaped()?),
                            "__type" => typ = Some(value.to_unescaped()?),
                            "message" | "Message" | "errorMessage" => {
                                message = Some(value.to_unescaped()?)
                            }
                            _ => {}
                        }
                    }
                    skip_value(&mut tokens)?;
                }
                _ => {
                    return Err(DeserializeError::custom(
                        "expected object key or end object",
                    ))
                }
            }
        }
        if tokens.next().is_some() {
            return Err(DeserializeError::custom(
                "found more JSON tokens after completing parsing",
            ));
        }
    }
    Ok(ErrorBody {
        code: code.or(typ),
        message,
    })
}

fn error_type_from_header(headers: &HeaderMap<HeaderValue>) -> Result<Option<&str>, ToStrError> {
    headers
        .get("X-Amzn-Errortype")
        .map(|v| v.to_str())
        .transpose()
}

/// Reads the code, message and request id of an awsJson error response.
///
/// The code is taken from the `x-amzn-errortype` header when present, otherwise from the `code`
/// or `__type` member of the body.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> Result<GenericError, DeserializeError> {
    let body = response.body().as_ref();
    let body = if body.is_empty() { &b"{}"[..] } else { body };
    let ErrorBody { code, message } = parse_error_body(body)?;

    let mut err_builder = GenericError::builder();
    let header_code = error_type_from_header(response.headers())
        .map_err(|_| DeserializeError::custom("X-Amzn-Errortype header was not valid UTF-8"))?;
    if let Some(code) = header_code.or_else(|| code.as_deref()) {
        err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = message {
        err_builder.message(message);
    }
    apply_request_id(&mut err_builder, response.headers());
    let err = err_builder.build();
    tracing::trace!(error = %err, "parsed awsJson error envelope");
    Ok(err)
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_error_body, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::Error;
    use std::borrow::Cow;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        assert_eq!(
            Some(Cow::Borrowed("FooError")),
            parse_error_body(br#"{ "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn code_takes_priority() {
        assert_eq!(
            Some(Cow::Borrowed("BarError")),
            parse_error_body(br#"{ "code": "BarError", "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn alternate_message_keys() {
        for body in &[
            br#"{ "Message": "hello" }"#.to_vec(),
            br#"{ "errorMessage": "hello", "other": [1, {"a": null}] }"#.to_vec(),
        ] {
            assert_eq!(
                Some(Cow::Borrowed("hello")),
                parse_error_body(body).unwrap().message
            );
        }
    }

    #[test]
    fn ignore_unrecognized_fields() {
        let response = http::Response::builder()
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "asdf": 5, "fdsa": {}, "foo": "1" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            Error::builder().code("ResourceNotFoundException").build()
        );
    }

    #[test]
    fn empty_body() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(parse_generic_error(&response).unwrap(), Error::default());
    }

    #[test]
    fn malformed_body() {
        let response = http::Response::builder()
            .body(Bytes::from_static(br#"{ "__type": "#))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("com.amazonaws.kms#NotFoundException"), "NotFoundException");
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
