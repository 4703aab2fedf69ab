/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::result::SdkError;
use smithy_types::error::Builder as GenericErrorBuilder;
use smithy_types::Error as GenericError;
use http::{HeaderMap, HeaderValue};

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl<E> RequestId for SdkError<E> {
    fn request_id(&self) -> Option<&str> {
        match self {
            Self::ResponseError { raw, .. } => extract_request_id(raw.headers()),
            Self::ServiceError { raw, .. } => extract_request_id(raw.headers()),
            _ => None,
        }
    }
}

impl RequestId for GenericError {
    fn request_id(&self) -> Option<&str> {
        GenericError::request_id(self)
    }
}

impl<B> RequestId for http::Response<B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.headers())
    }
}

/// Applies the request ID found in `headers`, if any, to a generic error builder
pub fn apply_request_id<'a>(
    builder: &'a mut GenericErrorBuilder,
    headers: &HeaderMap<HeaderValue>,
) -> &'a mut GenericErrorBuilder {
    match extract_request_id(headers) {
        Some(request_id) => builder.request_id(request_id),
        None => builder,
    }
}

/// Extracts a request ID from HTTP response headers
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithy_http::middleware::ResponseBody;

    fn response(request_id: Option<&'static str>) -> http::Response<ResponseBody> {
        let mut builder = http::Response::builder().status(400);
        if let Some(request_id) = request_id {
            builder = builder.header("x-amzn-requestid", request_id);
        }
        builder.body(ResponseBody::from("{}")).unwrap()
    }

    #[test]
    fn test_request_id_sdk_error() {
        let err = SdkError::ServiceError {
            raw: response(None),
            err: (),
        };
        assert_eq!(None, err.request_id());
        let err = SdkError::ServiceError {
            raw: response(Some("some-request-id")),
            err: (),
        };
        assert_eq!(Some("some-request-id"), err.request_id());
        let err = SdkError::<()>::ResponseError {
            raw: response(Some("other-request-id")),
            err: "truncated body".into(),
        };
        assert_eq!(Some("other-request-id"), err.request_id());
        assert_eq!(
            None,
            SdkError::<()>::DispatchFailure("timeout".into()).request_id()
        );
    }

    #[test]
    fn test_extract_request_id() {
        let mut headers = HeaderMap::new();
        assert_eq!(None, extract_request_id(&headers));

        headers.append(
            "x-amzn-requestid",
            HeaderValue::from_static("some-request-id"),
        );
        assert_eq!(Some("some-request-id"), extract_request_id(&headers));

        headers.append(
            "x-amz-request-id",
            HeaderValue::from_static("other-request-id"),
        );
        assert_eq!(Some("some-request-id"), extract_request_id(&headers));

        headers.remove("x-amzn-requestid");
        assert_eq!(Some("other-request-id"), extract_request_id(&headers));
    }

    #[test]
    fn test_apply_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-requestid",
            HeaderValue::from_static("some-request-id"),
        );
        let mut builder = GenericError::builder();
        let err = apply_request_id(builder.code("NotFound"), &headers).build();
        assert_eq!(RequestId::request_id(&err), Some("some-request-id"));
        assert_eq!(err.code(), Some("NotFound"));
    }
}
