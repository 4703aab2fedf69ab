/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the response side of the SDK's framework agnostic HTTP interface.
//!
//! Sending the request is left to the transport; [`load_response`] takes over once a response
//! has arrived.

use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;
use tracing::{debug, debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

/// The body retained on a raw response after parsing.
#[derive(Debug)]
pub struct ResponseBody(Inner);

impl ResponseBody {
    /// The loaded body, unless it was handed to the parser unread or failed to load.
    pub fn bytes(&self) -> Option<&Bytes> {
        match &self.0 {
            Inner::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<&'static str> for ResponseBody {
    fn from(s: &'static str) -> Self {
        ResponseBody(Inner::Bytes(Bytes::from_static(s.as_bytes())))
    }
}

impl From<Bytes> for ResponseBody {
    fn from(bytes: Bytes) -> Self {
        ResponseBody(Inner::Bytes(bytes))
    }
}

#[derive(Debug)]
enum Inner {
    Bytes(bytes::Bytes),
    Streaming,
    Err,
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    let span = debug_span!("load_response", status = %response.status());
    load_response_inner(response, handler).instrument(span).await
}

async fn load_response_inner<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        debug!("response parsed without loading the body");
        return sdk_result(
            parsed_response,
            response.map(|_| ResponseBody(Inner::Streaming)),
        );
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(e) => {
            let err: BoxError = e.into();
            debug!(error = %err, "failed to read response body");
            return Err(SdkError::ResponseError {
                raw: response.map(|_| ResponseBody(Inner::Err)),
                err,
            });
        }
    };
    debug!(length = body.len(), "response body loaded");

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(|body| ResponseBody(Inner::Bytes(body))))
}

async fn read_body<B>(body: &mut B) -> Result<Vec<u8>, B::Error>
where
    B: Body + Unpin,
{
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<ResponseBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => {
            debug!("response parsed successfully");
            Ok(SdkSuccess { raw, parsed })
        }
        Err(err) => {
            debug!("response parsed as a service error");
            Err(SdkError::ServiceError { raw, err })
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, u16>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn loads_successful_response() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from(r#"{"Keys":[]}"#))
            .unwrap();
        let success = load_response(response, &StatusParser).await.unwrap();
        assert_eq!(success.parsed, r#"{"Keys":[]}"#);
        assert_eq!(
            success.raw.body().bytes().map(|b| b.as_ref()),
            Some(r#"{"Keys":[]}"#.as_bytes())
        );
    }

    #[tokio::test]
    async fn error_status_is_a_service_error() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response(response, &StatusParser).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 400);
                assert_eq!(raw.status(), 400);
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }
}
