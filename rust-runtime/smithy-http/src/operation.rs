/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use smithy_types::instant::FormatError;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully built HTTP request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<SdkBody>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<SdkBody>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn request(&self) -> &http::Request<SdkBody> {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.request
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }

    pub fn into_request_response(self) -> (http::Request<SdkBody>, Parts<H>) {
        (self.request, self.parts)
    }

    /// Clones the operation if its request body can be cloned.
    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
    {
        let body = self.request.body().try_clone()?;
        let mut request = http::Request::new(body);
        *request.method_mut() = self.request.method().clone();
        *request.uri_mut() = self.request.uri().clone();
        *request.version_mut() = self.request.version();
        *request.headers_mut() = self.request.headers().clone();
        Some(Operation {
            request,
            parts: Parts {
                response_handler: self.parts.response_handler.clone(),
                metadata: self.parts.metadata.clone(),
            },
        })
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializationError {
    #[error("failed to serialize timestamp: {0}")]
    DateTimeFormatError(#[from] FormatError),
}

/// Failure to build an [`Operation`] from an input.
///
/// The request was never dispatched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A field contained an invalid value
    #[error("Invalid field in input: {field} (Details: {details})")]
    InvalidField {
        field: &'static str,
        details: String,
    },
    /// A field was missing
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    /// The serializer could not serialize the input
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] SerializationError),

    /// The HTTP request could not be assembled
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    /// No region was configured, so no endpoint could be resolved
    #[error("no region was configured. A region is required to resolve the endpoint")]
    MissingRegion,

    /// An error occurred during request construction
    #[error("error during request construction: {0}")]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

impl From<FormatError> for BuildError {
    fn from(err: FormatError) -> Self {
        BuildError::SerializationError(err.into())
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn try_clone_clones_all_data() {
        let request = http::Request::builder()
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .method("POST")
            .header(CONTENT_LENGTH, 28)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(SdkBody::from("Action=ListTopics&Version=1"))
            .expect("valid request");
        let operation = Operation::new(request, "handler")
            .with_metadata(Metadata::new("ListTopics", "sns"));
        let cloned = operation.try_clone().expect("request is cloneable");

        assert_eq!(cloned.metadata().map(|m| m.name()), Some("ListTopics"));
        assert_eq!(cloned.metadata().map(|m| m.service()), Some("sns"));
        let (request, parts) = cloned.into_request_response();
        assert_eq!(parts.response_handler, "handler");
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://sns.us-east-1.amazonaws.com/")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "28");
        assert_eq!(
            request.body().bytes().unwrap(),
            "Action=ListTopics&Version=1".as_bytes()
        );
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::MissingField {
            field: "key_id",
            details: "key_id is required",
        };
        assert_eq!(err.to_string(), "key_id was missing. key_id is required");

        let err: BuildError = Instant::from_epoch_seconds(i64::MAX)
            .fmt(Format::DateTime)
            .unwrap_err()
            .into();
        assert!(matches!(err, BuildError::SerializationError(_)));
    }
}
