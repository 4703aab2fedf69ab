/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic service error

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Generic Error type
///
/// Services only partially model their errors. Whatever a response carries
/// (`code`, `message`, `request_id`) is captured here, both for unmodeled
/// errors and as metadata alongside modeled ones.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::retry::ProvideErrorKind;

    #[test]
    fn display_lists_present_fields() {
        let err = Error::builder()
            .code("NotFoundException")
            .message("Key 'arn' does not exist")
            .build();
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "NotFoundException", message: "Key 'arn' does not exist" }"#
        );
        assert_eq!(format!("{}", Error::default()), "Error");
    }

    #[test]
    fn builder_round_trip() {
        let err = Error::builder()
            .code("Throttling")
            .request_id("abc-123")
            .build();
        assert_eq!(ProvideErrorKind::code(&err), Some("Throttling"));
        assert_eq!(err.error_kind(), None);
        assert_eq!(err.message(), None);
        let mut builder = err.clone().into_builder();
        assert_eq!(builder.message("slow down").build().request_id(), Some("abc-123"));
    }
}
