/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors.

/// Broad category of a failed request.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// Connection level failure such as a socket timeout or TLS negotiation error.
    TransientError,

    /// The service asked the client to back off, eg. a 429 or a modeled throttling exception.
    ThrottlingError,

    /// A server side failure that is not explicit throttling.
    ServerError,

    /// The request itself was rejected.
    ClientError,
}

/// Errors that can report their kind and wire code.
pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the kind cannot be determined (eg. the error is unmodeled), returns `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}
