/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `TranslateText` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TranslateTextError {
    /// Kind of error that occurred.
    pub kind: TranslateTextErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TranslateText` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TranslateTextErrorKind {
    /// <p> The request that you made is not valid. Check your request to determine why it's not
    /// valid and then retry the request. </p>
    InvalidRequestError(crate::error::InvalidRequestError),
    /// <p> The size of the text you submitted exceeds the size limit. Reduce the size of the text or
    /// use a smaller document and then retry your request. </p>
    TextSizeLimitExceededError(crate::error::TextSizeLimitExceededError),
    /// <p> You have made too many requests within a short period of time. Wait for a short time and
    /// then try your request again.</p>
    TooManyRequestsError(crate::error::TooManyRequestsError),
    /// <p>Amazon Translate does not support translation from the language of the source text into the
    /// requested target language.</p>
    UnsupportedLanguagePairError(crate::error::UnsupportedLanguagePairError),
    /// <p>The confidence that Amazon Comprehend accurately detected the source language is low. If a
    /// low confidence level is acceptable for your application, you can use the language in the
    /// exception to call Amazon Translate again.</p>
    DetectedLanguageLowConfidenceError(crate::error::DetectedLanguageLowConfidenceError),
    /// <p>The resource you are looking for has not been found. Review the resource you're looking for
    /// and see if a different resource will accomplish your needs before retrying the revised
    /// request.</p>
    ResourceNotFoundError(crate::error::ResourceNotFoundError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// <p>The Amazon Translate service is temporarily unavailable. Wait a bit and then retry your
    /// request.</p>
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TranslateTextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TranslateTextErrorKind::InvalidRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::TextSizeLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::TooManyRequestsError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::UnsupportedLanguagePairError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::DetectedLanguageLowConfidenceError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::ResourceNotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::ServiceUnavailableError(_inner) => std::fmt::Display::fmt(_inner, f),
            TranslateTextErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for TranslateTextError {
    fn code(&self) -> Option<&str> {
        TranslateTextError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            TranslateTextErrorKind::TooManyRequestsError(inner) => Some(inner.error_kind()),
            TranslateTextErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            TranslateTextErrorKind::ServiceUnavailableError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl TranslateTextError {
    pub fn new(kind: TranslateTextErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TranslateTextErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TranslateTextErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// The error code reported by the service, or the modeled code of the error kind.
    pub fn code(&self) -> Option<&str> {
        self.meta.code().or_else(|| match &self.kind {
            TranslateTextErrorKind::InvalidRequestError(inner) => inner.code(),
            TranslateTextErrorKind::TextSizeLimitExceededError(inner) => inner.code(),
            TranslateTextErrorKind::TooManyRequestsError(inner) => inner.code(),
            TranslateTextErrorKind::UnsupportedLanguagePairError(inner) => inner.code(),
            TranslateTextErrorKind::DetectedLanguageLowConfidenceError(inner) => inner.code(),
            TranslateTextErrorKind::ResourceNotFoundError(inner) => inner.code(),
            TranslateTextErrorKind::InternalServerError(inner) => inner.code(),
            TranslateTextErrorKind::ServiceUnavailableError(inner) => inner.code(),
            TranslateTextErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_request_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::InvalidRequestError(_))
    }
    pub fn is_text_size_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::TextSizeLimitExceededError(_))
    }
    pub fn is_too_many_requests_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::TooManyRequestsError(_))
    }
    pub fn is_unsupported_language_pair_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::UnsupportedLanguagePairError(_))
    }
    pub fn is_detected_language_low_confidence_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::DetectedLanguageLowConfidenceError(_))
    }
    pub fn is_resource_not_found_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::ResourceNotFoundError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::InternalServerError(_))
    }
    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, TranslateTextErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for TranslateTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TranslateTextErrorKind::InvalidRequestError(_inner) => Some(_inner),
            TranslateTextErrorKind::TextSizeLimitExceededError(_inner) => Some(_inner),
            TranslateTextErrorKind::TooManyRequestsError(_inner) => Some(_inner),
            TranslateTextErrorKind::UnsupportedLanguagePairError(_inner) => Some(_inner),
            TranslateTextErrorKind::DetectedLanguageLowConfidenceError(_inner) => Some(_inner),
            TranslateTextErrorKind::ResourceNotFoundError(_inner) => Some(_inner),
            TranslateTextErrorKind::InternalServerError(_inner) => Some(_inner),
            TranslateTextErrorKind::ServiceUnavailableError(_inner) => Some(_inner),
            TranslateTextErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTerminologies` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTerminologiesError {
    /// Kind of error that occurred.
    pub kind: ListTerminologiesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTerminologies` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTerminologiesErrorKind {
    /// <p>The value of the parameter is not valid. Review the value of the parameter you are using to
    /// correct it, and then retry your operation.</p>
    InvalidParameterValueError(crate::error::InvalidParameterValueError),
    /// <p> You have made too many requests within a short period of time. Wait for a short time and
    /// then try your request again.</p>
    TooManyRequestsError(crate::error::TooManyRequestsError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTerminologiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTerminologiesErrorKind::InvalidParameterValueError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTerminologiesErrorKind::TooManyRequestsError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTerminologiesErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTerminologiesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTerminologiesError {
    fn code(&self) -> Option<&str> {
        ListTerminologiesError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTerminologiesErrorKind::TooManyRequestsError(inner) => Some(inner.error_kind()),
            ListTerminologiesErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl ListTerminologiesError {
    pub fn new(kind: ListTerminologiesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTerminologiesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTerminologiesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// The error code reported by the service, or the modeled code of the error kind.
    pub fn code(&self) -> Option<&str> {
        self.meta.code().or_else(|| match &self.kind {
            ListTerminologiesErrorKind::InvalidParameterValueError(inner) => inner.code(),
            ListTerminologiesErrorKind::TooManyRequestsError(inner) => inner.code(),
            ListTerminologiesErrorKind::InternalServerError(inner) => inner.code(),
            ListTerminologiesErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_parameter_value_error(&self) -> bool {
        matches!(&self.kind, ListTerminologiesErrorKind::InvalidParameterValueError(_))
    }
    pub fn is_too_many_requests_error(&self) -> bool {
        matches!(&self.kind, ListTerminologiesErrorKind::TooManyRequestsError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListTerminologiesErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for ListTerminologiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTerminologiesErrorKind::InvalidParameterValueError(_inner) => Some(_inner),
            ListTerminologiesErrorKind::TooManyRequestsError(_inner) => Some(_inner),
            ListTerminologiesErrorKind::InternalServerError(_inner) => Some(_inner),
            ListTerminologiesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetTerminology` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetTerminologyError {
    /// Kind of error that occurred.
    pub kind: GetTerminologyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetTerminology` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetTerminologyErrorKind {
    /// <p>The resource you are looking for has not been found. Review the resource you're looking for
    /// and see if a different resource will accomplish your needs before retrying the revised
    /// request.</p>
    ResourceNotFoundError(crate::error::ResourceNotFoundError),
    /// <p>The value of the parameter is not valid. Review the value of the parameter you are using to
    /// correct it, and then retry your operation.</p>
    InvalidParameterValueError(crate::error::InvalidParameterValueError),
    /// <p> You have made too many requests within a short period of time. Wait for a short time and
    /// then try your request again.</p>
    TooManyRequestsError(crate::error::TooManyRequestsError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetTerminologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetTerminologyErrorKind::ResourceNotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            GetTerminologyErrorKind::InvalidParameterValueError(_inner) => std::fmt::Display::fmt(_inner, f),
            GetTerminologyErrorKind::TooManyRequestsError(_inner) => std::fmt::Display::fmt(_inner, f),
            GetTerminologyErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            GetTerminologyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetTerminologyError {
    fn code(&self) -> Option<&str> {
        GetTerminologyError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetTerminologyErrorKind::TooManyRequestsError(inner) => Some(inner.error_kind()),
            GetTerminologyErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl GetTerminologyError {
    pub fn new(kind: GetTerminologyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetTerminologyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetTerminologyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// The error code reported by the service, or the modeled code of the error kind.
    pub fn code(&self) -> Option<&str> {
        self.meta.code().or_else(|| match &self.kind {
            GetTerminologyErrorKind::ResourceNotFoundError(inner) => inner.code(),
            GetTerminologyErrorKind::InvalidParameterValueError(inner) => inner.code(),
            GetTerminologyErrorKind::TooManyRequestsError(inner) => inner.code(),
            GetTerminologyErrorKind::InternalServerError(inner) => inner.code(),
            GetTerminologyErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_resource_not_found_error(&self) -> bool {
        matches!(&self.kind, GetTerminologyErrorKind::ResourceNotFoundError(_))
    }
    pub fn is_invalid_parameter_value_error(&self) -> bool {
        matches!(&self.kind, GetTerminologyErrorKind::InvalidParameterValueError(_))
    }
    pub fn is_too_many_requests_error(&self) -> bool {
        matches!(&self.kind, GetTerminologyErrorKind::TooManyRequestsError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, GetTerminologyErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for GetTerminologyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetTerminologyErrorKind::ResourceNotFoundError(_inner) => Some(_inner),
            GetTerminologyErrorKind::InvalidParameterValueError(_inner) => Some(_inner),
            GetTerminologyErrorKind::TooManyRequestsError(_inner) => Some(_inner),
            GetTerminologyErrorKind::InternalServerError(_inner) => Some(_inner),
            GetTerminologyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteTerminology` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteTerminologyError {
    /// Kind of error that occurred.
    pub kind: DeleteTerminologyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteTerminology` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteTerminologyErrorKind {
    /// <p>The resource you are looking for has not been found. Review the resource you're looking for
    /// and see if a different resource will accomplish your needs before retrying the revised
    /// request.</p>
    ResourceNotFoundError(crate::error::ResourceNotFoundError),
    /// <p> You have made too many requests within a short period of time. Wait for a short time and
    /// then try your request again.</p>
    TooManyRequestsError(crate::error::TooManyRequestsError),
    /// <p>The value of the parameter is not valid. Review the value of the parameter you are using to
    /// correct it, and then retry your operation.</p>
    InvalidParameterValueError(crate::error::InvalidParameterValueError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteTerminologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteTerminologyErrorKind::ResourceNotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTerminologyErrorKind::TooManyRequestsError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTerminologyErrorKind::InvalidParameterValueError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTerminologyErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTerminologyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteTerminologyError {
    fn code(&self) -> Option<&str> {
        DeleteTerminologyError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteTerminologyErrorKind::TooManyRequestsError(inner) => Some(inner.error_kind()),
            DeleteTerminologyErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DeleteTerminologyError {
    pub fn new(kind: DeleteTerminologyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteTerminologyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteTerminologyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// The error code reported by the service, or the modeled code of the error kind.
    pub fn code(&self) -> Option<&str> {
        self.meta.code().or_else(|| match &self.kind {
            DeleteTerminologyErrorKind::ResourceNotFoundError(inner) => inner.code(),
            DeleteTerminologyErrorKind::TooManyRequestsError(inner) => inner.code(),
            DeleteTerminologyErrorKind::InvalidParameterValueError(inner) => inner.code(),
            DeleteTerminologyErrorKind::InternalServerError(inner) => inner.code(),
            DeleteTerminologyErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_resource_not_found_error(&self) -> bool {
        matches!(&self.kind, DeleteTerminologyErrorKind::ResourceNotFoundError(_))
    }
    pub fn is_too_many_requests_error(&self) -> bool {
        matches!(&self.kind, DeleteTerminologyErrorKind::TooManyRequestsError(_))
    }
    pub fn is_invalid_parameter_value_error(&self) -> bool {
        matches!(&self.kind, DeleteTerminologyErrorKind::InvalidParameterValueError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteTerminologyErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DeleteTerminologyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteTerminologyErrorKind::ResourceNotFoundError(_inner) => Some(_inner),
            DeleteTerminologyErrorKind::TooManyRequestsError(_inner) => Some(_inner),
            DeleteTerminologyErrorKind::InvalidParameterValueError(_inner) => Some(_inner),
            DeleteTerminologyErrorKind::InternalServerError(_inner) => Some(_inner),
            DeleteTerminologyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p> The request that you made is not valid. Check your request to determine why it's not
/// valid and then retry the request. </p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidRequestError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidRequestError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidRequestError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidRequestError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidRequestException")
    }
}
impl std::fmt::Display for InvalidRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidRequestError [InvalidRequestException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidRequestError {}
/// See [`InvalidRequestError`](crate::error::InvalidRequestError)
pub mod invalid_request_error {
    /// A builder for [`InvalidRequestError`](crate::error::InvalidRequestError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidRequestError`](crate::error::InvalidRequestError)
        pub fn build(self) -> crate::error::InvalidRequestError {
            crate::error::InvalidRequestError {
                message: self.message,
            }
        }
    }
}
impl InvalidRequestError {
    /// Creates a new builder-style object to manufacture [`InvalidRequestError`](crate::error::InvalidRequestError)
    pub fn builder() -> crate::error::invalid_request_error::Builder {
        crate::error::invalid_request_error::Builder::default()
    }
}

/// <p> The size of the text you submitted exceeds the size limit. Reduce the size of the text or
/// use a smaller document and then retry your request. </p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TextSizeLimitExceededError {
    pub message: std::option::Option<std::string::String>,
}
impl TextSizeLimitExceededError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for TextSizeLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TextSizeLimitExceededError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl TextSizeLimitExceededError {
    pub fn code(&self) -> Option<&str> {
        Some("TextSizeLimitExceededException")
    }
}
impl std::fmt::Display for TextSizeLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TextSizeLimitExceededError [TextSizeLimitExceededException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TextSizeLimitExceededError {}
/// See [`TextSizeLimitExceededError`](crate::error::TextSizeLimitExceededError)
pub mod text_size_limit_exceeded_error {
    /// A builder for [`TextSizeLimitExceededError`](crate::error::TextSizeLimitExceededError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`TextSizeLimitExceededError`](crate::error::TextSizeLimitExceededError)
        pub fn build(self) -> crate::error::TextSizeLimitExceededError {
            crate::error::TextSizeLimitExceededError {
                message: self.message,
            }
        }
    }
}
impl TextSizeLimitExceededError {
    /// Creates a new builder-style object to manufacture [`TextSizeLimitExceededError`](crate::error::TextSizeLimitExceededError)
    pub fn builder() -> crate::error::text_size_limit_exceeded_error::Builder {
        crate::error::text_size_limit_exceeded_error::Builder::default()
    }
}

/// <p> You have made too many requests within a short period of time. Wait for a short time and
/// then try your request again.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TooManyRequestsError {
    pub message: std::option::Option<std::string::String>,
}
impl TooManyRequestsError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for TooManyRequestsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TooManyRequestsError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl TooManyRequestsError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn code(&self) -> Option<&str> {
        Some("TooManyRequestsException")
    }
}
impl std::fmt::Display for TooManyRequestsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyRequestsError [TooManyRequestsException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyRequestsError {}
/// See [`TooManyRequestsError`](crate::error::TooManyRequestsError)
pub mod too_many_requests_error {
    /// A builder for [`TooManyRequestsError`](crate::error::TooManyRequestsError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`TooManyRequestsError`](crate::error::TooManyRequestsError)
        pub fn build(self) -> crate::error::TooManyRequestsError {
            crate::error::TooManyRequestsError {
                message: self.message,
            }
        }
    }
}
impl TooManyRequestsError {
    /// Creates a new builder-style object to manufacture [`TooManyRequestsError`](crate::error::TooManyRequestsError)
    pub fn builder() -> crate::error::too_many_requests_error::Builder {
        crate::error::too_many_requests_error::Builder::default()
    }
}

/// <p>Amazon Translate does not support translation from the language of the source text into the
/// requested target language.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct UnsupportedLanguagePairError {
    pub message: std::option::Option<std::string::String>,
    /// <p>The language code for the language of the input text. </p>
    pub source_language_code: std::option::Option<std::string::String>,
    /// <p>The language code for the language of the translated text. </p>
    pub target_language_code: std::option::Option<std::string::String>,
}
impl UnsupportedLanguagePairError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }

    /// <p>The language code for the language of the input text. </p>
    pub fn source_language_code(&self) -> std::option::Option<&str> {
        self.source_language_code.as_deref()
    }

    /// <p>The language code for the language of the translated text. </p>
    pub fn target_language_code(&self) -> std::option::Option<&str> {
        self.target_language_code.as_deref()
    }
}
impl std::fmt::Debug for UnsupportedLanguagePairError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UnsupportedLanguagePairError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        if let Some(source_language_code) = &self.source_language_code {
            formatter.field("source_language_code", source_language_code);
        }
        if let Some(target_language_code) = &self.target_language_code {
            formatter.field("target_language_code", target_language_code);
        }
        formatter.finish()
    }
}
impl UnsupportedLanguagePairError {
    pub fn code(&self) -> Option<&str> {
        Some("UnsupportedLanguagePairException")
    }
}
impl std::fmt::Display for UnsupportedLanguagePairError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnsupportedLanguagePairError [UnsupportedLanguagePairException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for UnsupportedLanguagePairError {}
/// See [`UnsupportedLanguagePairError`](crate::error::UnsupportedLanguagePairError)
pub mod unsupported_language_pair_error {
    /// A builder for [`UnsupportedLanguagePairError`](crate::error::UnsupportedLanguagePairError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        source_language_code: std::option::Option<std::string::String>,
        target_language_code: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The language code for the language of the input text. </p>
        pub fn source_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_language_code = Some(input.into());
            self
        }
        pub fn set_source_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_language_code = input;
            self
        }
        /// <p>The language code for the language of the translated text. </p>
        pub fn target_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.target_language_code = Some(input.into());
            self
        }
        pub fn set_target_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.target_language_code = input;
            self
        }
        /// Consumes the builder and constructs a [`UnsupportedLanguagePairError`](crate::error::UnsupportedLanguagePairError)
        pub fn build(self) -> crate::error::UnsupportedLanguagePairError {
            crate::error::UnsupportedLanguagePairError {
                message: self.message,
                source_language_code: self.source_language_code,
                target_language_code: self.target_language_code,
            }
        }
    }
}
impl UnsupportedLanguagePairError {
    /// Creates a new builder-style object to manufacture [`UnsupportedLanguagePairError`](crate::error::UnsupportedLanguagePairError)
    pub fn builder() -> crate::error::unsupported_language_pair_error::Builder {
        crate::error::unsupported_language_pair_error::Builder::default()
    }
}

/// <p>The confidence that Amazon Comprehend accurately detected the source language is low. If a
/// low confidence level is acceptable for your application, you can use the language in the
/// exception to call Amazon Translate again.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DetectedLanguageLowConfidenceError {
    pub message: std::option::Option<std::string::String>,
    /// <p>The language code of the auto-detected language from Amazon Comprehend.</p>
    pub detected_language_code: std::option::Option<std::string::String>,
}
impl DetectedLanguageLowConfidenceError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }

    /// <p>The language code of the auto-detected language from Amazon Comprehend.</p>
    pub fn detected_language_code(&self) -> std::option::Option<&str> {
        self.detected_language_code.as_deref()
    }
}
impl std::fmt::Debug for DetectedLanguageLowConfidenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectedLanguageLowConfidenceError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        if let Some(detected_language_code) = &self.detected_language_code {
            formatter.field("detected_language_code", detected_language_code);
        }
        formatter.finish()
    }
}
impl DetectedLanguageLowConfidenceError {
    pub fn code(&self) -> Option<&str> {
        Some("DetectedLanguageLowConfidenceException")
    }
}
impl std::fmt::Display for DetectedLanguageLowConfidenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DetectedLanguageLowConfidenceError [DetectedLanguageLowConfidenceException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DetectedLanguageLowConfidenceError {}
/// See [`DetectedLanguageLowConfidenceError`](crate::error::DetectedLanguageLowConfidenceError)
pub mod detected_language_low_confidence_error {
    /// A builder for [`DetectedLanguageLowConfidenceError`](crate::error::DetectedLanguageLowConfidenceError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        detected_language_code: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The language code of the auto-detected language from Amazon Comprehend.</p>
        pub fn detected_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.detected_language_code = Some(input.into());
            self
        }
        pub fn set_detected_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.detected_language_code = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectedLanguageLowConfidenceError`](crate::error::DetectedLanguageLowConfidenceError)
        pub fn build(self) -> crate::error::DetectedLanguageLowConfidenceError {
            crate::error::DetectedLanguageLowConfidenceError {
                message: self.message,
                detected_language_code: self.detected_language_code,
            }
        }
    }
}
impl DetectedLanguageLowConfidenceError {
    /// Creates a new builder-style object to manufacture [`DetectedLanguageLowConfidenceError`](crate::error::DetectedLanguageLowConfidenceError)
    pub fn builder() -> crate::error::detected_language_low_confidence_error::Builder {
        crate::error::detected_language_low_confidence_error::Builder::default()
    }
}

/// <p>The resource you are looking for has not been found. Review the resource you're looking for
/// and see if a different resource will accomplish your needs before retrying the revised
/// request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ResourceNotFoundError {
    pub message: std::option::Option<std::string::String>,
}
impl ResourceNotFoundError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ResourceNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResourceNotFoundError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl ResourceNotFoundError {
    pub fn code(&self) -> Option<&str> {
        Some("ResourceNotFoundException")
    }
}
impl std::fmt::Display for ResourceNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundError [ResourceNotFoundException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundError {}
/// See [`ResourceNotFoundError`](crate::error::ResourceNotFoundError)
pub mod resource_not_found_error {
    /// A builder for [`ResourceNotFoundError`](crate::error::ResourceNotFoundError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotFoundError`](crate::error::ResourceNotFoundError)
        pub fn build(self) -> crate::error::ResourceNotFoundError {
            crate::error::ResourceNotFoundError {
                message: self.message,
            }
        }
    }
}
impl ResourceNotFoundError {
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundError`](crate::error::ResourceNotFoundError)
    pub fn builder() -> crate::error::resource_not_found_error::Builder {
        crate::error::resource_not_found_error::Builder::default()
    }
}

/// <p>An internal server error occurred. Retry your request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InternalServerError {
    pub message: std::option::Option<std::string::String>,
}
impl InternalServerError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InternalServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InternalServerError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InternalServerError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("InternalServerException")
    }
}
impl std::fmt::Display for InternalServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerError [InternalServerException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerError {}
/// See [`InternalServerError`](crate::error::InternalServerError)
pub mod internal_server_error {
    /// A builder for [`InternalServerError`](crate::error::InternalServerError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServerError`](crate::error::InternalServerError)
        pub fn build(self) -> crate::error::InternalServerError {
            crate::error::InternalServerError {
                message: self.message,
            }
        }
    }
}
impl InternalServerError {
    /// Creates a new builder-style object to manufacture [`InternalServerError`](crate::error::InternalServerError)
    pub fn builder() -> crate::error::internal_server_error::Builder {
        crate::error::internal_server_error::Builder::default()
    }
}

/// <p>The Amazon Translate service is temporarily unavailable. Wait a bit and then retry your
/// request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ServiceUnavailableError {
    pub message: std::option::Option<std::string::String>,
}
impl ServiceUnavailableError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ServiceUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ServiceUnavailableError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl ServiceUnavailableError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("ServiceUnavailableException")
    }
}
impl std::fmt::Display for ServiceUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceUnavailableError [ServiceUnavailableException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceUnavailableError {}
/// See [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
pub mod service_unavailable_error {
    /// A builder for [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
        pub fn build(self) -> crate::error::ServiceUnavailableError {
            crate::error::ServiceUnavailableError {
                message: self.message,
            }
        }
    }
}
impl ServiceUnavailableError {
    /// Creates a new builder-style object to manufacture [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
    pub fn builder() -> crate::error::service_unavailable_error::Builder {
        crate::error::service_unavailable_error::Builder::default()
    }
}

/// <p>The value of the parameter is not valid. Review the value of the parameter you are using to
/// correct it, and then retry your operation.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidParameterValueError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidParameterValueError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidParameterValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidParameterValueError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidParameterValueError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidParameterValueException")
    }
}
impl std::fmt::Display for InvalidParameterValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidParameterValueError [InvalidParameterValueException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidParameterValueError {}
/// See [`InvalidParameterValueError`](crate::error::InvalidParameterValueError)
pub mod invalid_parameter_value_error {
    /// A builder for [`InvalidParameterValueError`](crate::error::InvalidParameterValueError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidParameterValueError`](crate::error::InvalidParameterValueError)
        pub fn build(self) -> crate::error::InvalidParameterValueError {
            crate::error::InvalidParameterValueError {
                message: self.message,
            }
        }
    }
}
impl InvalidParameterValueError {
    /// Creates a new builder-style object to manufacture [`InvalidParameterValueError`](crate::error::InvalidParameterValueError)
    pub fn builder() -> crate::error::invalid_parameter_value_error::Builder {
        crate::error::invalid_parameter_value_error::Builder::default()
    }
}
