/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `DetectDominantLanguage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DetectDominantLanguageError {
    /// Kind of error that occurred.
    pub kind: DetectDominantLanguageErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DetectDominantLanguage` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DetectDominantLanguageErrorKind {
    /// <p>The request is invalid.</p>
    InvalidRequestError(crate::error::InvalidRequestError),
    /// <p>The size of the input text exceeds the limit. Use a smaller document.</p>
    TextSizeLimitExceededError(crate::error::TextSizeLimitExceededError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DetectDominantLanguageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DetectDominantLanguageErrorKind::InvalidRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectDominantLanguageErrorKind::TextSizeLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectDominantLanguageErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectDominantLanguageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DetectDominantLanguageError {
    fn code(&self) -> Option<&str> {
        DetectDominantLanguageError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DetectDominantLanguageErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DetectDominantLanguageError {
    pub fn new(kind: DetectDominantLanguageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DetectDominantLanguageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DetectDominantLanguageErrorKind::Unhandled(err.into()),
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
            DetectDominantLanguageErrorKind::InvalidRequestError(inner) => inner.code(),
            DetectDominantLanguageErrorKind::TextSizeLimitExceededError(inner) => inner.code(),
            DetectDominantLanguageErrorKind::InternalServerError(inner) => inner.code(),
            DetectDominantLanguageErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_request_error(&self) -> bool {
        matches!(&self.kind, DetectDominantLanguageErrorKind::InvalidRequestError(_))
    }
    pub fn is_text_size_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, DetectDominantLanguageErrorKind::TextSizeLimitExceededError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DetectDominantLanguageErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DetectDominantLanguageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DetectDominantLanguageErrorKind::InvalidRequestError(_inner) => Some(_inner),
            DetectDominantLanguageErrorKind::TextSizeLimitExceededError(_inner) => Some(_inner),
            DetectDominantLanguageErrorKind::InternalServerError(_inner) => Some(_inner),
            DetectDominantLanguageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DetectSentiment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DetectSentimentError {
    /// Kind of error that occurred.
    pub kind: DetectSentimentErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DetectSentiment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DetectSentimentErrorKind {
    /// <p>The request is invalid.</p>
    InvalidRequestError(crate::error::InvalidRequestError),
    /// <p>The size of the input text exceeds the limit. Use a smaller document.</p>
    TextSizeLimitExceededError(crate::error::TextSizeLimitExceededError),
    /// <p>Amazon Comprehend can't process the language of the input text. For custom entity
    /// recognition APIs, only English, Spanish, French, Italian, German, or Portuguese are accepted.
    /// For a list of supported languages, see <a>supported-languages</a>. </p>
    UnsupportedLanguageError(crate::error::UnsupportedLanguageError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DetectSentimentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DetectSentimentErrorKind::InvalidRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectSentimentErrorKind::TextSizeLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectSentimentErrorKind::UnsupportedLanguageError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectSentimentErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectSentimentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DetectSentimentError {
    fn code(&self) -> Option<&str> {
        DetectSentimentError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DetectSentimentErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DetectSentimentError {
    pub fn new(kind: DetectSentimentErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DetectSentimentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DetectSentimentErrorKind::Unhandled(err.into()),
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
            DetectSentimentErrorKind::InvalidRequestError(inner) => inner.code(),
            DetectSentimentErrorKind::TextSizeLimitExceededError(inner) => inner.code(),
            DetectSentimentErrorKind::UnsupportedLanguageError(inner) => inner.code(),
            DetectSentimentErrorKind::InternalServerError(inner) => inner.code(),
            DetectSentimentErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_request_error(&self) -> bool {
        matches!(&self.kind, DetectSentimentErrorKind::InvalidRequestError(_))
    }
    pub fn is_text_size_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, DetectSentimentErrorKind::TextSizeLimitExceededError(_))
    }
    pub fn is_unsupported_language_error(&self) -> bool {
        matches!(&self.kind, DetectSentimentErrorKind::UnsupportedLanguageError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DetectSentimentErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DetectSentimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DetectSentimentErrorKind::InvalidRequestError(_inner) => Some(_inner),
            DetectSentimentErrorKind::TextSizeLimitExceededError(_inner) => Some(_inner),
            DetectSentimentErrorKind::UnsupportedLanguageError(_inner) => Some(_inner),
            DetectSentimentErrorKind::InternalServerError(_inner) => Some(_inner),
            DetectSentimentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DetectEntities` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DetectEntitiesError {
    /// Kind of error that occurred.
    pub kind: DetectEntitiesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DetectEntities` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DetectEntitiesErrorKind {
    /// <p>The request is invalid.</p>
    InvalidRequestError(crate::error::InvalidRequestError),
    /// <p>The specified resource is not available. Check the resource and try your request
    /// again.</p>
    ResourceUnavailableError(crate::error::ResourceUnavailableError),
    /// <p>The size of the input text exceeds the limit. Use a smaller document.</p>
    TextSizeLimitExceededError(crate::error::TextSizeLimitExceededError),
    /// <p>Amazon Comprehend can't process the language of the input text. For custom entity
    /// recognition APIs, only English, Spanish, French, Italian, German, or Portuguese are accepted.
    /// For a list of supported languages, see <a>supported-languages</a>. </p>
    UnsupportedLanguageError(crate::error::UnsupportedLanguageError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DetectEntitiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DetectEntitiesErrorKind::InvalidRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectEntitiesErrorKind::ResourceUnavailableError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectEntitiesErrorKind::TextSizeLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectEntitiesErrorKind::UnsupportedLanguageError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectEntitiesErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectEntitiesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DetectEntitiesError {
    fn code(&self) -> Option<&str> {
        DetectEntitiesError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DetectEntitiesErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DetectEntitiesError {
    pub fn new(kind: DetectEntitiesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DetectEntitiesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DetectEntitiesErrorKind::Unhandled(err.into()),
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
            DetectEntitiesErrorKind::InvalidRequestError(inner) => inner.code(),
            DetectEntitiesErrorKind::ResourceUnavailableError(inner) => inner.code(),
            DetectEntitiesErrorKind::TextSizeLimitExceededError(inner) => inner.code(),
            DetectEntitiesErrorKind::UnsupportedLanguageError(inner) => inner.code(),
            DetectEntitiesErrorKind::InternalServerError(inner) => inner.code(),
            DetectEntitiesErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_request_error(&self) -> bool {
        matches!(&self.kind, DetectEntitiesErrorKind::InvalidRequestError(_))
    }
    pub fn is_resource_unavailable_error(&self) -> bool {
        matches!(&self.kind, DetectEntitiesErrorKind::ResourceUnavailableError(_))
    }
    pub fn is_text_size_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, DetectEntitiesErrorKind::TextSizeLimitExceededError(_))
    }
    pub fn is_unsupported_language_error(&self) -> bool {
        matches!(&self.kind, DetectEntitiesErrorKind::UnsupportedLanguageError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DetectEntitiesErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DetectEntitiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DetectEntitiesErrorKind::InvalidRequestError(_inner) => Some(_inner),
            DetectEntitiesErrorKind::ResourceUnavailableError(_inner) => Some(_inner),
            DetectEntitiesErrorKind::TextSizeLimitExceededError(_inner) => Some(_inner),
            DetectEntitiesErrorKind::UnsupportedLanguageError(_inner) => Some(_inner),
            DetectEntitiesErrorKind::InternalServerError(_inner) => Some(_inner),
            DetectEntitiesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DetectKeyPhrases` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DetectKeyPhrasesError {
    /// Kind of error that occurred.
    pub kind: DetectKeyPhrasesErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DetectKeyPhrases` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DetectKeyPhrasesErrorKind {
    /// <p>The request is invalid.</p>
    InvalidRequestError(crate::error::InvalidRequestError),
    /// <p>The size of the input text exceeds the limit. Use a smaller document.</p>
    TextSizeLimitExceededError(crate::error::TextSizeLimitExceededError),
    /// <p>Amazon Comprehend can't process the language of the input text. For custom entity
    /// recognition APIs, only English, Spanish, French, Italian, German, or Portuguese are accepted.
    /// For a list of supported languages, see <a>supported-languages</a>. </p>
    UnsupportedLanguageError(crate::error::UnsupportedLanguageError),
    /// <p>An internal server error occurred. Retry your request.</p>
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DetectKeyPhrasesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DetectKeyPhrasesErrorKind::InvalidRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectKeyPhrasesErrorKind::TextSizeLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectKeyPhrasesErrorKind::UnsupportedLanguageError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectKeyPhrasesErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DetectKeyPhrasesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DetectKeyPhrasesError {
    fn code(&self) -> Option<&str> {
        DetectKeyPhrasesError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DetectKeyPhrasesErrorKind::InternalServerError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DetectKeyPhrasesError {
    pub fn new(kind: DetectKeyPhrasesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DetectKeyPhrasesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DetectKeyPhrasesErrorKind::Unhandled(err.into()),
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
            DetectKeyPhrasesErrorKind::InvalidRequestError(inner) => inner.code(),
            DetectKeyPhrasesErrorKind::TextSizeLimitExceededError(inner) => inner.code(),
            DetectKeyPhrasesErrorKind::UnsupportedLanguageError(inner) => inner.code(),
            DetectKeyPhrasesErrorKind::InternalServerError(inner) => inner.code(),
            DetectKeyPhrasesErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_request_error(&self) -> bool {
        matches!(&self.kind, DetectKeyPhrasesErrorKind::InvalidRequestError(_))
    }
    pub fn is_text_size_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, DetectKeyPhrasesErrorKind::TextSizeLimitExceededError(_))
    }
    pub fn is_unsupported_language_error(&self) -> bool {
        matches!(&self.kind, DetectKeyPhrasesErrorKind::UnsupportedLanguageError(_))
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DetectKeyPhrasesErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DetectKeyPhrasesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DetectKeyPhrasesErrorKind::InvalidRequestError(_inner) => Some(_inner),
            DetectKeyPhrasesErrorKind::TextSizeLimitExceededError(_inner) => Some(_inner),
            DetectKeyPhrasesErrorKind::UnsupportedLanguageError(_inner) => Some(_inner),
            DetectKeyPhrasesErrorKind::InternalServerError(_inner) => Some(_inner),
            DetectKeyPhrasesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>The request is invalid.</p>
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

/// <p>The size of the input text exceeds the limit. Use a smaller document.</p>
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

/// <p>Amazon Comprehend can't process the language of the input text. For custom entity
/// recognition APIs, only English, Spanish, French, Italian, German, or Portuguese are accepted.
/// For a list of supported languages, see <a>supported-languages</a>. </p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct UnsupportedLanguageError {
    pub message: std::option::Option<std::string::String>,
}
impl UnsupportedLanguageError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for UnsupportedLanguageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UnsupportedLanguageError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl UnsupportedLanguageError {
    pub fn code(&self) -> Option<&str> {
        Some("UnsupportedLanguageException")
    }
}
impl std::fmt::Display for UnsupportedLanguageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnsupportedLanguageError [UnsupportedLanguageException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for UnsupportedLanguageError {}
/// See [`UnsupportedLanguageError`](crate::error::UnsupportedLanguageError)
pub mod unsupported_language_error {
    /// A builder for [`UnsupportedLanguageError`](crate::error::UnsupportedLanguageError)
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
        /// Consumes the builder and constructs a [`UnsupportedLanguageError`](crate::error::UnsupportedLanguageError)
        pub fn build(self) -> crate::error::UnsupportedLanguageError {
            crate::error::UnsupportedLanguageError {
                message: self.message,
            }
        }
    }
}
impl UnsupportedLanguageError {
    /// Creates a new builder-style object to manufacture [`UnsupportedLanguageError`](crate::error::UnsupportedLanguageError)
    pub fn builder() -> crate::error::unsupported_language_error::Builder {
        crate::error::unsupported_language_error::Builder::default()
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

/// <p>The specified resource is not available. Check the resource and try your request
/// again.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ResourceUnavailableError {
    pub message: std::option::Option<std::string::String>,
}
impl ResourceUnavailableError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ResourceUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResourceUnavailableError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl ResourceUnavailableError {
    pub fn code(&self) -> Option<&str> {
        Some("ResourceUnavailableException")
    }
}
impl std::fmt::Display for ResourceUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceUnavailableError [ResourceUnavailableException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceUnavailableError {}
/// See [`ResourceUnavailableError`](crate::error::ResourceUnavailableError)
pub mod resource_unavailable_error {
    /// A builder for [`ResourceUnavailableError`](crate::error::ResourceUnavailableError)
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
        /// Consumes the builder and constructs a [`ResourceUnavailableError`](crate::error::ResourceUnavailableError)
        pub fn build(self) -> crate::error::ResourceUnavailableError {
            crate::error::ResourceUnavailableError {
                message: self.message,
            }
        }
    }
}
impl ResourceUnavailableError {
    /// Creates a new builder-style object to manufacture [`ResourceUnavailableError`](crate::error::ResourceUnavailableError)
    pub fn builder() -> crate::error::resource_unavailable_error::Builder {
        crate::error::resource_unavailable_error::Builder::default()
    }
}
