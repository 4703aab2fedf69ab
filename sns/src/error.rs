/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateTopic` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateTopicError {
    /// Kind of error that occurred.
    pub kind: CreateTopicErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateTopic` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateTopicErrorKind {
    /// <p>Indicates that a request parameter does not comply with the associated
    /// constraints.</p>
    InvalidParameterError(crate::error::InvalidParameterError),
    /// <p>Indicates that the customer already owns the maximum allowed number of topics.</p>
    TopicLimitExceededError(crate::error::TopicLimitExceededError),
    /// <p>Indicates an internal service error.</p>
    InternalErrorError(crate::error::InternalErrorError),
    /// <p>Indicates that the user has been denied access to the requested resource.</p>
    AuthorizationErrorError(crate::error::AuthorizationErrorError),
    /// <p>The request doesn't comply with the IAM tag policy. Correct your request and then
    /// retry it.</p>
    TagPolicyError(crate::error::TagPolicyError),
    /// <p>Can't perform multiple operations on a tag simultaneously. Perform the operations
    /// sequentially.</p>
    ConcurrentAccessError(crate::error::ConcurrentAccessError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateTopicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateTopicErrorKind::InvalidParameterError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::TopicLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::InternalErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::AuthorizationErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::TagPolicyError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::ConcurrentAccessError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTopicErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateTopicError {
    fn code(&self) -> Option<&str> {
        CreateTopicError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateTopicErrorKind::InternalErrorError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl CreateTopicError {
    pub fn new(kind: CreateTopicErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateTopicErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateTopicErrorKind::Unhandled(err.into()),
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
            CreateTopicErrorKind::InvalidParameterError(inner) => inner.code(),
            CreateTopicErrorKind::TopicLimitExceededError(inner) => inner.code(),
            CreateTopicErrorKind::InternalErrorError(inner) => inner.code(),
            CreateTopicErrorKind::AuthorizationErrorError(inner) => inner.code(),
            CreateTopicErrorKind::TagPolicyError(inner) => inner.code(),
            CreateTopicErrorKind::ConcurrentAccessError(inner) => inner.code(),
            CreateTopicErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::InvalidParameterError(_))
    }
    pub fn is_topic_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::TopicLimitExceededError(_))
    }
    pub fn is_internal_error_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::InternalErrorError(_))
    }
    pub fn is_authorization_error_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::AuthorizationErrorError(_))
    }
    pub fn is_tag_policy_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::TagPolicyError(_))
    }
    pub fn is_concurrent_access_error(&self) -> bool {
        matches!(&self.kind, CreateTopicErrorKind::ConcurrentAccessError(_))
    }
}
impl std::error::Error for CreateTopicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateTopicErrorKind::InvalidParameterError(_inner) => Some(_inner),
            CreateTopicErrorKind::TopicLimitExceededError(_inner) => Some(_inner),
            CreateTopicErrorKind::InternalErrorError(_inner) => Some(_inner),
            CreateTopicErrorKind::AuthorizationErrorError(_inner) => Some(_inner),
            CreateTopicErrorKind::TagPolicyError(_inner) => Some(_inner),
            CreateTopicErrorKind::ConcurrentAccessError(_inner) => Some(_inner),
            CreateTopicErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteTopic` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteTopicError {
    /// Kind of error that occurred.
    pub kind: DeleteTopicErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteTopic` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteTopicErrorKind {
    /// <p>Indicates that a request parameter does not comply with the associated
    /// constraints.</p>
    InvalidParameterError(crate::error::InvalidParameterError),
    /// <p>Indicates an internal service error.</p>
    InternalErrorError(crate::error::InternalErrorError),
    /// <p>Indicates that the user has been denied access to the requested resource.</p>
    AuthorizationErrorError(crate::error::AuthorizationErrorError),
    /// <p>Indicates that the requested resource does not exist.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request doesn't comply with the IAM tag policy. Correct your request and then
    /// retry it.</p>
    TagPolicyError(crate::error::TagPolicyError),
    /// <p>Can't perform multiple operations on a tag simultaneously. Perform the operations
    /// sequentially.</p>
    ConcurrentAccessError(crate::error::ConcurrentAccessError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteTopicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteTopicErrorKind::InvalidParameterError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::InternalErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::AuthorizationErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::TagPolicyError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::ConcurrentAccessError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTopicErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteTopicError {
    fn code(&self) -> Option<&str> {
        DeleteTopicError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteTopicErrorKind::InternalErrorError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DeleteTopicError {
    pub fn new(kind: DeleteTopicErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteTopicErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteTopicErrorKind::Unhandled(err.into()),
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
            DeleteTopicErrorKind::InvalidParameterError(inner) => inner.code(),
            DeleteTopicErrorKind::InternalErrorError(inner) => inner.code(),
            DeleteTopicErrorKind::AuthorizationErrorError(inner) => inner.code(),
            DeleteTopicErrorKind::NotFoundError(inner) => inner.code(),
            DeleteTopicErrorKind::TagPolicyError(inner) => inner.code(),
            DeleteTopicErrorKind::ConcurrentAccessError(inner) => inner.code(),
            DeleteTopicErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::InvalidParameterError(_))
    }
    pub fn is_internal_error_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::InternalErrorError(_))
    }
    pub fn is_authorization_error_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::AuthorizationErrorError(_))
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::NotFoundError(_))
    }
    pub fn is_tag_policy_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::TagPolicyError(_))
    }
    pub fn is_concurrent_access_error(&self) -> bool {
        matches!(&self.kind, DeleteTopicErrorKind::ConcurrentAccessError(_))
    }
}
impl std::error::Error for DeleteTopicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteTopicErrorKind::InvalidParameterError(_inner) => Some(_inner),
            DeleteTopicErrorKind::InternalErrorError(_inner) => Some(_inner),
            DeleteTopicErrorKind::AuthorizationErrorError(_inner) => Some(_inner),
            DeleteTopicErrorKind::NotFoundError(_inner) => Some(_inner),
            DeleteTopicErrorKind::TagPolicyError(_inner) => Some(_inner),
            DeleteTopicErrorKind::ConcurrentAccessError(_inner) => Some(_inner),
            DeleteTopicErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTopics` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTopicsError {
    /// Kind of error that occurred.
    pub kind: ListTopicsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTopics` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTopicsErrorKind {
    /// <p>Indicates that a request parameter does not comply with the associated
    /// constraints.</p>
    InvalidParameterError(crate::error::InvalidParameterError),
    /// <p>Indicates an internal service error.</p>
    InternalErrorError(crate::error::InternalErrorError),
    /// <p>Indicates that the user has been denied access to the requested resource.</p>
    AuthorizationErrorError(crate::error::AuthorizationErrorError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTopicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTopicsErrorKind::InvalidParameterError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTopicsErrorKind::InternalErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTopicsErrorKind::AuthorizationErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTopicsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTopicsError {
    fn code(&self) -> Option<&str> {
        ListTopicsError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTopicsErrorKind::InternalErrorError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl ListTopicsError {
    pub fn new(kind: ListTopicsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTopicsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTopicsErrorKind::Unhandled(err.into()),
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
            ListTopicsErrorKind::InvalidParameterError(inner) => inner.code(),
            ListTopicsErrorKind::InternalErrorError(inner) => inner.code(),
            ListTopicsErrorKind::AuthorizationErrorError(inner) => inner.code(),
            ListTopicsErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, ListTopicsErrorKind::InvalidParameterError(_))
    }
    pub fn is_internal_error_error(&self) -> bool {
        matches!(&self.kind, ListTopicsErrorKind::InternalErrorError(_))
    }
    pub fn is_authorization_error_error(&self) -> bool {
        matches!(&self.kind, ListTopicsErrorKind::AuthorizationErrorError(_))
    }
}
impl std::error::Error for ListTopicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTopicsErrorKind::InvalidParameterError(_inner) => Some(_inner),
            ListTopicsErrorKind::InternalErrorError(_inner) => Some(_inner),
            ListTopicsErrorKind::AuthorizationErrorError(_inner) => Some(_inner),
            ListTopicsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Publish` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PublishError {
    /// Kind of error that occurred.
    pub kind: PublishErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Publish` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PublishErrorKind {
    /// <p>Indicates that a request parameter does not comply with the associated
    /// constraints.</p>
    InvalidParameterError(crate::error::InvalidParameterError),
    /// <p>Indicates that a request parameter does not comply with the associated constraints.</p>
    InvalidParameterValueError(crate::error::InvalidParameterValueError),
    /// <p>Indicates an internal service error.</p>
    InternalErrorError(crate::error::InternalErrorError),
    /// <p>Indicates that the requested resource does not exist.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>Exception error indicating endpoint disabled.</p>
    EndpointDisabledError(crate::error::EndpointDisabledError),
    /// <p>Indicates that the user has been denied access to the requested resource.</p>
    AuthorizationErrorError(crate::error::AuthorizationErrorError),
    /// <p>Indicates that the rate at which requests have been submitted for this action exceeds the
    /// limit for your account.</p>
    ThrottledError(crate::error::ThrottledError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PublishErrorKind::InvalidParameterError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::InvalidParameterValueError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::InternalErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::EndpointDisabledError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::AuthorizationErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::ThrottledError(_inner) => std::fmt::Display::fmt(_inner, f),
            PublishErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for PublishError {
    fn code(&self) -> Option<&str> {
        PublishError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            PublishErrorKind::InternalErrorError(inner) => Some(inner.error_kind()),
            PublishErrorKind::ThrottledError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl PublishError {
    pub fn new(kind: PublishErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PublishErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PublishErrorKind::Unhandled(err.into()),
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
            PublishErrorKind::InvalidParameterError(inner) => inner.code(),
            PublishErrorKind::InvalidParameterValueError(inner) => inner.code(),
            PublishErrorKind::InternalErrorError(inner) => inner.code(),
            PublishErrorKind::NotFoundError(inner) => inner.code(),
            PublishErrorKind::EndpointDisabledError(inner) => inner.code(),
            PublishErrorKind::AuthorizationErrorError(inner) => inner.code(),
            PublishErrorKind::ThrottledError(inner) => inner.code(),
            PublishErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::InvalidParameterError(_))
    }
    pub fn is_invalid_parameter_value_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::InvalidParameterValueError(_))
    }
    pub fn is_internal_error_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::InternalErrorError(_))
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::NotFoundError(_))
    }
    pub fn is_endpoint_disabled_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::EndpointDisabledError(_))
    }
    pub fn is_authorization_error_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::AuthorizationErrorError(_))
    }
    pub fn is_throttled_error(&self) -> bool {
        matches!(&self.kind, PublishErrorKind::ThrottledError(_))
    }
}
impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PublishErrorKind::InvalidParameterError(_inner) => Some(_inner),
            PublishErrorKind::InvalidParameterValueError(_inner) => Some(_inner),
            PublishErrorKind::InternalErrorError(_inner) => Some(_inner),
            PublishErrorKind::NotFoundError(_inner) => Some(_inner),
            PublishErrorKind::EndpointDisabledError(_inner) => Some(_inner),
            PublishErrorKind::AuthorizationErrorError(_inner) => Some(_inner),
            PublishErrorKind::ThrottledError(_inner) => Some(_inner),
            PublishErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Subscribe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct SubscribeError {
    /// Kind of error that occurred.
    pub kind: SubscribeErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Subscribe` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum SubscribeErrorKind {
    /// <p>Indicates that the customer already owns the maximum allowed number of
    /// subscriptions.</p>
    SubscriptionLimitExceededError(crate::error::SubscriptionLimitExceededError),
    /// <p>Indicates that the number of filter polices in your Amazon Web Services account exceeds the limit. To
    /// add more filter polices, submit an Amazon SNS Limit Increase case in the Amazon Web Services Support
    /// Center.</p>
    FilterPolicyLimitExceededError(crate::error::FilterPolicyLimitExceededError),
    /// <p>Indicates that a request parameter does not comply with the associated
    /// constraints.</p>
    InvalidParameterError(crate::error::InvalidParameterError),
    /// <p>Indicates an internal service error.</p>
    InternalErrorError(crate::error::InternalErrorError),
    /// <p>Indicates that the requested resource does not exist.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>Indicates that the user has been denied access to the requested resource.</p>
    AuthorizationErrorError(crate::error::AuthorizationErrorError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SubscribeErrorKind::SubscriptionLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::FilterPolicyLimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::InvalidParameterError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::InternalErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::AuthorizationErrorError(_inner) => std::fmt::Display::fmt(_inner, f),
            SubscribeErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for SubscribeError {
    fn code(&self) -> Option<&str> {
        SubscribeError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            SubscribeErrorKind::InternalErrorError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl SubscribeError {
    pub fn new(kind: SubscribeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: SubscribeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: SubscribeErrorKind::Unhandled(err.into()),
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
            SubscribeErrorKind::SubscriptionLimitExceededError(inner) => inner.code(),
            SubscribeErrorKind::FilterPolicyLimitExceededError(inner) => inner.code(),
            SubscribeErrorKind::InvalidParameterError(inner) => inner.code(),
            SubscribeErrorKind::InternalErrorError(inner) => inner.code(),
            SubscribeErrorKind::NotFoundError(inner) => inner.code(),
            SubscribeErrorKind::AuthorizationErrorError(inner) => inner.code(),
            SubscribeErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_subscription_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::SubscriptionLimitExceededError(_))
    }
    pub fn is_filter_policy_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::FilterPolicyLimitExceededError(_))
    }
    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::InvalidParameterError(_))
    }
    pub fn is_internal_error_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::InternalErrorError(_))
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::NotFoundError(_))
    }
    pub fn is_authorization_error_error(&self) -> bool {
        matches!(&self.kind, SubscribeErrorKind::AuthorizationErrorError(_))
    }
}
impl std::error::Error for SubscribeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SubscribeErrorKind::SubscriptionLimitExceededError(_inner) => Some(_inner),
            SubscribeErrorKind::FilterPolicyLimitExceededError(_inner) => Some(_inner),
            SubscribeErrorKind::InvalidParameterError(_inner) => Some(_inner),
            SubscribeErrorKind::InternalErrorError(_inner) => Some(_inner),
            SubscribeErrorKind::NotFoundError(_inner) => Some(_inner),
            SubscribeErrorKind::AuthorizationErrorError(_inner) => Some(_inner),
            SubscribeErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>Indicates that a request parameter does not comply with the associated
/// constraints.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidParameterError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidParameterError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidParameterError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidParameterError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidParameter")
    }
}
impl std::fmt::Display for InvalidParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidParameterError [InvalidParameterException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidParameterError {}
/// See [`InvalidParameterError`](crate::error::InvalidParameterError)
pub mod invalid_parameter_error {
    /// A builder for [`InvalidParameterError`](crate::error::InvalidParameterError)
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
        /// Consumes the builder and constructs a [`InvalidParameterError`](crate::error::InvalidParameterError)
        pub fn build(self) -> crate::error::InvalidParameterError {
            crate::error::InvalidParameterError {
                message: self.message,
            }
        }
    }
}
impl InvalidParameterError {
    /// Creates a new builder-style object to manufacture [`InvalidParameterError`](crate::error::InvalidParameterError)
    pub fn builder() -> crate::error::invalid_parameter_error::Builder {
        crate::error::invalid_parameter_error::Builder::default()
    }
}

/// <p>Indicates that a request parameter does not comply with the associated constraints.</p>
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
        Some("ParameterValueInvalid")
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

/// <p>Indicates that the customer already owns the maximum allowed number of topics.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TopicLimitExceededError {
    pub message: std::option::Option<std::string::String>,
}
impl TopicLimitExceededError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for TopicLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TopicLimitExceededError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl TopicLimitExceededError {
    pub fn code(&self) -> Option<&str> {
        Some("TopicLimitExceeded")
    }
}
impl std::fmt::Display for TopicLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TopicLimitExceededError [TopicLimitExceededException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TopicLimitExceededError {}
/// See [`TopicLimitExceededError`](crate::error::TopicLimitExceededError)
pub mod topic_limit_exceeded_error {
    /// A builder for [`TopicLimitExceededError`](crate::error::TopicLimitExceededError)
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
        /// Consumes the builder and constructs a [`TopicLimitExceededError`](crate::error::TopicLimitExceededError)
        pub fn build(self) -> crate::error::TopicLimitExceededError {
            crate::error::TopicLimitExceededError {
                message: self.message,
            }
        }
    }
}
impl TopicLimitExceededError {
    /// Creates a new builder-style object to manufacture [`TopicLimitExceededError`](crate::error::TopicLimitExceededError)
    pub fn builder() -> crate::error::topic_limit_exceeded_error::Builder {
        crate::error::topic_limit_exceeded_error::Builder::default()
    }
}

/// <p>Indicates that the customer already owns the maximum allowed number of
/// subscriptions.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct SubscriptionLimitExceededError {
    pub message: std::option::Option<std::string::String>,
}
impl SubscriptionLimitExceededError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for SubscriptionLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SubscriptionLimitExceededError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl SubscriptionLimitExceededError {
    pub fn code(&self) -> Option<&str> {
        Some("SubscriptionLimitExceeded")
    }
}
impl std::fmt::Display for SubscriptionLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubscriptionLimitExceededError [SubscriptionLimitExceededException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for SubscriptionLimitExceededError {}
/// See [`SubscriptionLimitExceededError`](crate::error::SubscriptionLimitExceededError)
pub mod subscription_limit_exceeded_error {
    /// A builder for [`SubscriptionLimitExceededError`](crate::error::SubscriptionLimitExceededError)
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
        /// Consumes the builder and constructs a [`SubscriptionLimitExceededError`](crate::error::SubscriptionLimitExceededError)
        pub fn build(self) -> crate::error::SubscriptionLimitExceededError {
            crate::error::SubscriptionLimitExceededError {
                message: self.message,
            }
        }
    }
}
impl SubscriptionLimitExceededError {
    /// Creates a new builder-style object to manufacture [`SubscriptionLimitExceededError`](crate::error::SubscriptionLimitExceededError)
    pub fn builder() -> crate::error::subscription_limit_exceeded_error::Builder {
        crate::error::subscription_limit_exceeded_error::Builder::default()
    }
}

/// <p>Indicates that the number of filter polices in your Amazon Web Services account exceeds the limit. To
/// add more filter polices, submit an Amazon SNS Limit Increase case in the Amazon Web Services Support
/// Center.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct FilterPolicyLimitExceededError {
    pub message: std::option::Option<std::string::String>,
}
impl FilterPolicyLimitExceededError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for FilterPolicyLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("FilterPolicyLimitExceededError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl FilterPolicyLimitExceededError {
    pub fn code(&self) -> Option<&str> {
        Some("FilterPolicyLimitExceeded")
    }
}
impl std::fmt::Display for FilterPolicyLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FilterPolicyLimitExceededError [FilterPolicyLimitExceededException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for FilterPolicyLimitExceededError {}
/// See [`FilterPolicyLimitExceededError`](crate::error::FilterPolicyLimitExceededError)
pub mod filter_policy_limit_exceeded_error {
    /// A builder for [`FilterPolicyLimitExceededError`](crate::error::FilterPolicyLimitExceededError)
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
        /// Consumes the builder and constructs a [`FilterPolicyLimitExceededError`](crate::error::FilterPolicyLimitExceededError)
        pub fn build(self) -> crate::error::FilterPolicyLimitExceededError {
            crate::error::FilterPolicyLimitExceededError {
                message: self.message,
            }
        }
    }
}
impl FilterPolicyLimitExceededError {
    /// Creates a new builder-style object to manufacture [`FilterPolicyLimitExceededError`](crate::error::FilterPolicyLimitExceededError)
    pub fn builder() -> crate::error::filter_policy_limit_exceeded_error::Builder {
        crate::error::filter_policy_limit_exceeded_error::Builder::default()
    }
}

/// <p>Indicates an internal service error.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InternalErrorError {
    pub message: std::option::Option<std::string::String>,
}
impl InternalErrorError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InternalErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InternalErrorError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InternalErrorError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("InternalError")
    }
}
impl std::fmt::Display for InternalErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalErrorError [InternalErrorException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalErrorError {}
/// See [`InternalErrorError`](crate::error::InternalErrorError)
pub mod internal_error_error {
    /// A builder for [`InternalErrorError`](crate::error::InternalErrorError)
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
        /// Consumes the builder and constructs a [`InternalErrorError`](crate::error::InternalErrorError)
        pub fn build(self) -> crate::error::InternalErrorError {
            crate::error::InternalErrorError {
                message: self.message,
            }
        }
    }
}
impl InternalErrorError {
    /// Creates a new builder-style object to manufacture [`InternalErrorError`](crate::error::InternalErrorError)
    pub fn builder() -> crate::error::internal_error_error::Builder {
        crate::error::internal_error_error::Builder::default()
    }
}

/// <p>Indicates that the user has been denied access to the requested resource.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct AuthorizationErrorError {
    pub message: std::option::Option<std::string::String>,
}
impl AuthorizationErrorError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for AuthorizationErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AuthorizationErrorError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl AuthorizationErrorError {
    pub fn code(&self) -> Option<&str> {
        Some("AuthorizationError")
    }
}
impl std::fmt::Display for AuthorizationErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthorizationErrorError [AuthorizationErrorException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for AuthorizationErrorError {}
/// See [`AuthorizationErrorError`](crate::error::AuthorizationErrorError)
pub mod authorization_error_error {
    /// A builder for [`AuthorizationErrorError`](crate::error::AuthorizationErrorError)
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
        /// Consumes the builder and constructs a [`AuthorizationErrorError`](crate::error::AuthorizationErrorError)
        pub fn build(self) -> crate::error::AuthorizationErrorError {
            crate::error::AuthorizationErrorError {
                message: self.message,
            }
        }
    }
}
impl AuthorizationErrorError {
    /// Creates a new builder-style object to manufacture [`AuthorizationErrorError`](crate::error::AuthorizationErrorError)
    pub fn builder() -> crate::error::authorization_error_error::Builder {
        crate::error::authorization_error_error::Builder::default()
    }
}

/// <p>Indicates that the requested resource does not exist.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct NotFoundError {
    pub message: std::option::Option<std::string::String>,
}
impl NotFoundError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NotFoundError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl NotFoundError {
    pub fn code(&self) -> Option<&str> {
        Some("NotFound")
    }
}
impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NotFoundError [NotFoundException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for NotFoundError {}
/// See [`NotFoundError`](crate::error::NotFoundError)
pub mod not_found_error {
    /// A builder for [`NotFoundError`](crate::error::NotFoundError)
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
        /// Consumes the builder and constructs a [`NotFoundError`](crate::error::NotFoundError)
        pub fn build(self) -> crate::error::NotFoundError {
            crate::error::NotFoundError {
                message: self.message,
            }
        }
    }
}
impl NotFoundError {
    /// Creates a new builder-style object to manufacture [`NotFoundError`](crate::error::NotFoundError)
    pub fn builder() -> crate::error::not_found_error::Builder {
        crate::error::not_found_error::Builder::default()
    }
}

/// <p>Exception error indicating endpoint disabled.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct EndpointDisabledError {
    pub message: std::option::Option<std::string::String>,
}
impl EndpointDisabledError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for EndpointDisabledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointDisabledError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl EndpointDisabledError {
    pub fn code(&self) -> Option<&str> {
        Some("EndpointDisabled")
    }
}
impl std::fmt::Display for EndpointDisabledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EndpointDisabledError [EndpointDisabledException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for EndpointDisabledError {}
/// See [`EndpointDisabledError`](crate::error::EndpointDisabledError)
pub mod endpoint_disabled_error {
    /// A builder for [`EndpointDisabledError`](crate::error::EndpointDisabledError)
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
        /// Consumes the builder and constructs a [`EndpointDisabledError`](crate::error::EndpointDisabledError)
        pub fn build(self) -> crate::error::EndpointDisabledError {
            crate::error::EndpointDisabledError {
                message: self.message,
            }
        }
    }
}
impl EndpointDisabledError {
    /// Creates a new builder-style object to manufacture [`EndpointDisabledError`](crate::error::EndpointDisabledError)
    pub fn builder() -> crate::error::endpoint_disabled_error::Builder {
        crate::error::endpoint_disabled_error::Builder::default()
    }
}

/// <p>Indicates that the rate at which requests have been submitted for this action exceeds the
/// limit for your account.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ThrottledError {
    pub message: std::option::Option<std::string::String>,
}
impl ThrottledError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ThrottledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ThrottledError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl ThrottledError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn code(&self) -> Option<&str> {
        Some("Throttled")
    }
}
impl std::fmt::Display for ThrottledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ThrottledError [ThrottledException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ThrottledError {}
/// See [`ThrottledError`](crate::error::ThrottledError)
pub mod throttled_error {
    /// A builder for [`ThrottledError`](crate::error::ThrottledError)
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
        /// Consumes the builder and constructs a [`ThrottledError`](crate::error::ThrottledError)
        pub fn build(self) -> crate::error::ThrottledError {
            crate::error::ThrottledError {
                message: self.message,
            }
        }
    }
}
impl ThrottledError {
    /// Creates a new builder-style object to manufacture [`ThrottledError`](crate::error::ThrottledError)
    pub fn builder() -> crate::error::throttled_error::Builder {
        crate::error::throttled_error::Builder::default()
    }
}

/// <p>The request doesn't comply with the IAM tag policy. Correct your request and then
/// retry it.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TagPolicyError {
    pub message: std::option::Option<std::string::String>,
}
impl TagPolicyError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for TagPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TagPolicyError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl TagPolicyError {
    pub fn code(&self) -> Option<&str> {
        Some("TagPolicy")
    }
}
impl std::fmt::Display for TagPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TagPolicyError [TagPolicyException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TagPolicyError {}
/// See [`TagPolicyError`](crate::error::TagPolicyError)
pub mod tag_policy_error {
    /// A builder for [`TagPolicyError`](crate::error::TagPolicyError)
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
        /// Consumes the builder and constructs a [`TagPolicyError`](crate::error::TagPolicyError)
        pub fn build(self) -> crate::error::TagPolicyError {
            crate::error::TagPolicyError {
                message: self.message,
            }
        }
    }
}
impl TagPolicyError {
    /// Creates a new builder-style object to manufacture [`TagPolicyError`](crate::error::TagPolicyError)
    pub fn builder() -> crate::error::tag_policy_error::Builder {
        crate::error::tag_policy_error::Builder::default()
    }
}

/// <p>Can't perform multiple operations on a tag simultaneously. Perform the operations
/// sequentially.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ConcurrentAccessError {
    pub message: std::option::Option<std::string::String>,
}
impl ConcurrentAccessError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ConcurrentAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ConcurrentAccessError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl ConcurrentAccessError {
    pub fn code(&self) -> Option<&str> {
        Some("ConcurrentAccess")
    }
}
impl std::fmt::Display for ConcurrentAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConcurrentAccessError [ConcurrentAccessException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ConcurrentAccessError {}
/// See [`ConcurrentAccessError`](crate::error::ConcurrentAccessError)
pub mod concurrent_access_error {
    /// A builder for [`ConcurrentAccessError`](crate::error::ConcurrentAccessError)
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
        /// Consumes the builder and constructs a [`ConcurrentAccessError`](crate::error::ConcurrentAccessError)
        pub fn build(self) -> crate::error::ConcurrentAccessError {
            crate::error::ConcurrentAccessError {
                message: self.message,
            }
        }
    }
}
impl ConcurrentAccessError {
    /// Creates a new builder-style object to manufacture [`ConcurrentAccessError`](crate::error::ConcurrentAccessError)
    pub fn builder() -> crate::error::concurrent_access_error::Builder {
        crate::error::concurrent_access_error::Builder::default()
    }
}
