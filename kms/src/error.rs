/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateKeyError {
    /// Kind of error that occurred.
    pub kind: CreateKeyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateKeyErrorKind {
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because a specified ARN, or an ARN in a key policy, is not
    /// valid.</p>
    InvalidArnError(crate::error::InvalidArnError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because a quota was exceeded.</p>
    LimitExceededError(crate::error::LimitExceededError),
    /// <p>The request was rejected because the specified policy is not syntactically or
    /// semantically correct.</p>
    MalformedPolicyDocumentError(crate::error::MalformedPolicyDocumentError),
    /// <p>The request was rejected because one or more tags are not valid.</p>
    TagError(crate::error::TagError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateKeyErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::InvalidArnError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::LimitExceededError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::MalformedPolicyDocumentError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::TagError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateKeyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateKeyError {
    fn code(&self) -> Option<&str> {
        CreateKeyError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateKeyErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            CreateKeyErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            CreateKeyErrorKind::LimitExceededError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl CreateKeyError {
    pub fn new(kind: CreateKeyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateKeyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateKeyErrorKind::Unhandled(err.into()),
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
            CreateKeyErrorKind::DependencyTimeoutError(inner) => inner.code(),
            CreateKeyErrorKind::InvalidArnError(inner) => inner.code(),
            CreateKeyErrorKind::KmsInternalError(inner) => inner.code(),
            CreateKeyErrorKind::LimitExceededError(inner) => inner.code(),
            CreateKeyErrorKind::MalformedPolicyDocumentError(inner) => inner.code(),
            CreateKeyErrorKind::TagError(inner) => inner.code(),
            CreateKeyErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_invalid_arn_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::InvalidArnError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::KmsInternalError(_))
    }
    pub fn is_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::LimitExceededError(_))
    }
    pub fn is_malformed_policy_document_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::MalformedPolicyDocumentError(_))
    }
    pub fn is_tag_error(&self) -> bool {
        matches!(&self.kind, CreateKeyErrorKind::TagError(_))
    }
}
impl std::error::Error for CreateKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateKeyErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            CreateKeyErrorKind::InvalidArnError(_inner) => Some(_inner),
            CreateKeyErrorKind::KmsInternalError(_inner) => Some(_inner),
            CreateKeyErrorKind::LimitExceededError(_inner) => Some(_inner),
            CreateKeyErrorKind::MalformedPolicyDocumentError(_inner) => Some(_inner),
            CreateKeyErrorKind::TagError(_inner) => Some(_inner),
            CreateKeyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeKeyError {
    /// Kind of error that occurred.
    pub kind: DescribeKeyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeKeyErrorKind {
    /// <p>The request was rejected because the specified entity or resource could not be
    /// found.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request was rejected because a specified ARN, or an ARN in a key policy, is not
    /// valid.</p>
    InvalidArnError(crate::error::InvalidArnError),
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeKeyErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeKeyErrorKind::InvalidArnError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeKeyErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeKeyErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeKeyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeKeyError {
    fn code(&self) -> Option<&str> {
        DescribeKeyError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeKeyErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            DescribeKeyErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DescribeKeyError {
    pub fn new(kind: DescribeKeyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeKeyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeKeyErrorKind::Unhandled(err.into()),
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
            DescribeKeyErrorKind::NotFoundError(inner) => inner.code(),
            DescribeKeyErrorKind::InvalidArnError(inner) => inner.code(),
            DescribeKeyErrorKind::DependencyTimeoutError(inner) => inner.code(),
            DescribeKeyErrorKind::KmsInternalError(inner) => inner.code(),
            DescribeKeyErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, DescribeKeyErrorKind::NotFoundError(_))
    }
    pub fn is_invalid_arn_error(&self) -> bool {
        matches!(&self.kind, DescribeKeyErrorKind::InvalidArnError(_))
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, DescribeKeyErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, DescribeKeyErrorKind::KmsInternalError(_))
    }
}
impl std::error::Error for DescribeKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeKeyErrorKind::NotFoundError(_inner) => Some(_inner),
            DescribeKeyErrorKind::InvalidArnError(_inner) => Some(_inner),
            DescribeKeyErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            DescribeKeyErrorKind::KmsInternalError(_inner) => Some(_inner),
            DescribeKeyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Encrypt` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct EncryptError {
    /// Kind of error that occurred.
    pub kind: EncryptErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Encrypt` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum EncryptErrorKind {
    /// <p>The request was rejected because the specified entity or resource could not be
    /// found.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request was rejected because the specified KMS key is not enabled.</p>
    DisabledError(crate::error::DisabledError),
    /// <p>The request was rejected because the specified KMS key was not available. You can retry
    /// the request.</p>
    KeyUnavailableError(crate::error::KeyUnavailableError),
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because the <code>KeyUsage</code> value of the KMS key is
    /// incompatible with the API operation.</p>
    InvalidKeyUsageError(crate::error::InvalidKeyUsageError),
    /// <p>The request was rejected because the specified grant token is not valid.</p>
    InvalidGrantTokenError(crate::error::InvalidGrantTokenError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because the state of the specified resource is not valid for this
    /// request.</p>
    KmsInvalidStateError(crate::error::KmsInvalidStateError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for EncryptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EncryptErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::DisabledError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::KeyUnavailableError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::InvalidKeyUsageError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::InvalidGrantTokenError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::KmsInvalidStateError(_inner) => std::fmt::Display::fmt(_inner, f),
            EncryptErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for EncryptError {
    fn code(&self) -> Option<&str> {
        EncryptError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            EncryptErrorKind::KeyUnavailableError(inner) => Some(inner.error_kind()),
            EncryptErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            EncryptErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl EncryptError {
    pub fn new(kind: EncryptErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: EncryptErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: EncryptErrorKind::Unhandled(err.into()),
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
            EncryptErrorKind::NotFoundError(inner) => inner.code(),
            EncryptErrorKind::DisabledError(inner) => inner.code(),
            EncryptErrorKind::KeyUnavailableError(inner) => inner.code(),
            EncryptErrorKind::DependencyTimeoutError(inner) => inner.code(),
            EncryptErrorKind::InvalidKeyUsageError(inner) => inner.code(),
            EncryptErrorKind::InvalidGrantTokenError(inner) => inner.code(),
            EncryptErrorKind::KmsInternalError(inner) => inner.code(),
            EncryptErrorKind::KmsInvalidStateError(inner) => inner.code(),
            EncryptErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::NotFoundError(_))
    }
    pub fn is_disabled_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::DisabledError(_))
    }
    pub fn is_key_unavailable_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::KeyUnavailableError(_))
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_invalid_key_usage_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::InvalidKeyUsageError(_))
    }
    pub fn is_invalid_grant_token_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::InvalidGrantTokenError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::KmsInternalError(_))
    }
    pub fn is_kms_invalid_state_error(&self) -> bool {
        matches!(&self.kind, EncryptErrorKind::KmsInvalidStateError(_))
    }
}
impl std::error::Error for EncryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EncryptErrorKind::NotFoundError(_inner) => Some(_inner),
            EncryptErrorKind::DisabledError(_inner) => Some(_inner),
            EncryptErrorKind::KeyUnavailableError(_inner) => Some(_inner),
            EncryptErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            EncryptErrorKind::InvalidKeyUsageError(_inner) => Some(_inner),
            EncryptErrorKind::InvalidGrantTokenError(_inner) => Some(_inner),
            EncryptErrorKind::KmsInternalError(_inner) => Some(_inner),
            EncryptErrorKind::KmsInvalidStateError(_inner) => Some(_inner),
            EncryptErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Decrypt` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DecryptError {
    /// Kind of error that occurred.
    pub kind: DecryptErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Decrypt` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DecryptErrorKind {
    /// <p>The request was rejected because the specified entity or resource could not be
    /// found.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request was rejected because the specified KMS key is not enabled.</p>
    DisabledError(crate::error::DisabledError),
    /// <p>From the <a>Decrypt</a> or <a>ReEncrypt</a> operation, the request was rejected because
    /// the specified ciphertext, or additional authenticated data incorporated into the ciphertext,
    /// such as the encryption context, is corrupted, missing, or otherwise invalid.</p>
    InvalidCiphertextError(crate::error::InvalidCiphertextError),
    /// <p>The request was rejected because the specified KMS key was not available. You can retry
    /// the request.</p>
    KeyUnavailableError(crate::error::KeyUnavailableError),
    /// <p>The request was rejected because the specified KMS key cannot decrypt the data.</p>
    IncorrectKeyError(crate::error::IncorrectKeyError),
    /// <p>The request was rejected because the <code>KeyUsage</code> value of the KMS key is
    /// incompatible with the API operation.</p>
    InvalidKeyUsageError(crate::error::InvalidKeyUsageError),
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because the specified grant token is not valid.</p>
    InvalidGrantTokenError(crate::error::InvalidGrantTokenError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because the state of the specified resource is not valid for this
    /// request.</p>
    KmsInvalidStateError(crate::error::KmsInvalidStateError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DecryptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DecryptErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::DisabledError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::InvalidCiphertextError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::KeyUnavailableError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::IncorrectKeyError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::InvalidKeyUsageError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::InvalidGrantTokenError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::KmsInvalidStateError(_inner) => std::fmt::Display::fmt(_inner, f),
            DecryptErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DecryptError {
    fn code(&self) -> Option<&str> {
        DecryptError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DecryptErrorKind::KeyUnavailableError(inner) => Some(inner.error_kind()),
            DecryptErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            DecryptErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl DecryptError {
    pub fn new(kind: DecryptErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DecryptErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DecryptErrorKind::Unhandled(err.into()),
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
            DecryptErrorKind::NotFoundError(inner) => inner.code(),
            DecryptErrorKind::DisabledError(inner) => inner.code(),
            DecryptErrorKind::InvalidCiphertextError(inner) => inner.code(),
            DecryptErrorKind::KeyUnavailableError(inner) => inner.code(),
            DecryptErrorKind::IncorrectKeyError(inner) => inner.code(),
            DecryptErrorKind::InvalidKeyUsageError(inner) => inner.code(),
            DecryptErrorKind::DependencyTimeoutError(inner) => inner.code(),
            DecryptErrorKind::InvalidGrantTokenError(inner) => inner.code(),
            DecryptErrorKind::KmsInternalError(inner) => inner.code(),
            DecryptErrorKind::KmsInvalidStateError(inner) => inner.code(),
            DecryptErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::NotFoundError(_))
    }
    pub fn is_disabled_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::DisabledError(_))
    }
    pub fn is_invalid_ciphertext_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::InvalidCiphertextError(_))
    }
    pub fn is_key_unavailable_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::KeyUnavailableError(_))
    }
    pub fn is_incorrect_key_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::IncorrectKeyError(_))
    }
    pub fn is_invalid_key_usage_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::InvalidKeyUsageError(_))
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_invalid_grant_token_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::InvalidGrantTokenError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::KmsInternalError(_))
    }
    pub fn is_kms_invalid_state_error(&self) -> bool {
        matches!(&self.kind, DecryptErrorKind::KmsInvalidStateError(_))
    }
}
impl std::error::Error for DecryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DecryptErrorKind::NotFoundError(_inner) => Some(_inner),
            DecryptErrorKind::DisabledError(_inner) => Some(_inner),
            DecryptErrorKind::InvalidCiphertextError(_inner) => Some(_inner),
            DecryptErrorKind::KeyUnavailableError(_inner) => Some(_inner),
            DecryptErrorKind::IncorrectKeyError(_inner) => Some(_inner),
            DecryptErrorKind::InvalidKeyUsageError(_inner) => Some(_inner),
            DecryptErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            DecryptErrorKind::InvalidGrantTokenError(_inner) => Some(_inner),
            DecryptErrorKind::KmsInternalError(_inner) => Some(_inner),
            DecryptErrorKind::KmsInvalidStateError(_inner) => Some(_inner),
            DecryptErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GenerateDataKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GenerateDataKeyError {
    /// Kind of error that occurred.
    pub kind: GenerateDataKeyErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GenerateDataKey` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GenerateDataKeyErrorKind {
    /// <p>The request was rejected because the specified entity or resource could not be
    /// found.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request was rejected because the specified KMS key is not enabled.</p>
    DisabledError(crate::error::DisabledError),
    /// <p>The request was rejected because the specified KMS key was not available. You can retry
    /// the request.</p>
    KeyUnavailableError(crate::error::KeyUnavailableError),
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because the <code>KeyUsage</code> value of the KMS key is
    /// incompatible with the API operation.</p>
    InvalidKeyUsageError(crate::error::InvalidKeyUsageError),
    /// <p>The request was rejected because the specified grant token is not valid.</p>
    InvalidGrantTokenError(crate::error::InvalidGrantTokenError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because the state of the specified resource is not valid for this
    /// request.</p>
    KmsInvalidStateError(crate::error::KmsInvalidStateError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GenerateDataKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GenerateDataKeyErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::DisabledError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::KeyUnavailableError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::InvalidKeyUsageError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::InvalidGrantTokenError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::KmsInvalidStateError(_inner) => std::fmt::Display::fmt(_inner, f),
            GenerateDataKeyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GenerateDataKeyError {
    fn code(&self) -> Option<&str> {
        GenerateDataKeyError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GenerateDataKeyErrorKind::KeyUnavailableError(inner) => Some(inner.error_kind()),
            GenerateDataKeyErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            GenerateDataKeyErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl GenerateDataKeyError {
    pub fn new(kind: GenerateDataKeyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GenerateDataKeyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GenerateDataKeyErrorKind::Unhandled(err.into()),
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
            GenerateDataKeyErrorKind::NotFoundError(inner) => inner.code(),
            GenerateDataKeyErrorKind::DisabledError(inner) => inner.code(),
            GenerateDataKeyErrorKind::KeyUnavailableError(inner) => inner.code(),
            GenerateDataKeyErrorKind::DependencyTimeoutError(inner) => inner.code(),
            GenerateDataKeyErrorKind::InvalidKeyUsageError(inner) => inner.code(),
            GenerateDataKeyErrorKind::InvalidGrantTokenError(inner) => inner.code(),
            GenerateDataKeyErrorKind::KmsInternalError(inner) => inner.code(),
            GenerateDataKeyErrorKind::KmsInvalidStateError(inner) => inner.code(),
            GenerateDataKeyErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::NotFoundError(_))
    }
    pub fn is_disabled_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::DisabledError(_))
    }
    pub fn is_key_unavailable_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::KeyUnavailableError(_))
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_invalid_key_usage_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::InvalidKeyUsageError(_))
    }
    pub fn is_invalid_grant_token_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::InvalidGrantTokenError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::KmsInternalError(_))
    }
    pub fn is_kms_invalid_state_error(&self) -> bool {
        matches!(&self.kind, GenerateDataKeyErrorKind::KmsInvalidStateError(_))
    }
}
impl std::error::Error for GenerateDataKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GenerateDataKeyErrorKind::NotFoundError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::DisabledError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::KeyUnavailableError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::InvalidKeyUsageError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::InvalidGrantTokenError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::KmsInternalError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::KmsInvalidStateError(_inner) => Some(_inner),
            GenerateDataKeyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListKeys` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListKeysError {
    /// Kind of error that occurred.
    pub kind: ListKeysErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListKeys` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListKeysErrorKind {
    /// <p>The system timed out while trying to fulfill the request. The request can be
    /// retried.</p>
    DependencyTimeoutError(crate::error::DependencyTimeoutError),
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because the marker that specifies where pagination should next
    /// begin is not valid.</p>
    InvalidMarkerError(crate::error::InvalidMarkerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListKeysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListKeysErrorKind::DependencyTimeoutError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListKeysErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListKeysErrorKind::InvalidMarkerError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListKeysErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListKeysError {
    fn code(&self) -> Option<&str> {
        ListKeysError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListKeysErrorKind::DependencyTimeoutError(inner) => Some(inner.error_kind()),
            ListKeysErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl ListKeysError {
    pub fn new(kind: ListKeysErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListKeysErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListKeysErrorKind::Unhandled(err.into()),
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
            ListKeysErrorKind::DependencyTimeoutError(inner) => inner.code(),
            ListKeysErrorKind::KmsInternalError(inner) => inner.code(),
            ListKeysErrorKind::InvalidMarkerError(inner) => inner.code(),
            ListKeysErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_dependency_timeout_error(&self) -> bool {
        matches!(&self.kind, ListKeysErrorKind::DependencyTimeoutError(_))
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, ListKeysErrorKind::KmsInternalError(_))
    }
    pub fn is_invalid_marker_error(&self) -> bool {
        matches!(&self.kind, ListKeysErrorKind::InvalidMarkerError(_))
    }
}
impl std::error::Error for ListKeysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListKeysErrorKind::DependencyTimeoutError(_inner) => Some(_inner),
            ListKeysErrorKind::KmsInternalError(_inner) => Some(_inner),
            ListKeysErrorKind::InvalidMarkerError(_inner) => Some(_inner),
            ListKeysErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListResourceTags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListResourceTagsError {
    /// Kind of error that occurred.
    pub kind: ListResourceTagsErrorKind,
    /// Additional metadata about the error, including error code, message, and request ID.
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListResourceTags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListResourceTagsErrorKind {
    /// <p>The request was rejected because an internal exception occurred. The request can be
    /// retried.</p>
    KmsInternalError(crate::error::KmsInternalError),
    /// <p>The request was rejected because the specified entity or resource could not be
    /// found.</p>
    NotFoundError(crate::error::NotFoundError),
    /// <p>The request was rejected because a specified ARN, or an ARN in a key policy, is not
    /// valid.</p>
    InvalidArnError(crate::error::InvalidArnError),
    /// <p>The request was rejected because the marker that specifies where pagination should next
    /// begin is not valid.</p>
    InvalidMarkerError(crate::error::InvalidMarkerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListResourceTagsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListResourceTagsErrorKind::KmsInternalError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListResourceTagsErrorKind::NotFoundError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListResourceTagsErrorKind::InvalidArnError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListResourceTagsErrorKind::InvalidMarkerError(_inner) => std::fmt::Display::fmt(_inner, f),
            ListResourceTagsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListResourceTagsError {
    fn code(&self) -> Option<&str> {
        ListResourceTagsError::code(self)
    }
    fn error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListResourceTagsErrorKind::KmsInternalError(inner) => Some(inner.error_kind()),
            _ => None,
        }
    }
}
impl ListResourceTagsError {
    pub fn new(kind: ListResourceTagsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListResourceTagsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListResourceTagsErrorKind::Unhandled(err.into()),
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
            ListResourceTagsErrorKind::KmsInternalError(inner) => inner.code(),
            ListResourceTagsErrorKind::NotFoundError(inner) => inner.code(),
            ListResourceTagsErrorKind::InvalidArnError(inner) => inner.code(),
            ListResourceTagsErrorKind::InvalidMarkerError(inner) => inner.code(),
            ListResourceTagsErrorKind::Unhandled(_) => None,
        })
    }
    pub fn is_kms_internal_error(&self) -> bool {
        matches!(&self.kind, ListResourceTagsErrorKind::KmsInternalError(_))
    }
    pub fn is_not_found_error(&self) -> bool {
        matches!(&self.kind, ListResourceTagsErrorKind::NotFoundError(_))
    }
    pub fn is_invalid_arn_error(&self) -> bool {
        matches!(&self.kind, ListResourceTagsErrorKind::InvalidArnError(_))
    }
    pub fn is_invalid_marker_error(&self) -> bool {
        matches!(&self.kind, ListResourceTagsErrorKind::InvalidMarkerError(_))
    }
}
impl std::error::Error for ListResourceTagsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListResourceTagsErrorKind::KmsInternalError(_inner) => Some(_inner),
            ListResourceTagsErrorKind::NotFoundError(_inner) => Some(_inner),
            ListResourceTagsErrorKind::InvalidArnError(_inner) => Some(_inner),
            ListResourceTagsErrorKind::InvalidMarkerError(_inner) => Some(_inner),
            ListResourceTagsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>The system timed out while trying to fulfill the request. The request can be
/// retried.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DependencyTimeoutError {
    pub message: std::option::Option<std::string::String>,
}
impl DependencyTimeoutError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for DependencyTimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DependencyTimeoutError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl DependencyTimeoutError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("DependencyTimeoutException")
    }
}
impl std::fmt::Display for DependencyTimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DependencyTimeoutError [DependencyTimeoutException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DependencyTimeoutError {}
/// See [`DependencyTimeoutError`](crate::error::DependencyTimeoutError)
pub mod dependency_timeout_error {
    /// A builder for [`DependencyTimeoutError`](crate::error::DependencyTimeoutError)
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
        /// Consumes the builder and constructs a [`DependencyTimeoutError`](crate::error::DependencyTimeoutError)
        pub fn build(self) -> crate::error::DependencyTimeoutError {
            crate::error::DependencyTimeoutError {
                message: self.message,
            }
        }
    }
}
impl DependencyTimeoutError {
    /// Creates a new builder-style object to manufacture [`DependencyTimeoutError`](crate::error::DependencyTimeoutError)
    pub fn builder() -> crate::error::dependency_timeout_error::Builder {
        crate::error::dependency_timeout_error::Builder::default()
    }
}

/// <p>The request was rejected because a specified ARN, or an ARN in a key policy, is not
/// valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidArnError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidArnError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidArnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidArnError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidArnError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidArnException")
    }
}
impl std::fmt::Display for InvalidArnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidArnError [InvalidArnException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidArnError {}
/// See [`InvalidArnError`](crate::error::InvalidArnError)
pub mod invalid_arn_error {
    /// A builder for [`InvalidArnError`](crate::error::InvalidArnError)
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
        /// Consumes the builder and constructs a [`InvalidArnError`](crate::error::InvalidArnError)
        pub fn build(self) -> crate::error::InvalidArnError {
            crate::error::InvalidArnError {
                message: self.message,
            }
        }
    }
}
impl InvalidArnError {
    /// Creates a new builder-style object to manufacture [`InvalidArnError`](crate::error::InvalidArnError)
    pub fn builder() -> crate::error::invalid_arn_error::Builder {
        crate::error::invalid_arn_error::Builder::default()
    }
}

/// <p>The request was rejected because an internal exception occurred. The request can be
/// retried.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct KmsInternalError {
    pub message: std::option::Option<std::string::String>,
}
impl KmsInternalError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for KmsInternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("KmsInternalError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl KmsInternalError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("KMSInternalException")
    }
}
impl std::fmt::Display for KmsInternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KmsInternalError [KMSInternalException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for KmsInternalError {}
/// See [`KmsInternalError`](crate::error::KmsInternalError)
pub mod kms_internal_error {
    /// A builder for [`KmsInternalError`](crate::error::KmsInternalError)
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
        /// Consumes the builder and constructs a [`KmsInternalError`](crate::error::KmsInternalError)
        pub fn build(self) -> crate::error::KmsInternalError {
            crate::error::KmsInternalError {
                message: self.message,
            }
        }
    }
}
impl KmsInternalError {
    /// Creates a new builder-style object to manufacture [`KmsInternalError`](crate::error::KmsInternalError)
    pub fn builder() -> crate::error::kms_internal_error::Builder {
        crate::error::kms_internal_error::Builder::default()
    }
}

/// <p>The request was rejected because a quota was exceeded.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct LimitExceededError {
    pub message: std::option::Option<std::string::String>,
}
impl LimitExceededError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for LimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("LimitExceededError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl LimitExceededError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn code(&self) -> Option<&str> {
        Some("LimitExceededException")
    }
}
impl std::fmt::Display for LimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LimitExceededError [LimitExceededException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for LimitExceededError {}
/// See [`LimitExceededError`](crate::error::LimitExceededError)
pub mod limit_exceeded_error {
    /// A builder for [`LimitExceededError`](crate::error::LimitExceededError)
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
        /// Consumes the builder and constructs a [`LimitExceededError`](crate::error::LimitExceededError)
        pub fn build(self) -> crate::error::LimitExceededError {
            crate::error::LimitExceededError {
                message: self.message,
            }
        }
    }
}
impl LimitExceededError {
    /// Creates a new builder-style object to manufacture [`LimitExceededError`](crate::error::LimitExceededError)
    pub fn builder() -> crate::error::limit_exceeded_error::Builder {
        crate::error::limit_exceeded_error::Builder::default()
    }
}

/// <p>The request was rejected because the specified policy is not syntactically or
/// semantically correct.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct MalformedPolicyDocumentError {
    pub message: std::option::Option<std::string::String>,
}
impl MalformedPolicyDocumentError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for MalformedPolicyDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MalformedPolicyDocumentError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl MalformedPolicyDocumentError {
    pub fn code(&self) -> Option<&str> {
        Some("MalformedPolicyDocumentException")
    }
}
impl std::fmt::Display for MalformedPolicyDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MalformedPolicyDocumentError [MalformedPolicyDocumentException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for MalformedPolicyDocumentError {}
/// See [`MalformedPolicyDocumentError`](crate::error::MalformedPolicyDocumentError)
pub mod malformed_policy_document_error {
    /// A builder for [`MalformedPolicyDocumentError`](crate::error::MalformedPolicyDocumentError)
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
        /// Consumes the builder and constructs a [`MalformedPolicyDocumentError`](crate::error::MalformedPolicyDocumentError)
        pub fn build(self) -> crate::error::MalformedPolicyDocumentError {
            crate::error::MalformedPolicyDocumentError {
                message: self.message,
            }
        }
    }
}
impl MalformedPolicyDocumentError {
    /// Creates a new builder-style object to manufacture [`MalformedPolicyDocumentError`](crate::error::MalformedPolicyDocumentError)
    pub fn builder() -> crate::error::malformed_policy_document_error::Builder {
        crate::error::malformed_policy_document_error::Builder::default()
    }
}

/// <p>The request was rejected because one or more tags are not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TagError {
    pub message: std::option::Option<std::string::String>,
}
impl TagError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TagError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl TagError {
    pub fn code(&self) -> Option<&str> {
        Some("TagException")
    }
}
impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TagError [TagException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TagError {}
/// See [`TagError`](crate::error::TagError)
pub mod tag_error {
    /// A builder for [`TagError`](crate::error::TagError)
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
        /// Consumes the builder and constructs a [`TagError`](crate::error::TagError)
        pub fn build(self) -> crate::error::TagError {
            crate::error::TagError {
                message: self.message,
            }
        }
    }
}
impl TagError {
    /// Creates a new builder-style object to manufacture [`TagError`](crate::error::TagError)
    pub fn builder() -> crate::error::tag_error::Builder {
        crate::error::tag_error::Builder::default()
    }
}

/// <p>The request was rejected because the specified entity or resource could not be
/// found.</p>
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
        Some("NotFoundException")
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

/// <p>The request was rejected because the specified KMS key is not enabled.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DisabledError {
    pub message: std::option::Option<std::string::String>,
}
impl DisabledError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for DisabledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DisabledError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl DisabledError {
    pub fn code(&self) -> Option<&str> {
        Some("DisabledException")
    }
}
impl std::fmt::Display for DisabledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DisabledError [DisabledException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DisabledError {}
/// See [`DisabledError`](crate::error::DisabledError)
pub mod disabled_error {
    /// A builder for [`DisabledError`](crate::error::DisabledError)
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
        /// Consumes the builder and constructs a [`DisabledError`](crate::error::DisabledError)
        pub fn build(self) -> crate::error::DisabledError {
            crate::error::DisabledError {
                message: self.message,
            }
        }
    }
}
impl DisabledError {
    /// Creates a new builder-style object to manufacture [`DisabledError`](crate::error::DisabledError)
    pub fn builder() -> crate::error::disabled_error::Builder {
        crate::error::disabled_error::Builder::default()
    }
}

/// <p>The request was rejected because the specified KMS key was not available. You can retry
/// the request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct KeyUnavailableError {
    pub message: std::option::Option<std::string::String>,
}
impl KeyUnavailableError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for KeyUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("KeyUnavailableError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl KeyUnavailableError {
    pub fn error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn code(&self) -> Option<&str> {
        Some("KeyUnavailableException")
    }
}
impl std::fmt::Display for KeyUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyUnavailableError [KeyUnavailableException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for KeyUnavailableError {}
/// See [`KeyUnavailableError`](crate::error::KeyUnavailableError)
pub mod key_unavailable_error {
    /// A builder for [`KeyUnavailableError`](crate::error::KeyUnavailableError)
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
        /// Consumes the builder and constructs a [`KeyUnavailableError`](crate::error::KeyUnavailableError)
        pub fn build(self) -> crate::error::KeyUnavailableError {
            crate::error::KeyUnavailableError {
                message: self.message,
            }
        }
    }
}
impl KeyUnavailableError {
    /// Creates a new builder-style object to manufacture [`KeyUnavailableError`](crate::error::KeyUnavailableError)
    pub fn builder() -> crate::error::key_unavailable_error::Builder {
        crate::error::key_unavailable_error::Builder::default()
    }
}

/// <p>The request was rejected because the <code>KeyUsage</code> value of the KMS key is
/// incompatible with the API operation.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidKeyUsageError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidKeyUsageError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidKeyUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidKeyUsageError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidKeyUsageError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidKeyUsageException")
    }
}
impl std::fmt::Display for InvalidKeyUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidKeyUsageError [InvalidKeyUsageException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidKeyUsageError {}
/// See [`InvalidKeyUsageError`](crate::error::InvalidKeyUsageError)
pub mod invalid_key_usage_error {
    /// A builder for [`InvalidKeyUsageError`](crate::error::InvalidKeyUsageError)
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
        /// Consumes the builder and constructs a [`InvalidKeyUsageError`](crate::error::InvalidKeyUsageError)
        pub fn build(self) -> crate::error::InvalidKeyUsageError {
            crate::error::InvalidKeyUsageError {
                message: self.message,
            }
        }
    }
}
impl InvalidKeyUsageError {
    /// Creates a new builder-style object to manufacture [`InvalidKeyUsageError`](crate::error::InvalidKeyUsageError)
    pub fn builder() -> crate::error::invalid_key_usage_error::Builder {
        crate::error::invalid_key_usage_error::Builder::default()
    }
}

/// <p>The request was rejected because the specified grant token is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidGrantTokenError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidGrantTokenError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidGrantTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidGrantTokenError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidGrantTokenError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidGrantTokenException")
    }
}
impl std::fmt::Display for InvalidGrantTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidGrantTokenError [InvalidGrantTokenException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidGrantTokenError {}
/// See [`InvalidGrantTokenError`](crate::error::InvalidGrantTokenError)
pub mod invalid_grant_token_error {
    /// A builder for [`InvalidGrantTokenError`](crate::error::InvalidGrantTokenError)
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
        /// Consumes the builder and constructs a [`InvalidGrantTokenError`](crate::error::InvalidGrantTokenError)
        pub fn build(self) -> crate::error::InvalidGrantTokenError {
            crate::error::InvalidGrantTokenError {
                message: self.message,
            }
        }
    }
}
impl InvalidGrantTokenError {
    /// Creates a new builder-style object to manufacture [`InvalidGrantTokenError`](crate::error::InvalidGrantTokenError)
    pub fn builder() -> crate::error::invalid_grant_token_error::Builder {
        crate::error::invalid_grant_token_error::Builder::default()
    }
}

/// <p>The request was rejected because the state of the specified resource is not valid for this
/// request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct KmsInvalidStateError {
    pub message: std::option::Option<std::string::String>,
}
impl KmsInvalidStateError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for KmsInvalidStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("KmsInvalidStateError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl KmsInvalidStateError {
    pub fn code(&self) -> Option<&str> {
        Some("KMSInvalidStateException")
    }
}
impl std::fmt::Display for KmsInvalidStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KmsInvalidStateError [KMSInvalidStateException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for KmsInvalidStateError {}
/// See [`KmsInvalidStateError`](crate::error::KmsInvalidStateError)
pub mod kms_invalid_state_error {
    /// A builder for [`KmsInvalidStateError`](crate::error::KmsInvalidStateError)
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
        /// Consumes the builder and constructs a [`KmsInvalidStateError`](crate::error::KmsInvalidStateError)
        pub fn build(self) -> crate::error::KmsInvalidStateError {
            crate::error::KmsInvalidStateError {
                message: self.message,
            }
        }
    }
}
impl KmsInvalidStateError {
    /// Creates a new builder-style object to manufacture [`KmsInvalidStateError`](crate::error::KmsInvalidStateError)
    pub fn builder() -> crate::error::kms_invalid_state_error::Builder {
        crate::error::kms_invalid_state_error::Builder::default()
    }
}

/// <p>From the <a>Decrypt</a> or <a>ReEncrypt</a> operation, the request was rejected because
/// the specified ciphertext, or additional authenticated data incorporated into the ciphertext,
/// such as the encryption context, is corrupted, missing, or otherwise invalid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidCiphertextError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidCiphertextError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidCiphertextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidCiphertextError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidCiphertextError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidCiphertextException")
    }
}
impl std::fmt::Display for InvalidCiphertextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidCiphertextError [InvalidCiphertextException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidCiphertextError {}
/// See [`InvalidCiphertextError`](crate::error::InvalidCiphertextError)
pub mod invalid_ciphertext_error {
    /// A builder for [`InvalidCiphertextError`](crate::error::InvalidCiphertextError)
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
        /// Consumes the builder and constructs a [`InvalidCiphertextError`](crate::error::InvalidCiphertextError)
        pub fn build(self) -> crate::error::InvalidCiphertextError {
            crate::error::InvalidCiphertextError {
                message: self.message,
            }
        }
    }
}
impl InvalidCiphertextError {
    /// Creates a new builder-style object to manufacture [`InvalidCiphertextError`](crate::error::InvalidCiphertextError)
    pub fn builder() -> crate::error::invalid_ciphertext_error::Builder {
        crate::error::invalid_ciphertext_error::Builder::default()
    }
}

/// <p>The request was rejected because the specified KMS key cannot decrypt the data.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct IncorrectKeyError {
    pub message: std::option::Option<std::string::String>,
}
impl IncorrectKeyError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for IncorrectKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("IncorrectKeyError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl IncorrectKeyError {
    pub fn code(&self) -> Option<&str> {
        Some("IncorrectKeyException")
    }
}
impl std::fmt::Display for IncorrectKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IncorrectKeyError [IncorrectKeyException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for IncorrectKeyError {}
/// See [`IncorrectKeyError`](crate::error::IncorrectKeyError)
pub mod incorrect_key_error {
    /// A builder for [`IncorrectKeyError`](crate::error::IncorrectKeyError)
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
        /// Consumes the builder and constructs a [`IncorrectKeyError`](crate::error::IncorrectKeyError)
        pub fn build(self) -> crate::error::IncorrectKeyError {
            crate::error::IncorrectKeyError {
                message: self.message,
            }
        }
    }
}
impl IncorrectKeyError {
    /// Creates a new builder-style object to manufacture [`IncorrectKeyError`](crate::error::IncorrectKeyError)
    pub fn builder() -> crate::error::incorrect_key_error::Builder {
        crate::error::incorrect_key_error::Builder::default()
    }
}

/// <p>The request was rejected because the marker that specifies where pagination should next
/// begin is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct InvalidMarkerError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidMarkerError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InvalidMarkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidMarkerError");
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        formatter.finish()
    }
}
impl InvalidMarkerError {
    pub fn code(&self) -> Option<&str> {
        Some("InvalidMarkerException")
    }
}
impl std::fmt::Display for InvalidMarkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidMarkerError [InvalidMarkerException]")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidMarkerError {}
/// See [`InvalidMarkerError`](crate::error::InvalidMarkerError)
pub mod invalid_marker_error {
    /// A builder for [`InvalidMarkerError`](crate::error::InvalidMarkerError)
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
        /// Consumes the builder and constructs a [`InvalidMarkerError`](crate::error::InvalidMarkerError)
        pub fn build(self) -> crate::error::InvalidMarkerError {
            crate::error::InvalidMarkerError {
                message: self.message,
            }
        }
    }
}
impl InvalidMarkerError {
    /// Creates a new builder-style object to manufacture [`InvalidMarkerError`](crate::error::InvalidMarkerError)
    pub fn builder() -> crate::error::invalid_marker_error::Builder {
        crate::error::invalid_marker_error::Builder::default()
    }
}
