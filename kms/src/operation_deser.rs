/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_key_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateKeyOutput, crate::error::CreateKeyError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateKeyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateKeyError::unhandled(generic)),
    };
    Err(match error_code {
        "DependencyTimeoutException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidArnException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::InvalidArnError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_arn_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_arn_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        "LimitExceededException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::LimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        "MalformedPolicyDocumentException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::MalformedPolicyDocumentError({
                #[allow(unused_mut)]
                let mut output = crate::error::malformed_policy_document_error::Builder::default();
                output = crate::json_deser::deser_structure_malformed_policy_document_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        "TagException" => crate::error::CreateKeyError {
            meta: generic,
            kind: crate::error::CreateKeyErrorKind::TagError({
                #[allow(unused_mut)]
                let mut output = crate::error::tag_error::Builder::default();
                output = crate::json_deser::deser_structure_tag_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateKeyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::CreateKeyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_key_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateKeyOutput, crate::error::CreateKeyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_key_output::Builder::default();
        output = crate::json_deser::deser_operation_create_key(response.body().as_ref(), output)
            .map_err(crate::error::CreateKeyError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_key_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeKeyOutput, crate::error::DescribeKeyError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeKeyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeKeyError::unhandled(generic)),
    };
    Err(match error_code {
        "NotFoundException" => crate::error::DescribeKeyError {
            meta: generic,
            kind: crate::error::DescribeKeyErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeKeyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidArnException" => crate::error::DescribeKeyError {
            meta: generic,
            kind: crate::error::DescribeKeyErrorKind::InvalidArnError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_arn_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_arn_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeKeyError::unhandled)?;
                output.build()
            }),
        },
        "DependencyTimeoutException" => crate::error::DescribeKeyError {
            meta: generic,
            kind: crate::error::DescribeKeyErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeKeyError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::DescribeKeyError {
            meta: generic,
            kind: crate::error::DescribeKeyErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DescribeKeyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DescribeKeyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_describe_key_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeKeyOutput, crate::error::DescribeKeyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::describe_key_output::Builder::default();
        output = crate::json_deser::deser_operation_describe_key(response.body().as_ref(), output)
            .map_err(crate::error::DescribeKeyError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_encrypt_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::EncryptOutput, crate::error::EncryptError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::EncryptError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::EncryptError::unhandled(generic)),
    };
    Err(match error_code {
        "NotFoundException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "DisabledException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::DisabledError({
                #[allow(unused_mut)]
                let mut output = crate::error::disabled_error::Builder::default();
                output = crate::json_deser::deser_structure_disabled_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "KeyUnavailableException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::KeyUnavailableError({
                #[allow(unused_mut)]
                let mut output = crate::error::key_unavailable_error::Builder::default();
                output = crate::json_deser::deser_structure_key_unavailable_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "DependencyTimeoutException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "InvalidKeyUsageException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::InvalidKeyUsageError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_key_usage_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_key_usage_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "InvalidGrantTokenException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::InvalidGrantTokenError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_grant_token_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_grant_token_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        "KMSInvalidStateException" => crate::error::EncryptError {
            meta: generic,
            kind: crate::error::EncryptErrorKind::KmsInvalidStateError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_invalid_state_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_invalid_state_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::EncryptError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::EncryptError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_encrypt_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::EncryptOutput, crate::error::EncryptError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::encrypt_output::Builder::default();
        output = crate::json_deser::deser_operation_encrypt(response.body().as_ref(), output)
            .map_err(crate::error::EncryptError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_decrypt_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DecryptOutput, crate::error::DecryptError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DecryptError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DecryptError::unhandled(generic)),
    };
    Err(match error_code {
        "NotFoundException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "DisabledException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::DisabledError({
                #[allow(unused_mut)]
                let mut output = crate::error::disabled_error::Builder::default();
                output = crate::json_deser::deser_structure_disabled_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "InvalidCiphertextException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::InvalidCiphertextError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_ciphertext_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_ciphertext_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "KeyUnavailableException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::KeyUnavailableError({
                #[allow(unused_mut)]
                let mut output = crate::error::key_unavailable_error::Builder::default();
                output = crate::json_deser::deser_structure_key_unavailable_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "IncorrectKeyException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::IncorrectKeyError({
                #[allow(unused_mut)]
                let mut output = crate::error::incorrect_key_error::Builder::default();
                output = crate::json_deser::deser_structure_incorrect_key_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "InvalidKeyUsageException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::InvalidKeyUsageError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_key_usage_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_key_usage_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "DependencyTimeoutException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "InvalidGrantTokenException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::InvalidGrantTokenError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_grant_token_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_grant_token_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        "KMSInvalidStateException" => crate::error::DecryptError {
            meta: generic,
            kind: crate::error::DecryptErrorKind::KmsInvalidStateError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_invalid_state_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_invalid_state_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DecryptError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DecryptError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_decrypt_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DecryptOutput, crate::error::DecryptError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::decrypt_output::Builder::default();
        output = crate::json_deser::deser_operation_decrypt(response.body().as_ref(), output)
            .map_err(crate::error::DecryptError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_generate_data_key_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GenerateDataKeyOutput, crate::error::GenerateDataKeyError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::GenerateDataKeyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GenerateDataKeyError::unhandled(generic)),
    };
    Err(match error_code {
        "NotFoundException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "DisabledException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::DisabledError({
                #[allow(unused_mut)]
                let mut output = crate::error::disabled_error::Builder::default();
                output = crate::json_deser::deser_structure_disabled_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "KeyUnavailableException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::KeyUnavailableError({
                #[allow(unused_mut)]
                let mut output = crate::error::key_unavailable_error::Builder::default();
                output = crate::json_deser::deser_structure_key_unavailable_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "DependencyTimeoutException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidKeyUsageException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::InvalidKeyUsageError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_key_usage_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_key_usage_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidGrantTokenException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::InvalidGrantTokenError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_grant_token_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_grant_token_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        "KMSInvalidStateException" => crate::error::GenerateDataKeyError {
            meta: generic,
            kind: crate::error::GenerateDataKeyErrorKind::KmsInvalidStateError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_invalid_state_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_invalid_state_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GenerateDataKeyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GenerateDataKeyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_generate_data_key_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GenerateDataKeyOutput, crate::error::GenerateDataKeyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::generate_data_key_output::Builder::default();
        output = crate::json_deser::deser_operation_generate_data_key(response.body().as_ref(), output)
            .map_err(crate::error::GenerateDataKeyError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_keys_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListKeysOutput, crate::error::ListKeysError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListKeysError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListKeysError::unhandled(generic)),
    };
    Err(match error_code {
        "DependencyTimeoutException" => crate::error::ListKeysError {
            meta: generic,
            kind: crate::error::ListKeysErrorKind::DependencyTimeoutError({
                #[allow(unused_mut)]
                let mut output = crate::error::dependency_timeout_error::Builder::default();
                output = crate::json_deser::deser_structure_dependency_timeout_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListKeysError::unhandled)?;
                output.build()
            }),
        },
        "KMSInternalException" => crate::error::ListKeysError {
            meta: generic,
            kind: crate::error::ListKeysErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListKeysError::unhandled)?;
                output.build()
            }),
        },
        "InvalidMarkerException" => crate::error::ListKeysError {
            meta: generic,
            kind: crate::error::ListKeysErrorKind::InvalidMarkerError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_marker_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_marker_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListKeysError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::ListKeysError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_keys_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListKeysOutput, crate::error::ListKeysError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_keys_output::Builder::default();
        output = crate::json_deser::deser_operation_list_keys(response.body().as_ref(), output)
            .map_err(crate::error::ListKeysError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_resource_tags_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListResourceTagsOutput, crate::error::ListResourceTagsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListResourceTagsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListResourceTagsError::unhandled(generic)),
    };
    Err(match error_code {
        "KMSInternalException" => crate::error::ListResourceTagsError {
            meta: generic,
            kind: crate::error::ListResourceTagsErrorKind::KmsInternalError({
                #[allow(unused_mut)]
                let mut output = crate::error::kms_internal_error::Builder::default();
                output = crate::json_deser::deser_structure_kms_internal_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListResourceTagsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::ListResourceTagsError {
            meta: generic,
            kind: crate::error::ListResourceTagsErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListResourceTagsError::unhandled)?;
                output.build()
            }),
        },
        "InvalidArnException" => crate::error::ListResourceTagsError {
            meta: generic,
            kind: crate::error::ListResourceTagsErrorKind::InvalidArnError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_arn_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_arn_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListResourceTagsError::unhandled)?;
                output.build()
            }),
        },
        "InvalidMarkerException" => crate::error::ListResourceTagsError {
            meta: generic,
            kind: crate::error::ListResourceTagsErrorKind::InvalidMarkerError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_marker_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_marker_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListResourceTagsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::ListResourceTagsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_resource_tags_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListResourceTagsOutput, crate::error::ListResourceTagsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_resource_tags_output::Builder::default();
        output = crate::json_deser::deser_operation_list_resource_tags(response.body().as_ref(), output)
            .map_err(crate::error::ListResourceTagsError::unhandled)?;
        output.build()
    })
}
