/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_translate_text_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TranslateTextOutput, crate::error::TranslateTextError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::TranslateTextError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::TranslateTextError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::InvalidRequestError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_request_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_request_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "TextSizeLimitExceededException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::TextSizeLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::text_size_limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_text_size_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::TooManyRequestsError({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_error::Builder::default();
                output = crate::json_deser::deser_structure_too_many_requests_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "UnsupportedLanguagePairException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::UnsupportedLanguagePairError({
                #[allow(unused_mut)]
                let mut output = crate::error::unsupported_language_pair_error::Builder::default();
                output = crate::json_deser::deser_structure_unsupported_language_pair_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "DetectedLanguageLowConfidenceException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::DetectedLanguageLowConfidenceError({
                #[allow(unused_mut)]
                let mut output = crate::error::detected_language_low_confidence_error::Builder::default();
                output = crate::json_deser::deser_structure_detected_language_low_confidence_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "ResourceNotFoundException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::ResourceNotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        "ServiceUnavailableException" => crate::error::TranslateTextError {
            meta: generic,
            kind: crate::error::TranslateTextErrorKind::ServiceUnavailableError({
                #[allow(unused_mut)]
                let mut output = crate::error::service_unavailable_error::Builder::default();
                output = crate::json_deser::deser_structure_service_unavailable_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::TranslateTextError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::TranslateTextError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_translate_text_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TranslateTextOutput, crate::error::TranslateTextError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::translate_text_output::Builder::default();
        output = crate::json_deser::deser_operation_translate_text(response.body().as_ref(), output)
            .map_err(crate::error::TranslateTextError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_terminologies_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTerminologiesOutput, crate::error::ListTerminologiesError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTerminologiesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTerminologiesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameterValueException" => crate::error::ListTerminologiesError {
            meta: generic,
            kind: crate::error::ListTerminologiesErrorKind::InvalidParameterValueError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_value_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_value_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTerminologiesError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::ListTerminologiesError {
            meta: generic,
            kind: crate::error::ListTerminologiesErrorKind::TooManyRequestsError({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_error::Builder::default();
                output = crate::json_deser::deser_structure_too_many_requests_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTerminologiesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::ListTerminologiesError {
            meta: generic,
            kind: crate::error::ListTerminologiesErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTerminologiesError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::ListTerminologiesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_terminologies_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTerminologiesOutput, crate::error::ListTerminologiesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_terminologies_output::Builder::default();
        output = crate::json_deser::deser_operation_list_terminologies(response.body().as_ref(), output)
            .map_err(crate::error::ListTerminologiesError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_terminology_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetTerminologyOutput, crate::error::GetTerminologyError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::GetTerminologyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetTerminologyError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => crate::error::GetTerminologyError {
            meta: generic,
            kind: crate::error::GetTerminologyErrorKind::ResourceNotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidParameterValueException" => crate::error::GetTerminologyError {
            meta: generic,
            kind: crate::error::GetTerminologyErrorKind::InvalidParameterValueError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_value_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_value_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetTerminologyError {
            meta: generic,
            kind: crate::error::GetTerminologyErrorKind::TooManyRequestsError({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_error::Builder::default();
                output = crate::json_deser::deser_structure_too_many_requests_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::GetTerminologyError {
            meta: generic,
            kind: crate::error::GetTerminologyErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetTerminologyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetTerminologyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_terminology_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetTerminologyOutput, crate::error::GetTerminologyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_terminology_output::Builder::default();
        output = crate::json_deser::deser_operation_get_terminology(response.body().as_ref(), output)
            .map_err(crate::error::GetTerminologyError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_terminology_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTerminologyOutput, crate::error::DeleteTerminologyError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteTerminologyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteTerminologyError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => crate::error::DeleteTerminologyError {
            meta: generic,
            kind: crate::error::DeleteTerminologyErrorKind::ResourceNotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_not_found_error::Builder::default();
                output = crate::json_deser::deser_structure_resource_not_found_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::DeleteTerminologyError {
            meta: generic,
            kind: crate::error::DeleteTerminologyErrorKind::TooManyRequestsError({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_error::Builder::default();
                output = crate::json_deser::deser_structure_too_many_requests_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "InvalidParameterValueException" => crate::error::DeleteTerminologyError {
            meta: generic,
            kind: crate::error::DeleteTerminologyErrorKind::InvalidParameterValueError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_value_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_parameter_value_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTerminologyError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DeleteTerminologyError {
            meta: generic,
            kind: crate::error::DeleteTerminologyErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTerminologyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteTerminologyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_terminology_response(
    _response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTerminologyOutput, crate::error::DeleteTerminologyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_terminology_output::Builder::default();
        output.build()
    })
}
