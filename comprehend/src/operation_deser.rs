/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_dominant_language_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectDominantLanguageOutput, crate::error::DetectDominantLanguageError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DetectDominantLanguageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DetectDominantLanguageError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => crate::error::DetectDominantLanguageError {
            meta: generic,
            kind: crate::error::DetectDominantLanguageErrorKind::InvalidRequestError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_request_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_request_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectDominantLanguageError::unhandled)?;
                output.build()
            }),
        },
        "TextSizeLimitExceededException" => crate::error::DetectDominantLanguageError {
            meta: generic,
            kind: crate::error::DetectDominantLanguageErrorKind::TextSizeLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::text_size_limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_text_size_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectDominantLanguageError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DetectDominantLanguageError {
            meta: generic,
            kind: crate::error::DetectDominantLanguageErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectDominantLanguageError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DetectDominantLanguageError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_dominant_language_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectDominantLanguageOutput, crate::error::DetectDominantLanguageError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::detect_dominant_language_output::Builder::default();
        output = crate::json_deser::deser_operation_detect_dominant_language(response.body().as_ref(), output)
            .map_err(crate::error::DetectDominantLanguageError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_sentiment_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectSentimentOutput, crate::error::DetectSentimentError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DetectSentimentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DetectSentimentError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => crate::error::DetectSentimentError {
            meta: generic,
            kind: crate::error::DetectSentimentErrorKind::InvalidRequestError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_request_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_request_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectSentimentError::unhandled)?;
                output.build()
            }),
        },
        "TextSizeLimitExceededException" => crate::error::DetectSentimentError {
            meta: generic,
            kind: crate::error::DetectSentimentErrorKind::TextSizeLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::text_size_limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_text_size_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectSentimentError::unhandled)?;
                output.build()
            }),
        },
        "UnsupportedLanguageException" => crate::error::DetectSentimentError {
            meta: generic,
            kind: crate::error::DetectSentimentErrorKind::UnsupportedLanguageError({
                #[allow(unused_mut)]
                let mut output = crate::error::unsupported_language_error::Builder::default();
                output = crate::json_deser::deser_structure_unsupported_language_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectSentimentError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DetectSentimentError {
            meta: generic,
            kind: crate::error::DetectSentimentErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectSentimentError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DetectSentimentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_sentiment_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectSentimentOutput, crate::error::DetectSentimentError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::detect_sentiment_output::Builder::default();
        output = crate::json_deser::deser_operation_detect_sentiment(response.body().as_ref(), output)
            .map_err(crate::error::DetectSentimentError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_entities_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectEntitiesOutput, crate::error::DetectEntitiesError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DetectEntitiesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DetectEntitiesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => crate::error::DetectEntitiesError {
            meta: generic,
            kind: crate::error::DetectEntitiesErrorKind::InvalidRequestError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_request_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_request_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectEntitiesError::unhandled)?;
                output.build()
            }),
        },
        "ResourceUnavailableException" => crate::error::DetectEntitiesError {
            meta: generic,
            kind: crate::error::DetectEntitiesErrorKind::ResourceUnavailableError({
                #[allow(unused_mut)]
                let mut output = crate::error::resource_unavailable_error::Builder::default();
                output = crate::json_deser::deser_structure_resource_unavailable_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectEntitiesError::unhandled)?;
                output.build()
            }),
        },
        "TextSizeLimitExceededException" => crate::error::DetectEntitiesError {
            meta: generic,
            kind: crate::error::DetectEntitiesErrorKind::TextSizeLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::text_size_limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_text_size_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectEntitiesError::unhandled)?;
                output.build()
            }),
        },
        "UnsupportedLanguageException" => crate::error::DetectEntitiesError {
            meta: generic,
            kind: crate::error::DetectEntitiesErrorKind::UnsupportedLanguageError({
                #[allow(unused_mut)]
                let mut output = crate::error::unsupported_language_error::Builder::default();
                output = crate::json_deser::deser_structure_unsupported_language_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectEntitiesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DetectEntitiesError {
            meta: generic,
            kind: crate::error::DetectEntitiesErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectEntitiesError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DetectEntitiesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_entities_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectEntitiesOutput, crate::error::DetectEntitiesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::detect_entities_output::Builder::default();
        output = crate::json_deser::deser_operation_detect_entities(response.body().as_ref(), output)
            .map_err(crate::error::DetectEntitiesError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_key_phrases_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectKeyPhrasesOutput, crate::error::DetectKeyPhrasesError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DetectKeyPhrasesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => crate::error::DetectKeyPhrasesError {
            meta: generic,
            kind: crate::error::DetectKeyPhrasesErrorKind::InvalidRequestError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_request_error::Builder::default();
                output = crate::json_deser::deser_structure_invalid_request_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
                output.build()
            }),
        },
        "TextSizeLimitExceededException" => crate::error::DetectKeyPhrasesError {
            meta: generic,
            kind: crate::error::DetectKeyPhrasesErrorKind::TextSizeLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::text_size_limit_exceeded_error::Builder::default();
                output = crate::json_deser::deser_structure_text_size_limit_exceeded_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
                output.build()
            }),
        },
        "UnsupportedLanguageException" => crate::error::DetectKeyPhrasesError {
            meta: generic,
            kind: crate::error::DetectKeyPhrasesErrorKind::UnsupportedLanguageError({
                #[allow(unused_mut)]
                let mut output = crate::error::unsupported_language_error::Builder::default();
                output = crate::json_deser::deser_structure_unsupported_language_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerException" => crate::error::DetectKeyPhrasesError {
            meta: generic,
            kind: crate::error::DetectKeyPhrasesErrorKind::InternalServerError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error::Builder::default();
                output = crate::json_deser::deser_structure_internal_server_error_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DetectKeyPhrasesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_detect_key_phrases_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DetectKeyPhrasesOutput, crate::error::DetectKeyPhrasesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::detect_key_phrases_output::Builder::default();
        output = crate::json_deser::deser_operation_detect_key_phrases(response.body().as_ref(), output)
            .map_err(crate::error::DetectKeyPhrasesError::unhandled)?;
        output.build()
    })
}
