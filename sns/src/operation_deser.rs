/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_topic_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTopicOutput, crate::error::CreateTopicError> {
    let generic = aws_http::query_errors::parse_generic_error(response.body().as_ref())
        .map_err(crate::error::CreateTopicError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateTopicError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameter" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::InvalidParameterError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        "TopicLimitExceeded" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::TopicLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::topic_limit_exceeded_error::Builder::default();
                output = crate::xml_deser::deser_structure_topic_limit_exceeded_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        "InternalError" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::InternalErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_internal_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        "AuthorizationError" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::AuthorizationErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::authorization_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_authorization_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        "TagPolicy" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::TagPolicyError({
                #[allow(unused_mut)]
                let mut output = crate::error::tag_policy_error::Builder::default();
                output = crate::xml_deser::deser_structure_tag_policy_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        "ConcurrentAccess" => crate::error::CreateTopicError {
            meta: generic,
            kind: crate::error::CreateTopicErrorKind::ConcurrentAccessError({
                #[allow(unused_mut)]
                let mut output = crate::error::concurrent_access_error::Builder::default();
                output = crate::xml_deser::deser_structure_concurrent_access_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateTopicError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::CreateTopicError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_topic_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTopicOutput, crate::error::CreateTopicError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_topic_output::Builder::default();
        output = crate::xml_deser::deser_operation_create_topic(response.body().as_ref(), output)
            .map_err(crate::error::CreateTopicError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_topic_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTopicOutput, crate::error::DeleteTopicError> {
    let generic = aws_http::query_errors::parse_generic_error(response.body().as_ref())
        .map_err(crate::error::DeleteTopicError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteTopicError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameter" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::InvalidParameterError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        "InternalError" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::InternalErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_internal_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        "AuthorizationError" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::AuthorizationErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::authorization_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_authorization_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        "NotFound" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::xml_deser::deser_structure_not_found_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        "TagPolicy" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::TagPolicyError({
                #[allow(unused_mut)]
                let mut output = crate::error::tag_policy_error::Builder::default();
                output = crate::xml_deser::deser_structure_tag_policy_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        "ConcurrentAccess" => crate::error::DeleteTopicError {
            meta: generic,
            kind: crate::error::DeleteTopicErrorKind::ConcurrentAccessError({
                #[allow(unused_mut)]
                let mut output = crate::error::concurrent_access_error::Builder::default();
                output = crate::xml_deser::deser_structure_concurrent_access_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteTopicError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteTopicError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_topic_response(
    _response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTopicOutput, crate::error::DeleteTopicError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_topic_output::Builder::default();
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_topics_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTopicsOutput, crate::error::ListTopicsError> {
    let generic = aws_http::query_errors::parse_generic_error(response.body().as_ref())
        .map_err(crate::error::ListTopicsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTopicsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameter" => crate::error::ListTopicsError {
            meta: generic,
            kind: crate::error::ListTopicsErrorKind::InvalidParameterError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTopicsError::unhandled)?;
                output.build()
            }),
        },
        "InternalError" => crate::error::ListTopicsError {
            meta: generic,
            kind: crate::error::ListTopicsErrorKind::InternalErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_internal_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTopicsError::unhandled)?;
                output.build()
            }),
        },
        "AuthorizationError" => crate::error::ListTopicsError {
            meta: generic,
            kind: crate::error::ListTopicsErrorKind::AuthorizationErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::authorization_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_authorization_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::ListTopicsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::ListTopicsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_list_topics_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTopicsOutput, crate::error::ListTopicsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::list_topics_output::Builder::default();
        output = crate::xml_deser::deser_operation_list_topics(response.body().as_ref(), output)
            .map_err(crate::error::ListTopicsError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_publish_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PublishOutput, crate::error::PublishError> {
    let generic = aws_http::query_errors::parse_generic_error(response.body().as_ref())
        .map_err(crate::error::PublishError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::PublishError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidParameter" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::InvalidParameterError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "ParameterValueInvalid" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::InvalidParameterValueError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_value_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_value_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "InternalError" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::InternalErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_internal_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "NotFound" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::xml_deser::deser_structure_not_found_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "EndpointDisabled" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::EndpointDisabledError({
                #[allow(unused_mut)]
                let mut output = crate::error::endpoint_disabled_error::Builder::default();
                output = crate::xml_deser::deser_structure_endpoint_disabled_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "AuthorizationError" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::AuthorizationErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::authorization_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_authorization_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        "Throttled" => crate::error::PublishError {
            meta: generic,
            kind: crate::error::PublishErrorKind::ThrottledError({
                #[allow(unused_mut)]
                let mut output = crate::error::throttled_error::Builder::default();
                output = crate::xml_deser::deser_structure_throttled_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::PublishError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::PublishError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_publish_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PublishOutput, crate::error::PublishError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::publish_output::Builder::default();
        output = crate::xml_deser::deser_operation_publish(response.body().as_ref(), output)
            .map_err(crate::error::PublishError::unhandled)?;
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_subscribe_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SubscribeOutput, crate::error::SubscribeError> {
    let generic = aws_http::query_errors::parse_generic_error(response.body().as_ref())
        .map_err(crate::error::SubscribeError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::SubscribeError::unhandled(generic)),
    };
    Err(match error_code {
        "SubscriptionLimitExceeded" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::SubscriptionLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::subscription_limit_exceeded_error::Builder::default();
                output = crate::xml_deser::deser_structure_subscription_limit_exceeded_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        "FilterPolicyLimitExceeded" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::FilterPolicyLimitExceededError({
                #[allow(unused_mut)]
                let mut output = crate::error::filter_policy_limit_exceeded_error::Builder::default();
                output = crate::xml_deser::deser_structure_filter_policy_limit_exceeded_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        "InvalidParameter" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::InvalidParameterError({
                #[allow(unused_mut)]
                let mut output = crate::error::invalid_parameter_error::Builder::default();
                output = crate::xml_deser::deser_structure_invalid_parameter_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        "InternalError" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::InternalErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_internal_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        "NotFound" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::NotFoundError({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_error::Builder::default();
                output = crate::xml_deser::deser_structure_not_found_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        "AuthorizationError" => crate::error::SubscribeError {
            meta: generic,
            kind: crate::error::SubscribeErrorKind::AuthorizationErrorError({
                #[allow(unused_mut)]
                let mut output = crate::error::authorization_error_error::Builder::default();
                output = crate::xml_deser::deser_structure_authorization_error_error_xml_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SubscribeError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::SubscribeError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_subscribe_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SubscribeOutput, crate::error::SubscribeError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::subscribe_output::Builder::default();
        output = crate::xml_deser::deser_operation_subscribe(response.body().as_ref(), output)
            .map_err(crate::error::SubscribeError::unhandled)?;
        output.build()
    })
}
