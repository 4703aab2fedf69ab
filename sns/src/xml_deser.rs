/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::convert::TryFrom;

pub fn deser_structure_invalid_parameter_error_xml_err(
    input: &[u8],
    mut builder: crate::error::invalid_parameter_error::Builder,
) -> Result<crate::error::invalid_parameter_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_topic_limit_exceeded_error_xml_err(
    input: &[u8],
    mut builder: crate::error::topic_limit_exceeded_error::Builder,
) -> Result<crate::error::topic_limit_exceeded_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_internal_error_error_xml_err(
    input: &[u8],
    mut builder: crate::error::internal_error_error::Builder,
) -> Result<crate::error::internal_error_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_authorization_error_error_xml_err(
    input: &[u8],
    mut builder: crate::error::authorization_error_error::Builder,
) -> Result<crate::error::authorization_error_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_tag_policy_error_xml_err(
    input: &[u8],
    mut builder: crate::error::tag_policy_error::Builder,
) -> Result<crate::error::tag_policy_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_concurrent_access_error_xml_err(
    input: &[u8],
    mut builder: crate::error::concurrent_access_error::Builder,
) -> Result<crate::error::concurrent_access_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_not_found_error_xml_err(
    input: &[u8],
    mut builder: crate::error::not_found_error::Builder,
) -> Result<crate::error::not_found_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_invalid_parameter_value_error_xml_err(
    input: &[u8],
    mut builder: crate::error::invalid_parameter_value_error::Builder,
) -> Result<crate::error::invalid_parameter_value_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_endpoint_disabled_error_xml_err(
    input: &[u8],
    mut builder: crate::error::endpoint_disabled_error::Builder,
) -> Result<crate::error::endpoint_disabled_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_throttled_error_xml_err(
    input: &[u8],
    mut builder: crate::error::throttled_error::Builder,
) -> Result<crate::error::throttled_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_subscription_limit_exceeded_error_xml_err(
    input: &[u8],
    mut builder: crate::error::subscription_limit_exceeded_error::Builder,
) -> Result<crate::error::subscription_limit_exceeded_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_structure_filter_policy_limit_exceeded_error_xml_err(
    input: &[u8],
    mut builder: crate::error::filter_policy_limit_exceeded_error::Builder,
) -> Result<crate::error::filter_policy_limit_exceeded_error::Builder, smithy_xml::decode::XmlError> {
    if input.is_empty() {
        return Ok(builder);
    }
    let mut document = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut error_decoder = aws_http::query_errors::error_scope(&mut document)?;
    while let Some(mut tag) = error_decoder.next_tag()? {
        match tag.start_el().local() {
            "Message" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var);
            }
            _ => {}
        }
    }
    Ok(builder)
}

pub fn deser_operation_create_topic(
    input: &[u8],
    mut builder: crate::output::create_topic_output::Builder,
) -> Result<crate::output::create_topic_output::Builder, smithy_xml::decode::XmlError> {
    let mut doc = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    if !decoder.start_el().matches("CreateTopicResponse") {
        return Err(smithy_xml::decode::XmlError::custom("invalid root, expected CreateTopicResponse"));
    }
    while let Some(mut result_tag) = decoder.next_tag()? {
        if !result_tag.start_el().matches("CreateTopicResult") {
            continue;
        }
        while let Some(mut tag) = result_tag.next_tag()? {
            match tag.start_el().local() {
                "TopicArn" => {
                    let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                    builder = builder.set_topic_arn(var);
                }
                _ => {}
            }
        }
    }
    Ok(builder)
}

pub fn deser_operation_list_topics(
    input: &[u8],
    mut builder: crate::output::list_topics_output::Builder,
) -> Result<crate::output::list_topics_output::Builder, smithy_xml::decode::XmlError> {
    let mut doc = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    if !decoder.start_el().matches("ListTopicsResponse") {
        return Err(smithy_xml::decode::XmlError::custom("invalid root, expected ListTopicsResponse"));
    }
    while let Some(mut result_tag) = decoder.next_tag()? {
        if !result_tag.start_el().matches("ListTopicsResult") {
            continue;
        }
        while let Some(mut tag) = result_tag.next_tag()? {
            match tag.start_el().local() {
                "Topics" => {
                    let var = Some(crate::xml_deser::deser_list_topic_list(&mut tag)?);
                    builder = builder.set_topics(var);
                }
                "NextToken" => {
                    let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                    builder = builder.set_next_token(var);
                }
                _ => {}
            }
        }
    }
    Ok(builder)
}

pub fn deser_operation_publish(
    input: &[u8],
    mut builder: crate::output::publish_output::Builder,
) -> Result<crate::output::publish_output::Builder, smithy_xml::decode::XmlError> {
    let mut doc = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    if !decoder.start_el().matches("PublishResponse") {
        return Err(smithy_xml::decode::XmlError::custom("invalid root, expected PublishResponse"));
    }
    while let Some(mut result_tag) = decoder.next_tag()? {
        if !result_tag.start_el().matches("PublishResult") {
            continue;
        }
        while let Some(mut tag) = result_tag.next_tag()? {
            match tag.start_el().local() {
                "MessageId" => {
                    let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                    builder = builder.set_message_id(var);
                }
                "SequenceNumber" => {
                    let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                    builder = builder.set_sequence_number(var);
                }
                _ => {}
            }
        }
    }
    Ok(builder)
}

pub fn deser_operation_subscribe(
    input: &[u8],
    mut builder: crate::output::subscribe_output::Builder,
) -> Result<crate::output::subscribe_output::Builder, smithy_xml::decode::XmlError> {
    let mut doc = smithy_xml::decode::Document::try_from(input)?;
    #[allow(unused_mut)]
    let mut decoder = doc.root_element()?;
    if !decoder.start_el().matches("SubscribeResponse") {
        return Err(smithy_xml::decode::XmlError::custom("invalid root, expected SubscribeResponse"));
    }
    while let Some(mut result_tag) = decoder.next_tag()? {
        if !result_tag.start_el().matches("SubscribeResult") {
            continue;
        }
        while let Some(mut tag) = result_tag.next_tag()? {
            match tag.start_el().local() {
                "SubscriptionArn" => {
                    let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                    builder = builder.set_subscription_arn(var);
                }
                _ => {}
            }
        }
    }
    Ok(builder)
}

pub fn deser_structure_topic(
    decoder: &mut smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> Result<crate::model::Topic, smithy_xml::decode::XmlError> {
    #[allow(unused_mut)]
    let mut builder = crate::model::Topic::builder();
    while let Some(mut tag) = decoder.next_tag()? {
        match tag.start_el().local() {
            "TopicArn" => {
                let var = Some(smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_topic_arn(var);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}

pub fn deser_list_topic_list(
    decoder: &mut smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> Result<std::vec::Vec<crate::model::Topic>, smithy_xml::decode::XmlError> {
    let mut out = std::vec::Vec::new();
    while let Some(mut tag) = decoder.next_tag()? {
        match tag.start_el().local() {
            "member" => {
                out.push(crate::xml_deser::deser_structure_topic(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(out)
}
