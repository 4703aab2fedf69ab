/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_detect_dominant_language(
    input: &crate::input::DetectDominantLanguageInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_detect_dominant_language_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_detect_sentiment(
    input: &crate::input::DetectSentimentInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_detect_sentiment_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_detect_entities(
    input: &crate::input::DetectEntitiesInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_detect_entities_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_detect_key_phrases(
    input: &crate::input::DetectKeyPhrasesInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_detect_key_phrases_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_detect_dominant_language_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DetectDominantLanguageInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.text {
        object.key("Text").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_detect_sentiment_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DetectSentimentInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.text {
        object.key("Text").string(var_1);
    }
    if let Some(var_2) = &input.language_code {
        object.key("LanguageCode").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_detect_entities_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DetectEntitiesInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.text {
        object.key("Text").string(var_1);
    }
    if let Some(var_2) = &input.language_code {
        object.key("LanguageCode").string(var_2.as_str());
    }
    if let Some(var_3) = &input.endpoint_arn {
        object.key("EndpointArn").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_detect_key_phrases_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DetectKeyPhrasesInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.text {
        object.key("Text").string(var_1);
    }
    if let Some(var_2) = &input.language_code {
        object.key("LanguageCode").string(var_2.as_str());
    }
    Ok(())
}
