/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_translate_text(
    input: &crate::input::TranslateTextInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_translate_text_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_list_terminologies(
    input: &crate::input::ListTerminologiesInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_terminologies_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_get_terminology(
    input: &crate::input::GetTerminologyInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_get_terminology_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_delete_terminology(
    input: &crate::input::DeleteTerminologyInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_terminology_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_translate_text_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::TranslateTextInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.text {
        object.key("Text").string(var_1);
    }
    if let Some(var_2) = &input.terminology_names {
        let mut array_3 = object.key("TerminologyNames").start_array();
        for item_4 in var_2 {
            array_3.value().string(item_4);
        }
        array_3.finish();
    }
    if let Some(var_5) = &input.source_language_code {
        object.key("SourceLanguageCode").string(var_5);
    }
    if let Some(var_6) = &input.target_language_code {
        object.key("TargetLanguageCode").string(var_6);
    }
    if let Some(var_7) = &input.settings {
        let mut object_8 = object.key("Settings").start_object();
        crate::json_ser::serialize_structure_translation_settings(&mut object_8, var_7)?;
        object_8.finish();
    }
    Ok(())
}

pub fn serialize_structure_list_terminologies_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListTerminologiesInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.next_token {
        object.key("NextToken").string(var_1);
    }
    if let Some(var_2) = &input.max_results {
        object.key("MaxResults").number(
            #[allow(clippy::useless_conversion)]
            smithy_types::Number::NegInt((*var_2).into()),
        );
    }
    Ok(())
}

pub fn serialize_structure_get_terminology_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::GetTerminologyInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.name {
        object.key("Name").string(var_1);
    }
    if let Some(var_2) = &input.terminology_data_format {
        object.key("TerminologyDataFormat").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_delete_terminology_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteTerminologyInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.name {
        object.key("Name").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_translation_settings(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::TranslationSettings,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.formality {
        object.key("Formality").string(var_1.as_str());
    }
    if let Some(var_2) = &input.profanity {
        object.key("Profanity").string(var_2.as_str());
    }
    Ok(())
}
