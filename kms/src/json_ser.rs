/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_create_key(
    input: &crate::input::CreateKeyInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_key_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_describe_key(
    input: &crate::input::DescribeKeyInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_key_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_encrypt(
    input: &crate::input::EncryptInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_encrypt_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_decrypt(
    input: &crate::input::DecryptInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_decrypt_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_generate_data_key(
    input: &crate::input::GenerateDataKeyInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_generate_data_key_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_list_keys(
    input: &crate::input::ListKeysInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_keys_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_list_resource_tags(
    input: &crate::input::ListResourceTagsInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_resource_tags_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_structure_create_key_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateKeyInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.policy {
        object.key("Policy").string(var_1);
    }
    if let Some(var_2) = &input.description {
        object.key("Description").string(var_2);
    }
    if let Some(var_3) = &input.key_usage {
        object.key("KeyUsage").string(var_3.as_str());
    }
    if let Some(var_4) = &input.customer_master_key_spec {
        object.key("CustomerMasterKeySpec").string(var_4.as_str());
    }
    if let Some(var_5) = &input.origin {
        object.key("Origin").string(var_5.as_str());
    }
    if let Some(var_6) = &input.bypass_policy_lockout_safety_check {
        object.key("BypassPolicyLockoutSafetyCheck").boolean(*var_6);
    }
    if let Some(var_7) = &input.tags {
        let mut array_8 = object.key("Tags").start_array();
        for item_9 in var_7 {
            let mut object_10 = array_8.value().start_object();
            crate::json_ser::serialize_structure_tag(&mut object_10, item_9)?;
            object_10.finish();
        }
        array_8.finish();
    }
    if let Some(var_11) = &input.multi_region {
        object.key("MultiRegion").boolean(*var_11);
    }
    Ok(())
}

pub fn serialize_structure_describe_key_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeKeyInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key_id {
        object.key("KeyId").string(var_1);
    }
    if let Some(var_2) = &input.grant_tokens {
        let mut array_3 = object.key("GrantTokens").start_array();
        for item_4 in var_2 {
            array_3.value().string(item_4);
        }
        array_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_encrypt_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::EncryptInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key_id {
        object.key("KeyId").string(var_1);
    }
    if let Some(var_2) = &input.plaintext {
        object.key("Plaintext").blob(var_2);
    }
    if let Some(var_3) = &input.encryption_context {
        let mut object_4 = object.key("EncryptionContext").start_object();
        for (key_5, value_6) in var_3 {
            object_4.key(key_5).string(value_6);
        }
        object_4.finish();
    }
    if let Some(var_7) = &input.grant_tokens {
        let mut array_8 = object.key("GrantTokens").start_array();
        for item_9 in var_7 {
            array_8.value().string(item_9);
        }
        array_8.finish();
    }
    if let Some(var_10) = &input.encryption_algorithm {
        object.key("EncryptionAlgorithm").string(var_10.as_str());
    }
    Ok(())
}

pub fn serialize_structure_decrypt_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DecryptInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.ciphertext_blob {
        object.key("CiphertextBlob").blob(var_1);
    }
    if let Some(var_2) = &input.encryption_context {
        let mut object_3 = object.key("EncryptionContext").start_object();
        for (key_4, value_5) in var_2 {
            object_3.key(key_4).string(value_5);
        }
        object_3.finish();
    }
    if let Some(var_6) = &input.grant_tokens {
        let mut array_7 = object.key("GrantTokens").start_array();
        for item_8 in var_6 {
            array_7.value().string(item_8);
        }
        array_7.finish();
    }
    if let Some(var_9) = &input.key_id {
        object.key("KeyId").string(var_9);
    }
    if let Some(var_10) = &input.encryption_algorithm {
        object.key("EncryptionAlgorithm").string(var_10.as_str());
    }
    Ok(())
}

pub fn serialize_structure_generate_data_key_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::GenerateDataKeyInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key_id {
        object.key("KeyId").string(var_1);
    }
    if let Some(var_2) = &input.encryption_context {
        let mut object_3 = object.key("EncryptionContext").start_object();
        for (key_4, value_5) in var_2 {
            object_3.key(key_4).string(value_5);
        }
        object_3.finish();
    }
    if let Some(var_6) = &input.number_of_bytes {
        object.key("NumberOfBytes").number(
            #[allow(clippy::useless_conversion)]
            smithy_types::Number::NegInt((*var_6).into()),
        );
    }
    if let Some(var_7) = &input.key_spec {
        object.key("KeySpec").string(var_7.as_str());
    }
    if let Some(var_8) = &input.grant_tokens {
        let mut array_9 = object.key("GrantTokens").start_array();
        for item_10 in var_8 {
            array_9.value().string(item_10);
        }
        array_9.finish();
    }
    Ok(())
}

pub fn serialize_structure_list_keys_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListKeysInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.limit {
        object.key("Limit").number(
            #[allow(clippy::useless_conversion)]
            smithy_types::Number::NegInt((*var_1).into()),
        );
    }
    if let Some(var_2) = &input.marker {
        object.key("Marker").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_list_resource_tags_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListResourceTagsInput,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key_id {
        object.key("KeyId").string(var_1);
    }
    if let Some(var_2) = &input.limit {
        object.key("Limit").number(
            #[allow(clippy::useless_conversion)]
            smithy_types::Number::NegInt((*var_2).into()),
        );
    }
    if let Some(var_3) = &input.marker {
        object.key("Marker").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_tag(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Tag,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.tag_key {
        object.key("TagKey").string(var_1);
    }
    if let Some(var_2) = &input.tag_value {
        object.key("TagValue").string(var_2);
    }
    Ok(())
}
