/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_create_topic(
    input: &crate::input::CreateTopicInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = smithy_query::QueryWriter::new(&mut out, "CreateTopic", "2010-03-31");
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    if let Some(var_2) = &input.attributes {
        let mut map_3 = writer.prefix("Attributes").start_map(false, "key", "value");
        let mut entries_4: Vec<_> = var_2.iter().collect();
        entries_4.sort_by_key(|(key, _)| *key);
        for (key_5, value_6) in entries_4 {
            map_3.entry(key_5).string(value_6);
        }
        map_3.finish();
    }
    if let Some(var_7) = &input.tags {
        let mut list_8 = writer.prefix("Tags").start_list(false, None);
        for item_9 in var_7 {
            crate::query_ser::serialize_structure_tag(list_8.entry(), item_9)?;
        }
        list_8.finish();
    }
    writer.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_delete_topic(
    input: &crate::input::DeleteTopicInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = smithy_query::QueryWriter::new(&mut out, "DeleteTopic", "2010-03-31");
    if let Some(var_1) = &input.topic_arn {
        writer.prefix("TopicArn").string(var_1);
    }
    writer.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_list_topics(
    input: &crate::input::ListTopicsInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = smithy_query::QueryWriter::new(&mut out, "ListTopics", "2010-03-31");
    if let Some(var_1) = &input.next_token {
        writer.prefix("NextToken").string(var_1);
    }
    writer.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_publish(
    input: &crate::input::PublishInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = smithy_query::QueryWriter::new(&mut out, "Publish", "2010-03-31");
    if let Some(var_1) = &input.topic_arn {
        writer.prefix("TopicArn").string(var_1);
    }
    if let Some(var_2) = &input.target_arn {
        writer.prefix("TargetArn").string(var_2);
    }
    if let Some(var_3) = &input.phone_number {
        writer.prefix("PhoneNumber").string(var_3);
    }
    if let Some(var_4) = &input.message {
        writer.prefix("Message").string(var_4);
    }
    if let Some(var_5) = &input.subject {
        writer.prefix("Subject").string(var_5);
    }
    if let Some(var_6) = &input.message_structure {
        writer.prefix("MessageStructure").string(var_6);
    }
    if let Some(var_7) = &input.message_attributes {
        let mut map_8 = writer.prefix("MessageAttributes").start_map(false, "Name", "Value");
        let mut entries_9: Vec<_> = var_7.iter().collect();
        entries_9.sort_by_key(|(key, _)| *key);
        for (key_10, value_11) in entries_9 {
            crate::query_ser::serialize_structure_message_attribute_value(map_8.entry(key_10), value_11)?;
        }
        map_8.finish();
    }
    if let Some(var_12) = &input.message_deduplication_id {
        writer.prefix("MessageDeduplicationId").string(var_12);
    }
    if let Some(var_13) = &input.message_group_id {
        writer.prefix("MessageGroupId").string(var_13);
    }
    writer.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_subscribe(
    input: &crate::input::SubscribeInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = smithy_query::QueryWriter::new(&mut out, "Subscribe", "2010-03-31");
    if let Some(var_1) = &input.topic_arn {
        writer.prefix("TopicArn").string(var_1);
    }
    if let Some(var_2) = &input.protocol {
        writer.prefix("Protocol").string(var_2);
    }
    if let Some(var_3) = &input.endpoint {
        writer.prefix("Endpoint").string(var_3);
    }
    if let Some(var_4) = &input.attributes {
        let mut map_5 = writer.prefix("Attributes").start_map(false, "key", "value");
        let mut entries_6: Vec<_> = var_4.iter().collect();
        entries_6.sort_by_key(|(key, _)| *key);
        for (key_7, value_8) in entries_6 {
            map_5.entry(key_7).string(value_8);
        }
        map_5.finish();
    }
    if let Some(var_9) = &input.return_subscription_arn {
        writer.prefix("ReturnSubscriptionArn").boolean(*var_9);
    }
    writer.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

#[allow(unused_mut)]
pub fn serialize_structure_tag(
    mut writer: smithy_query::QueryValueWriter,
    input: &crate::model::Tag,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key {
        writer.prefix("Key").string(var_1);
    }
    if let Some(var_2) = &input.value {
        writer.prefix("Value").string(var_2);
    }
    Ok(())
}

#[allow(unused_mut)]
pub fn serialize_structure_message_attribute_value(
    mut writer: smithy_query::QueryValueWriter,
    input: &crate::model::MessageAttributeValue,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.data_type {
        writer.prefix("DataType").string(var_1);
    }
    if let Some(var_2) = &input.string_value {
        writer.prefix("StringValue").string(var_2);
    }
    if let Some(var_3) = &input.binary_value {
        writer.prefix("BinaryValue").string(&smithy_types::base64::encode(var_3));
    }
    Ok(())
}
