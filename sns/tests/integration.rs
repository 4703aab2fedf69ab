/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use sns::error::{CreateTopicErrorKind, PublishErrorKind};
use sns::input::{CreateTopicInput, PublishInput, SubscribeInput};
use sns::model::{MessageAttributeValue, Tag};
use sns::operation::{CreateTopic, DeleteTopic, ListTopics, Publish, Subscribe};
use sns::{Blob, Region};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:my-topic";

fn test_config() -> sns::Config {
    sns::Config::builder()
        .region(Region::new("us-east-1"))
        .build()
}

fn response(status: u16, body: &'static str) -> http::Response<bytes::Bytes> {
    http::Response::builder()
        .status(status)
        .body(bytes::Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn create_topic_request() {
    let op = CreateTopicInput::builder()
        .name("my-topic")
        .attributes("FifoTopic", "false")
        .attributes("DisplayName", "My Topic")
        .tags(Tag::builder().key("team").value("ops").build())
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    let request = op.request();
    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.uri(),
        &http::Uri::from_static("https://sns.us-east-1.amazonaws.com/")
    );
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/x-www-form-urlencoded")],
    ));
    assert!(!request.headers().contains_key("x-amz-target"));
    // map entries are written in key order
    assert_eq!(
        std::str::from_utf8(request.body().bytes().unwrap()).unwrap(),
        "Action=CreateTopic&Version=2010-03-31\
         &Name=my-topic\
         &Attributes.entry.1.key=DisplayName\
         &Attributes.entry.1.value=My%20Topic\
         &Attributes.entry.2.key=FifoTopic\
         &Attributes.entry.2.value=false\
         &Tags.member.1.Key=team\
         &Tags.member.1.Value=ops"
    );
}

#[test]
fn publish_request_with_message_attributes() {
    let input = PublishInput::builder()
        .topic_arn(TOPIC_ARN)
        .message("hello world")
        .message_attributes(
            "payload",
            MessageAttributeValue::builder()
                .data_type("Binary")
                .binary_value(Blob::new("hello"))
                .build(),
        )
        .message_attributes(
            "color",
            MessageAttributeValue::builder()
                .data_type("String")
                .string_value("blue")
                .build(),
        )
        .build()
        .unwrap();
    let op = input.make_operation(&test_config()).unwrap();
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        "Action=Publish&Version=2010-03-31\
         &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Amy-topic\
         &Message=hello%20world\
         &MessageAttributes.entry.1.Name=color\
         &MessageAttributes.entry.1.Value.DataType=String\
         &MessageAttributes.entry.1.Value.StringValue=blue\
         &MessageAttributes.entry.2.Name=payload\
         &MessageAttributes.entry.2.Value.DataType=Binary\
         &MessageAttributes.entry.2.Value.BinaryValue=aGVsbG8%3D",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
}

#[test]
fn phone_number_is_redacted() {
    let input = PublishInput::builder()
        .phone_number("+15555550100")
        .message("hi")
        .build()
        .unwrap();
    let debug = format!("{:?}", input);
    assert!(debug.contains("phone_number: \"*** Sensitive Data Redacted ***\""));
    assert!(!debug.contains("5555550100"));
}

#[test]
fn subscribe_request_writes_booleans() {
    let op = SubscribeInput::builder()
        .topic_arn(TOPIC_ARN)
        .protocol("email")
        .endpoint("ops@example.com")
        .return_subscription_arn(true)
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        "Action=Subscribe&Version=2010-03-31\
         &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Amy-topic\
         &Protocol=email\
         &Endpoint=ops%40example.com\
         &ReturnSubscriptionArn=true",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
}

#[test]
fn parse_list_topics_response() {
    let output = ListTopics::new()
        .parse(&response(
            200,
            r#"<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <ListTopicsResult>
    <Topics>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:first</TopicArn>
      </member>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:second</TopicArn>
        <Unexpected>ignored</Unexpected>
      </member>
    </Topics>
    <NextToken>next&amp;page</NextToken>
  </ListTopicsResult>
  <ResponseMetadata>
    <RequestId>3f1478c7-33a9-11df-9540-99d0768312d3</RequestId>
  </ResponseMetadata>
</ListTopicsResponse>"#,
        ))
        .unwrap();
    let arns: Vec<_> = output
        .topics()
        .unwrap()
        .iter()
        .map(|topic| topic.topic_arn().unwrap())
        .collect();
    assert_eq!(
        arns,
        vec![
            "arn:aws:sns:us-east-1:123456789012:first",
            "arn:aws:sns:us-east-1:123456789012:second"
        ]
    );
    assert_eq!(output.next_token(), Some("next&page"));
}

#[test]
fn parse_publish_and_subscribe_responses() {
    let output = Publish::new()
        .parse(&response(
            200,
            r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
    <PublishResult>
        <MessageId>567910cd-659e-55d4-8ccb-5aaf14679dc0</MessageId>
    </PublishResult>
</PublishResponse>"#,
        ))
        .unwrap();
    assert_eq!(output.message_id(), Some("567910cd-659e-55d4-8ccb-5aaf14679dc0"));
    assert_eq!(output.sequence_number(), None);

    let output = Subscribe::new()
        .parse(&response(
            200,
            r#"<SubscribeResponse><SubscribeResult><SubscriptionArn>pending confirmation</SubscriptionArn></SubscribeResult></SubscribeResponse>"#,
        ))
        .unwrap();
    assert_eq!(output.subscription_arn(), Some("pending confirmation"));
}

#[test]
fn wrong_root_element_is_unhandled() {
    let err = CreateTopic::new()
        .parse(&response(200, "<PublishResponse></PublishResponse>"))
        .unwrap_err();
    assert!(matches!(err.kind, CreateTopicErrorKind::Unhandled(_)));
}

#[test]
fn delete_topic_has_empty_output() {
    let output = DeleteTopic::new()
        .parse(&response(
            200,
            "<DeleteTopicResponse><ResponseMetadata><RequestId>f3aa9ac9</RequestId></ResponseMetadata></DeleteTopicResponse>",
        ))
        .unwrap();
    assert_eq!(format!("{:?}", output), "DeleteTopicOutput");
}

#[test]
fn parse_modeled_error() {
    let err = CreateTopic::new()
        .parse(&response(
            400,
            r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
    <Error>
        <Type>Sender</Type>
        <Code>InvalidParameter</Code>
        <Message>Invalid parameter: Topic Name</Message>
    </Error>
    <RequestId>e8ab0a18-0c55-5ad6-8f7c-42f4d9b2b8c1</RequestId>
</ErrorResponse>"#,
        ))
        .unwrap_err();
    assert!(err.is_invalid_parameter_error());
    assert_eq!(err.code(), Some("InvalidParameter"));
    assert_eq!(err.message(), Some("Invalid parameter: Topic Name"));
    assert_eq!(err.request_id(), Some("e8ab0a18-0c55-5ad6-8f7c-42f4d9b2b8c1"));
    assert_eq!(
        err.to_string(),
        "InvalidParameterError [InvalidParameterException]: Invalid parameter: Topic Name"
    );
}

#[test]
fn wire_code_differs_from_error_name() {
    let err = Publish::new()
        .parse(&response(
            400,
            "<ErrorResponse><Error><Code>ParameterValueInvalid</Code><Message>bad value</Message></Error></ErrorResponse>",
        ))
        .unwrap_err();
    match &err.kind {
        PublishErrorKind::InvalidParameterValueError(inner) => {
            assert_eq!(inner.message(), Some("bad value"));
            assert_eq!(inner.code(), Some("ParameterValueInvalid"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    let err = Publish::new()
        .parse(&response(
            400,
            "<ErrorResponse><Error><Code>Throttled</Code></Error></ErrorResponse>",
        ))
        .unwrap_err();
    assert!(err.is_throttled_error());
    assert_eq!(err.error_kind(), Some(ErrorKind::ThrottlingError));
}

#[test]
fn unknown_error_code_is_generic() {
    let err = DeleteTopic::new()
        .parse(&response(
            500,
            "<ErrorResponse><Error><Code>ServiceMeltdown</Code><Message>oh no</Message></Error></ErrorResponse>",
        ))
        .unwrap_err();
    assert_eq!(err.code(), Some("ServiceMeltdown"));
    assert_eq!(err.message(), Some("oh no"));
    assert_eq!(err.error_kind(), None);
}

#[test]
fn invalid_attribute_escape_is_unhandled() {
    let err = Publish::new()
        .parse(&response(
            200,
            r#"<PublishResponse xmlns="&bogus;"><PublishResult><MessageId>m</MessageId></PublishResult></PublishResponse>"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, PublishErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn load_publish_response() {
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::load_response;
    let response = http::Response::builder()
        .status(200)
        .body(SdkBody::from(
            "<PublishResponse><PublishResult><MessageId>m-1</MessageId><SequenceNumber>10000000000000000001</SequenceNumber></PublishResult></PublishResponse>",
        ))
        .unwrap();
    let success = load_response(response, &Publish::new())
        .await
        .expect("successful response");
    assert_eq!(success.parsed.message_id(), Some("m-1"));
    assert_eq!(
        success.parsed.sequence_number(),
        Some("10000000000000000001")
    );
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn changed(value: Option<&str>) -> Option<String> {
    Some(format!("{}-changed", value.unwrap_or_default()))
}

prop_compose! {
    fn tag()(
        key in proptest::option::of("[a-zA-Z0-9:/_.-]{1,16}"),
        value in proptest::option::of("\\PC{0,16}"),
    ) -> Tag {
        Tag::builder().set_key(key).set_value(value).build()
    }
}

prop_compose! {
    fn message_attribute_value()(
        data_type in proptest::option::of("String|Number|Binary|String\\.Array"),
        string_value in proptest::option::of("\\PC{0,16}"),
        binary_value in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..16)),
    ) -> MessageAttributeValue {
        MessageAttributeValue::builder()
            .set_data_type(data_type)
            .set_string_value(string_value)
            .set_binary_value(binary_value.map(Blob::new))
            .build()
    }
}

proptest! {
    #[test]
    fn tag_equality(tag in tag(), member in 0..2usize) {
        prop_assert_eq!(&tag.clone(), &tag);
        prop_assert_eq!(hash_of(&tag.clone()), hash_of(&tag));

        let mut other = tag.clone();
        match member {
            0 => other.key = changed(tag.key()),
            _ => other.value = changed(tag.value()),
        }
        prop_assert_ne!(&other, &tag);
    }

    #[test]
    fn message_attribute_value_equality(value in message_attribute_value(), member in 0..3usize) {
        prop_assert_eq!(&value.clone(), &value);
        prop_assert_eq!(hash_of(&value.clone()), hash_of(&value));

        let mut other = value.clone();
        match member {
            0 => other.data_type = changed(value.data_type()),
            1 => other.string_value = changed(value.string_value()),
            _ => {
                let mut bytes = value.binary_value().map(|b| b.as_ref().to_vec()).unwrap_or_default();
                bytes.push(0);
                other.binary_value = Some(Blob::new(bytes));
            }
        }
        prop_assert_ne!(&other, &value);
    }
}
