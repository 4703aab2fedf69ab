/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use kms::error::{DescribeKeyErrorKind, EncryptErrorKind, ListKeysError};
use kms::input::{CreateKeyInput, EncryptInput};
use kms::model::{EncryptionAlgorithmSpec, KeyState, KeyUsageType, Tag};
use kms::operation::{CreateKey, DescribeKey, Encrypt, GenerateDataKey, ListKeys, ListResourceTags};
use kms::{Blob, Instant, Region};
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;

fn test_config() -> kms::Config {
    kms::Config::builder()
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
fn create_key_request() {
    let op = CreateKeyInput::builder()
        .description("my key")
        .key_usage(KeyUsageType::EncryptDecrypt)
        .tags(Tag::builder().tag_key("team").tag_value("crypto").build())
        .tags(Tag::builder().tag_key("stage").build())
        .build()
        .unwrap()
        .make_operation(&test_config())
        .expect("operation is valid");
    let request = op.request();
    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.uri(),
        &http::Uri::from_static("https://kms.us-east-1.amazonaws.com/")
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "TrentService.CreateKey"),
        ],
    ));
    assert!(request.headers().contains_key("x-amz-user-agent"));
    let body = request.body().bytes().expect("body is in memory");
    assert_eq!(
        request.headers()["content-length"],
        body.len().to_string().as_str()
    );
    assert_ok(validate_body(
        body,
        r#"{"Description":"my key","KeyUsage":"ENCRYPT_DECRYPT","Tags":[{"TagKey":"team","TagValue":"crypto"},{"TagKey":"stage"}]}"#,
        MediaType::from("application/json"),
    ));
    let metadata = op.metadata().expect("metadata is set");
    assert_eq!(metadata.name(), "CreateKey");
    assert_eq!(metadata.service(), "kms");
}

#[test]
fn unset_members_are_omitted() {
    let op = CreateKeyInput::builder()
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    assert_eq!(op.request().body().bytes(), Some("{}".as_bytes()));
}

#[test]
fn encrypt_request_encodes_blob_and_context() {
    let op = EncryptInput::builder()
        .key_id("alias/my-key")
        .plaintext(Blob::new("hello"))
        .encryption_context("purpose", "test")
        .encryption_algorithm(EncryptionAlgorithmSpec::SymmetricDefault)
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    let request = op.request();
    assert_ok(validate_headers(
        request,
        &[("x-amz-target", "TrentService.Encrypt")],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"KeyId":"alias/my-key","Plaintext":"aGVsbG8=","EncryptionContext":{"purpose":"test"},"EncryptionAlgorithm":"SYMMETRIC_DEFAULT"}"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn endpoint_can_be_overridden() {
    let conf = kms::Config::builder()
        .region(Region::new("us-west-2"))
        .endpoint_resolver(kms::Endpoint::from_static("http://localhost:8000"))
        .build();
    let op = CreateKey::builder().build().unwrap().make_operation(&conf).unwrap();
    assert_eq!(op.request().uri(), &http::Uri::from_static("http://localhost:8000/"));
}

#[test]
fn parse_describe_key_response() {
    let response = response(
        200,
        r#"{
            "KeyMetadata": {
                "AWSAccountId": "111122223333",
                "KeyId": "1234abcd-12ab-34cd-56ef-1234567890ab",
                "CreationDate": 1.499288695918E9,
                "Enabled": true,
                "KeyUsage": "ENCRYPT_DECRYPT",
                "KeyState": "Enabled",
                "Description": null,
                "EncryptionAlgorithms": ["SYMMETRIC_DEFAULT", "SOMETHING_NEW"],
                "SomeFutureMember": {"nested": [1, 2, {"deep": null}]},
                "MultiRegion": false
            }
        }"#,
    );
    let output = DescribeKey::new().parse(&response).expect("valid response");
    let metadata = output.key_metadata().expect("metadata is present");
    assert_eq!(metadata.aws_account_id(), Some("111122223333"));
    assert_eq!(metadata.enabled(), Some(true));
    assert_eq!(metadata.description(), None);
    assert_eq!(metadata.key_state(), Some(&KeyState::Enabled));
    assert_eq!(metadata.key_usage(), Some(&KeyUsageType::EncryptDecrypt));
    assert_eq!(metadata.creation_date().map(Instant::epoch_seconds), Some(1499288695));
    assert_eq!(
        metadata.encryption_algorithms(),
        Some(
            &[
                EncryptionAlgorithmSpec::SymmetricDefault,
                EncryptionAlgorithmSpec::Unknown("SOMETHING_NEW".to_string())
            ][..]
        )
    );
    assert_eq!(metadata.multi_region(), Some(false));
}

#[test]
fn deeply_nested_unknown_member_is_skipped() {
    let depth = 100_000;
    let body = format!(
        r#"{{"Unknown":{}{},"KeyMetadata":{{"KeyId":"k"}}}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let response = http::Response::builder()
        .status(200)
        .body(bytes::Bytes::from(body))
        .unwrap();
    let output = DescribeKey::new().parse(&response).expect("valid response");
    assert_eq!(
        output.key_metadata().and_then(|metadata| metadata.key_id()),
        Some("k")
    );
}

#[test]
fn parse_generate_data_key_response() {
    let response = response(
        200,
        r#"{"CiphertextBlob":"AQEDAHg=","Plaintext":"c2VjcmV0","KeyId":"arn:aws:kms:us-east-1:111122223333:key/abc"}"#,
    );
    let output = GenerateDataKey::new().parse(&response).unwrap();
    assert_eq!(output.plaintext(), Some(&Blob::new("secret")));
    assert_eq!(
        output.key_id(),
        Some("arn:aws:kms:us-east-1:111122223333:key/abc")
    );
}

#[test]
fn empty_body_is_an_empty_output() {
    let output = ListKeys::new().parse(&response(200, "")).unwrap();
    assert_eq!(output, kms::output::ListKeysOutput::builder().build());
}

#[test]
fn parse_modeled_error() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-requestid", "req-123")
        .body(bytes::Bytes::from_static(
            br#"{"__type":"com.amazonaws.kms#NotFoundException","message":"Key 'alias/missing' does not exist"}"#,
        ))
        .unwrap();
    let err = DescribeKey::new().parse(&response).expect_err("status 400 is an error");
    assert!(err.is_not_found_error());
    assert_eq!(err.code(), Some("NotFoundException"));
    assert_eq!(err.message(), Some("Key 'alias/missing' does not exist"));
    assert_eq!(err.request_id(), Some("req-123"));
    match &err.kind {
        DescribeKeyErrorKind::NotFoundError(inner) => {
            assert_eq!(inner.message(), Some("Key 'alias/missing' does not exist"))
        }
        other => panic!("expected NotFoundError, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "NotFoundError [NotFoundException]: Key 'alias/missing' does not exist"
    );
}

#[test]
fn error_code_from_header() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-errortype", "DisabledException:http://internal.amazon.com/coral/")
        .body(bytes::Bytes::from_static(b"{}"))
        .unwrap();
    let err = Encrypt::new().parse(&response).unwrap_err();
    assert!(matches!(err.kind, EncryptErrorKind::DisabledError(_)));
    assert_eq!(err.code(), Some("DisabledException"));
}

#[test]
fn unknown_error_code_is_unhandled() {
    let err = ListKeys::new()
        .parse(&response(
            400,
            r#"{"__type":"SomethingUnexpectedException","message":"hmm"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, kms::error::ListKeysErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("SomethingUnexpectedException"));
    assert_eq!(err.message(), Some("hmm"));
}

#[test]
fn malformed_error_body_is_unhandled() {
    let err: ListKeysError = ListKeys::new()
        .parse(&response(500, r#"{"__type": "#))
        .unwrap_err();
    assert!(matches!(err.kind, kms::error::ListKeysErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn tags_survive_a_request_response_cycle() {
    // A CreateKey body holding only tags has the same shape as a ListResourceTags response.
    let tags = vec![
        Tag::builder().tag_key("a").tag_value("1").build(),
        Tag::builder().tag_key("b").tag_value("").build(),
    ];
    let op = CreateKey::builder()
        .set_tags(Some(tags.clone()))
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    let body = bytes::Bytes::copy_from_slice(op.request().body().bytes().unwrap());
    let response = http::Response::builder().status(200).body(body).unwrap();
    let output = ListResourceTags::new().parse(&response).unwrap();
    assert_eq!(output.tags(), Some(&tags[..]));
}

#[tokio::test]
async fn load_list_keys_response() {
    let response = http::Response::builder()
        .status(200)
        .body(SdkBody::from(
            r#"{"Keys":[{"KeyId":"k1","KeyArn":"arn:1"},{"KeyId":"k2"}],"NextMarker":"m","Truncated":true}"#,
        ))
        .unwrap();
    let success = load_response(response, &ListKeys::new())
        .await
        .expect("successful response");
    let keys = success.parsed.keys().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].key_arn(), Some("arn:1"));
    assert_eq!(keys[1].key_arn(), None);
    assert_eq!(success.parsed.next_marker(), Some("m"));
    assert_eq!(success.parsed.truncated(), Some(true));
}

#[tokio::test]
async fn load_throttled_response() {
    let response = http::Response::builder()
        .status(400)
        .body(SdkBody::from(
            r#"{"__type":"LimitExceededException","message":"slow down"}"#,
        ))
        .unwrap();
    match load_response(response, &CreateKey::new()).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert!(err.is_limit_exceeded_error());
            assert_eq!(raw.status(), 400);
        }
        other => panic!("expected service error, got {:?}", other),
    }
}
