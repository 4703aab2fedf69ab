/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use translate::error::{TranslateTextErrorKind, UnsupportedLanguagePairError};
use translate::input::TranslateTextInput;
use translate::model::{
    Directionality, EncryptionKey, EncryptionKeyType, Formality, Profanity, TerminologyDataFormat,
    TerminologyProperties, TranslationSettings,
};
use translate::operation::{DeleteTerminology, GetTerminology, ListTerminologies, TranslateText};
use translate::{Instant, Region};

fn test_config() -> translate::Config {
    translate::Config::builder()
        .region(Region::new("eu-west-1"))
        .build()
}

fn response(status: u16, body: impl Into<bytes::Bytes>) -> http::Response<bytes::Bytes> {
    http::Response::builder()
        .status(status)
        .body(body.into())
        .unwrap()
}

#[test]
fn translate_text_request() {
    let op = TranslateTextInput::builder()
        .text("Hello, world")
        .source_language_code("en")
        .target_language_code("de")
        .terminology_names("brand-names")
        .terminology_names("product-names")
        .settings(
            TranslationSettings::builder()
                .formality(Formality::Informal)
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    let request = op.request();
    assert_eq!(
        request.uri(),
        &http::Uri::from_static("https://translate.eu-west-1.amazonaws.com/")
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "AWSShineFrontendService_20170701.TranslateText"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{
            "Text": "Hello, world",
            "TerminologyNames": ["brand-names", "product-names"],
            "SourceLanguageCode": "en",
            "TargetLanguageCode": "de",
            "Settings": {"Formality": "INFORMAL"}
        }"#,
        MediaType::from("application/x-amz-json-1.1"),
    ));
}

#[test]
fn parse_translate_text_response() {
    let output = TranslateText::new()
        .parse(&response(
            200,
            r#"{
                "TranslatedText": "Hallo Welt",
                "SourceLanguageCode": "en",
                "TargetLanguageCode": "de",
                "AppliedTerminologies": [
                    {"Name": "brand-names", "Terms": [{"SourceText": "world", "TargetText": "Welt"}]}
                ],
                "AppliedSettings": {"Profanity": "MASK"}
            }"#,
        ))
        .unwrap();
    assert_eq!(output.translated_text(), Some("Hallo Welt"));
    let applied = &output.applied_terminologies().unwrap()[0];
    assert_eq!(applied.name(), Some("brand-names"));
    assert_eq!(applied.terms().unwrap()[0].target_text(), Some("Welt"));
    assert_eq!(
        output.applied_settings().and_then(|s| s.profanity()),
        Some(&Profanity::Mask)
    );
}

#[test]
fn parse_list_terminologies_response() {
    let output = ListTerminologies::new()
        .parse(&response(
            200,
            r#"{
                "TerminologyPropertiesList": [{
                    "Name": "brand-names",
                    "TargetLanguageCodes": ["de", "fr"],
                    "EncryptionKey": {"Type": "KMS", "Id": "arn:aws:kms:key"},
                    "SizeBytes": 1024,
                    "TermCount": 12,
                    "CreatedAt": 1617712345,
                    "LastUpdatedAt": 1617712399.5,
                    "Directionality": "UNI",
                    "Format": "CSV"
                }],
                "NextToken": null
            }"#,
        ))
        .unwrap();
    let props = &output.terminology_properties_list().unwrap()[0];
    assert_eq!(props.target_language_codes(), Some(&["de".to_string(), "fr".to_string()][..]));
    assert_eq!(
        props.encryption_key().and_then(|key| key.r#type()),
        Some(&EncryptionKeyType::Kms)
    );
    assert_eq!(props.size_bytes(), Some(1024));
    assert_eq!(props.created_at().map(|t| t.epoch_seconds()), Some(1617712345));
    assert_eq!(props.last_updated_at().map(|t| t.epoch_seconds()), Some(1617712399));
    assert_eq!(props.directionality(), Some(&Directionality::Uni));
    assert_eq!(props.format(), Some(&TerminologyDataFormat::Csv));
    assert_eq!(output.next_token(), None);
}

#[test]
fn get_terminology_request_uses_enum_wire_value() {
    let op = GetTerminology::builder()
        .name("brand-names")
        .terminology_data_format(TerminologyDataFormat::Tmx)
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        r#"{"Name":"brand-names","TerminologyDataFormat":"TMX"}"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn delete_terminology_has_empty_output() {
    let output = DeleteTerminology::new().parse(&response(200, "")).unwrap();
    assert_eq!(format!("{:?}", output), "DeleteTerminologyOutput");
}

#[test]
fn unsupported_language_pair_error() {
    let err = TranslateText::new()
        .parse(&response(
            400,
            r#"{
                "__type": "UnsupportedLanguagePairException",
                "Message": "Unsupported language pair: en to xx",
                "SourceLanguageCode": "en",
                "TargetLanguageCode": "xx"
            }"#,
        ))
        .unwrap_err();
    assert!(err.is_unsupported_language_pair_error());
    assert_eq!(err.message(), Some("Unsupported language pair: en to xx"));
    match err.kind {
        TranslateTextErrorKind::UnsupportedLanguagePairError(UnsupportedLanguagePairError {
            source_language_code,
            target_language_code,
            ..
        }) => {
            assert_eq!(source_language_code.as_deref(), Some("en"));
            assert_eq!(target_language_code.as_deref(), Some("xx"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn throttling_error_kind() {
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    let err = ListTerminologies::new()
        .parse(&response(
            400,
            r#"{"__type":"com.amazonaws.translate#TooManyRequestsException","Message":"Rate exceeded"}"#,
        ))
        .unwrap_err();
    assert!(err.is_too_many_requests_error());
    assert_eq!(err.error_kind(), Some(ErrorKind::ThrottlingError));
}

fn formality() -> impl Strategy<Value = Option<Formality>> {
    proptest::option::of(prop_oneof![
        Just(Formality::Formal),
        Just(Formality::Informal),
        "[A-Z_]{1,10}".prop_map(|s| Formality::from(s.as_str())),
    ])
}

fn profanity() -> impl Strategy<Value = Option<Profanity>> {
    proptest::option::of(prop_oneof![
        Just(Profanity::Mask),
        "[A-Z_]{1,10}".prop_map(|s| Profanity::from(s.as_str())),
    ])
}

proptest! {
    #[test]
    fn settings_round_trip(formality in formality(), profanity in profanity()) {
        let settings = TranslationSettings::builder()
            .set_formality(formality)
            .set_profanity(profanity)
            .build();
        let op = TranslateText::builder()
            .settings(settings.clone())
            .build()
            .unwrap()
            .make_operation(&test_config())
            .unwrap();
        let request: serde_json::Value =
            serde_json::from_slice(op.request().body().bytes().unwrap()).unwrap();
        let response_body = serde_json::json!({ "AppliedSettings": request["Settings"] });
        let output = TranslateText::new()
            .parse(&response(200, serde_json::to_vec(&response_body).unwrap()))
            .unwrap();
        prop_assert_eq!(output.applied_settings(), Some(&settings));
    }
}

#[tokio::test]
async fn load_get_terminology_response() {
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::load_response;
    let response = http::Response::builder()
        .status(200)
        .body(SdkBody::from(
            r#"{
                "TerminologyProperties": {"Name": "brand-names", "TermCount": 3, "Format": "TSV"},
                "TerminologyDataLocation": {"RepositoryType": "S3", "Location": "https://example.com/terms"}
            }"#,
        ))
        .unwrap();
    let success = load_response(response, &GetTerminology::new())
        .await
        .expect("successful response");
    let props = success.parsed.terminology_properties().unwrap();
    assert_eq!(props.name(), Some("brand-names"));
    assert_eq!(props.term_count(), Some(3));
    assert_eq!(props.format(), Some(&TerminologyDataFormat::Tsv));
    assert_eq!(
        success
            .parsed
            .terminology_data_location()
            .and_then(|location| location.location()),
        Some("https://example.com/terms")
    );
}

const TERMINOLOGY_MEMBERS: usize = 14;

prop_compose! {
    fn terminology_properties()(
        names in (
            proptest::option::of("[a-z-]{1,16}"),
            proptest::option::of("\\PC{0,16}"),
            proptest::option::of("arn:aws:translate:[a-z0-9-]{1,8}"),
        ),
        languages in (
            proptest::option::of("[a-z]{2}"),
            proptest::option::of(proptest::collection::vec("[a-z]{2}", 0..3)),
        ),
        key in proptest::option::of((proptest::option::of("KMS|[A-Z]{1,6}"), proptest::option::of("[a-z0-9:]{1,16}"))),
        counts in (
            proptest::option::of(any::<i32>()),
            proptest::option::of(any::<i32>()),
            proptest::option::of(any::<i32>()),
        ),
        dates in (
            proptest::option::of(0i64..2_000_000_000),
            proptest::option::of(0i64..2_000_000_000),
        ),
        message in proptest::option::of("\\PC{0,16}"),
        directionality in proptest::option::of("UNI|MULTI|[A-Z]{1,6}"),
        format in proptest::option::of("CSV|TMX|TSV|[A-Z]{1,6}"),
    ) -> TerminologyProperties {
        TerminologyProperties::builder()
            .set_name(names.0)
            .set_description(names.1)
            .set_arn(names.2)
            .set_source_language_code(languages.0)
            .set_target_language_codes(languages.1)
            .set_encryption_key(key.map(|(key_type, id)| {
                EncryptionKey::builder()
                    .set_type(key_type.as_deref().map(EncryptionKeyType::from))
                    .set_id(id)
                    .build()
            }))
            .set_size_bytes(counts.0)
            .set_term_count(counts.1)
            .set_skipped_term_count(counts.2)
            .set_created_at(dates.0.map(Instant::from_epoch_seconds))
            .set_last_updated_at(dates.1.map(Instant::from_epoch_seconds))
            .set_message(message)
            .set_directionality(directionality.as_deref().map(Directionality::from))
            .set_format(format.as_deref().map(TerminologyDataFormat::from))
            .build()
    }
}

fn changed(value: Option<&str>) -> Option<String> {
    Some(format!("{}-changed", value.unwrap_or_default()))
}

fn bumped(value: Option<i32>) -> Option<i32> {
    Some(value.unwrap_or(0).wrapping_add(1))
}

fn later(value: Option<&Instant>) -> Option<Instant> {
    Some(Instant::from_epoch_seconds(
        value.map(|instant| instant.epoch_seconds()).unwrap_or(0) + 1,
    ))
}

fn with_member_changed(props: &TerminologyProperties, member: usize) -> TerminologyProperties {
    let mut out = props.clone();
    match member {
        0 => out.name = changed(props.name()),
        1 => out.description = changed(props.description()),
        2 => out.arn = changed(props.arn()),
        3 => out.source_language_code = changed(props.source_language_code()),
        4 => {
            let mut codes = props.target_language_codes().unwrap_or_default().to_vec();
            codes.push("xx".to_string());
            out.target_language_codes = Some(codes);
        }
        5 => {
            out.encryption_key = Some(
                EncryptionKey::builder()
                    .set_id(changed(props.encryption_key().and_then(|key| key.id())))
                    .build(),
            )
        }
        6 => out.size_bytes = bumped(props.size_bytes()),
        7 => out.term_count = bumped(props.term_count()),
        8 => out.created_at = later(props.created_at()),
        9 => out.last_updated_at = later(props.last_updated_at()),
        10 => {
            out.directionality = changed(props.directionality().map(|d| d.as_str()))
                .map(Directionality::Unknown)
        }
        11 => out.message = changed(props.message()),
        12 => out.skipped_term_count = bumped(props.skipped_term_count()),
        13 => {
            out.format = changed(props.format().map(|f| f.as_str()))
                .map(TerminologyDataFormat::Unknown)
        }
        _ => unreachable!("TerminologyProperties has {} members", TERMINOLOGY_MEMBERS),
    }
    out
}

fn hash_of(value: &impl std::hash::Hash) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn terminology_properties_equality(
        props in terminology_properties(),
        member in 0..TERMINOLOGY_MEMBERS,
    ) {
        let copy = props.clone();
        prop_assert_eq!(&copy, &props);
        prop_assert_eq!(hash_of(&copy), hash_of(&props));
        prop_assert_ne!(&with_member_changed(&props, member), &props);
    }
}
