/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use comprehend::error::DetectSentimentErrorKind;
use comprehend::input::{DetectEntitiesInput, DetectSentimentInput};
use comprehend::model::{Entity, EntityType, LanguageCode, SentimentType};
use comprehend::operation::{DetectDominantLanguage, DetectEntities, DetectKeyPhrases, DetectSentiment};
use comprehend::Region;
use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn test_config() -> comprehend::Config {
    comprehend::Config::builder()
        .region(Region::new("us-east-2"))
        .build()
}

fn response(status: u16, body: &'static str) -> http::Response<bytes::Bytes> {
    http::Response::builder()
        .status(status)
        .body(bytes::Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn detect_sentiment_request() {
    let input = DetectSentimentInput::builder()
        .text("I love this product")
        .language_code(LanguageCode::En)
        .build()
        .unwrap();
    assert_eq!(
        format!("{:?}", input),
        "DetectSentimentInput { text: \"*** Sensitive Data Redacted ***\", language_code: En }"
    );
    let op = input.make_operation(&test_config()).unwrap();
    let request = op.request();
    assert_eq!(
        request.uri(),
        &http::Uri::from_static("https://comprehend.us-east-2.amazonaws.com/")
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "Comprehend_20171127.DetectSentiment"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"Text":"I love this product","LanguageCode":"en"}"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn hyphenated_language_code() {
    assert_eq!(LanguageCode::from("zh-TW"), LanguageCode::ZhTw);
    assert_eq!(LanguageCode::ZhTw.as_str(), "zh-TW");
    let op = DetectEntitiesInput::builder()
        .text("台北")
        .language_code(LanguageCode::ZhTw)
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        r#"{"Text":"台北","LanguageCode":"zh-TW"}"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn parse_sentiment_scores() {
    let output = DetectSentiment::new()
        .parse(&response(
            200,
            r#"{
                "Sentiment": "POSITIVE",
                "SentimentScore": {
                    "Positive": 0.8125,
                    "Negative": 1.25E-1,
                    "Neutral": 0,
                    "Mixed": 6.25e-2
                }
            }"#,
        ))
        .unwrap();
    assert_eq!(output.sentiment(), Some(&SentimentType::Positive));
    let score = output.sentiment_score().unwrap();
    assert_eq!(score.positive(), Some(0.8125));
    assert_eq!(score.negative(), Some(0.125));
    assert_eq!(score.neutral(), Some(0.0));
    assert_eq!(score.mixed(), Some(0.0625));
}

#[test]
fn parse_entities() {
    let output = DetectEntities::new()
        .parse(&response(
            200,
            r#"{"Entities":[
                {"Score":0.99,"Type":"PERSON","Text":"Jane","BeginOffset":0,"EndOffset":4},
                {"Score":0.5,"Type":"SPACESHIP","Text":"Rocinante","BeginOffset":10,"EndOffset":19}
            ]}"#,
        ))
        .unwrap();
    let entities = output.entities().unwrap();
    assert_eq!(entities[0].r#type(), Some(&EntityType::Person));
    assert_eq!(entities[0].end_offset(), Some(4));
    assert_eq!(
        entities[1].r#type(),
        Some(&EntityType::Unknown("SPACESHIP".to_string()))
    );
    assert_eq!(entities[1].r#type().map(|t| t.as_str()), Some("SPACESHIP"));
}

#[test]
fn parse_dominant_language_and_key_phrases() {
    let output = DetectDominantLanguage::new()
        .parse(&response(200, r#"{"Languages":[{"LanguageCode":"fr","Score":0.75}]}"#))
        .unwrap();
    let language = &output.languages().unwrap()[0];
    assert_eq!(language.language_code(), Some("fr"));
    assert_eq!(language.score(), Some(0.75));

    let output = DetectKeyPhrases::new()
        .parse(&response(200, r#"{"KeyPhrases":[]}"#))
        .unwrap();
    assert_eq!(output.key_phrases(), Some(&[][..]));
}

#[test]
fn unsupported_language_error() {
    let err = DetectSentiment::new()
        .parse(&response(
            400,
            r#"{"__type":"UnsupportedLanguageException","Message":"Language not supported"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, DetectSentimentErrorKind::UnsupportedLanguageError(_)));
    assert_eq!(err.message(), Some("Language not supported"));
    assert_eq!(err.error_kind(), None);
}

#[test]
fn internal_server_error_is_retryable() {
    let err = DetectKeyPhrases::new()
        .parse(&response(500, r#"{"__type":"InternalServerException"}"#))
        .unwrap_err();
    assert!(err.is_internal_server_error());
    assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.to_string(), "InternalServerError [InternalServerException]");
}

#[tokio::test]
async fn load_dominant_language_response() {
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::load_response;
    let response = http::Response::builder()
        .status(200)
        .body(SdkBody::from(
            r#"{"Languages":[{"LanguageCode":"de","Score":0.5},{"LanguageCode":"en","Score":0.25}]}"#,
        ))
        .unwrap();
    let success = load_response(response, &DetectDominantLanguage::new())
        .await
        .expect("successful response");
    let codes: Vec<_> = success
        .parsed
        .languages()
        .unwrap()
        .iter()
        .map(|language| (language.language_code().unwrap(), language.score().unwrap()))
        .collect();
    assert_eq!(codes, vec![("de", 0.5), ("en", 0.25)]);
}

const ENTITY_MEMBERS: usize = 5;

prop_compose! {
    fn entity()(
        score in proptest::option::of(0.0f32..1.0),
        entity_type in proptest::option::of("PERSON|DATE|LOCATION|TITLE|[A-Z_]{1,10}"),
        text in proptest::option::of("\\PC{0,20}"),
        begin_offset in proptest::option::of(0i32..10_000),
        end_offset in proptest::option::of(0i32..10_000),
    ) -> Entity {
        Entity::builder()
            .set_score(score)
            .set_type(entity_type.as_deref().map(EntityType::from))
            .set_text(text)
            .set_begin_offset(begin_offset)
            .set_end_offset(end_offset)
            .build()
    }
}

fn with_member_changed(entity: &Entity, member: usize) -> Entity {
    let mut out = entity.clone();
    match member {
        0 => out.score = Some(entity.score().unwrap_or(0.0) + 1.0),
        1 => {
            out.r#type = Some(EntityType::Unknown(format!(
                "{}-changed",
                entity.r#type().map(|t| t.as_str()).unwrap_or_default()
            )))
        }
        2 => out.text = Some(format!("{}-changed", entity.text().unwrap_or_default())),
        3 => out.begin_offset = Some(entity.begin_offset().unwrap_or(0) + 1),
        4 => out.end_offset = Some(entity.end_offset().unwrap_or(0) + 1),
        _ => unreachable!("Entity has {} members", ENTITY_MEMBERS),
    }
    out
}

fn detect_entities_body(entities: &[Entity]) -> Vec<u8> {
    use serde_json::{json, Map, Value};
    let entities: Vec<Value> = entities
        .iter()
        .map(|entity| {
            let mut members = Map::new();
            if let Some(score) = entity.score() {
                members.insert("Score".into(), json!(score));
            }
            if let Some(entity_type) = entity.r#type() {
                members.insert("Type".into(), json!(entity_type.as_str()));
            }
            if let Some(text) = entity.text() {
                members.insert("Text".into(), json!(text));
            }
            if let Some(offset) = entity.begin_offset() {
                members.insert("BeginOffset".into(), json!(offset));
            }
            if let Some(offset) = entity.end_offset() {
                members.insert("EndOffset".into(), json!(offset));
            }
            Value::Object(members)
        })
        .collect();
    serde_json::to_vec(&json!({ "Entities": entities })).unwrap()
}

proptest! {
    #[test]
    fn entity_equality(entity in entity(), member in 0..ENTITY_MEMBERS) {
        prop_assert_eq!(&entity.clone(), &entity);
        prop_assert_ne!(&with_member_changed(&entity, member), &entity);
    }

    #[test]
    fn entities_survive_detect_entities(entities in proptest::collection::vec(entity(), 0..4)) {
        let response = http::Response::builder()
            .status(200)
            .body(bytes::Bytes::from(detect_entities_body(&entities)))
            .unwrap();
        let output = DetectEntities::new().parse(&response).unwrap();
        prop_assert_eq!(output.entities(), Some(&entities[..]));
    }
}
