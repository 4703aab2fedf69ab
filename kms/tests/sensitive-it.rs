/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use kms::error::{CreateKeyError, CreateKeyErrorKind, KmsInternalError, LimitExceededError};
use kms::input::EncryptInput;
use kms::model::Tag;
use kms::output::{DecryptOutput, GenerateDataKeyOutput};
use kms::Blob;
use proptest::prelude::*;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[test]
fn validate_sensitive_trait() {
    let output = GenerateDataKeyOutput::builder()
        .plaintext(Blob::new("some output"))
        .key_id("alias/my-key")
        .build();
    assert_eq!(
        format!("{:?}", output),
        "GenerateDataKeyOutput { plaintext: \"*** Sensitive Data Redacted ***\", key_id: \"alias/my-key\" }"
    );
    let output = DecryptOutput::builder().plaintext(Blob::new("secret")).build();
    assert!(!format!("{:?}", output).contains("secret"));
}

#[test]
fn debug_skips_unset_members() {
    assert_eq!(format!("{:?}", GenerateDataKeyOutput::builder().build()), "GenerateDataKeyOutput");
    let input = EncryptInput::builder()
        .key_id("k")
        .plaintext(Blob::new("attack at dawn"))
        .build()
        .unwrap();
    let debug = format!("{:?}", input);
    assert!(debug.contains("key_id: \"k\""));
    assert!(!debug.contains("attack at dawn"));
}

#[test]
fn errors_are_retryable() {
    let kind = CreateKeyErrorKind::LimitExceededError(LimitExceededError::builder().build());
    let err = CreateKeyError::new(kind, Default::default());
    assert_eq!(err.code(), Some("LimitExceededException"));
    assert_eq!(err.error_kind(), Some(ErrorKind::ThrottlingError));

    let err = CreateKeyError::new(
        CreateKeyErrorKind::KmsInternalError(KmsInternalError::builder().message("oops").build()),
        Default::default(),
    );
    assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.to_string(), "KmsInternalError [KMSInternalException]: oops");

    let err = CreateKeyError::unhandled("connection reset");
    assert_eq!(err.error_kind(), None);
    assert_eq!(err.code(), None);
}

#[test]
fn error_source_is_the_modeled_error() {
    let err = CreateKeyError::new(
        CreateKeyErrorKind::LimitExceededError(
            LimitExceededError::builder().message("too many keys").build(),
        ),
        Default::default(),
    );
    let source = std::error::Error::source(&err).expect("modeled errors have a source");
    assert_eq!(
        source.to_string(),
        "LimitExceededError [LimitExceededException]: too many keys"
    );
}

fn hash_of(tag: &Tag) -> u64 {
    let mut hasher = DefaultHasher::new();
    tag.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn equal_tags_hash_equally(key in ".*", value in proptest::option::of(".*")) {
        let a = Tag::builder().tag_key(key.clone()).set_tag_value(value.clone()).build();
        let b = Tag::builder().tag_key(key).set_tag_value(value).build();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.clone(), a);
    }

    #[test]
    fn tags_with_different_values_differ(key in ".*", a in ".*", b in ".*") {
        prop_assume!(a != b);
        let left = Tag::builder().tag_key(key.clone()).tag_value(a).build();
        let right = Tag::builder().tag_key(key).tag_value(b).build();
        prop_assert_ne!(left, right);
    }
}
