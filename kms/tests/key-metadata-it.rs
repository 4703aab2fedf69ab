/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use kms::model::{
    CustomerMasterKeySpec, EncryptionAlgorithmSpec, KeyManagerType, KeyMetadata, KeyState,
    KeyUsageType, OriginType,
};
use kms::operation::DescribeKey;
use kms::Instant;
use proptest::option;
use proptest::prelude::*;
use smithy_http::response::ParseStrictResponse;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const MEMBER_COUNT: usize = 14;

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn wire_value(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(values).prop_map(str::to_string),
        "[A-Z_]{1,12}",
    ]
}

fn timestamp() -> impl Strategy<Value = Instant> {
    (-4_000_000_000i64..4_000_000_000).prop_map(Instant::from_epoch_seconds)
}

prop_compose! {
    fn key_metadata()(
        ids in (option::of("[0-9]{12}"), option::of("[a-f0-9-]{1,36}"), option::of("arn:aws:kms:[a-z0-9-]{1,12}")),
        dates in (option::of(timestamp()), option::of(timestamp())),
        flags in (option::of(any::<bool>()), option::of(any::<bool>())),
        description in option::of("\\PC{0,24}"),
        key_usage in option::of(wire_value(&["ENCRYPT_DECRYPT", "SIGN_VERIFY"])),
        key_state in option::of(wire_value(&["Enabled", "Disabled", "PendingDeletion"])),
        origin in option::of(wire_value(&["AWS_KMS", "EXTERNAL", "AWS_CLOUDHSM"])),
        key_manager in option::of(wire_value(&["AWS", "CUSTOMER"])),
        key_spec in option::of(wire_value(&["SYMMETRIC_DEFAULT", "RSA_2048", "ECC_NIST_P256"])),
        algorithms in option::of(proptest::collection::vec(
            wire_value(&["SYMMETRIC_DEFAULT", "RSAES_OAEP_SHA_256"]),
            0..3,
        )),
    ) -> KeyMetadata {
        KeyMetadata::builder()
            .set_aws_account_id(ids.0)
            .set_key_id(ids.1)
            .set_arn(ids.2)
            .set_creation_date(dates.0)
            .set_deletion_date(dates.1)
            .set_enabled(flags.0)
            .set_multi_region(flags.1)
            .set_description(description)
            .set_key_usage(key_usage.as_deref().map(KeyUsageType::from))
            .set_key_state(key_state.as_deref().map(KeyState::from))
            .set_origin(origin.as_deref().map(OriginType::from))
            .set_key_manager(key_manager.as_deref().map(KeyManagerType::from))
            .set_customer_master_key_spec(key_spec.as_deref().map(CustomerMasterKeySpec::from))
            .set_encryption_algorithms(algorithms.map(|algorithms| {
                algorithms
                    .iter()
                    .map(|algorithm| EncryptionAlgorithmSpec::from(algorithm.as_str()))
                    .collect()
            }))
            .build()
    }
}

fn changed(value: Option<&str>) -> Option<String> {
    Some(format!("{}-changed", value.unwrap_or_default()))
}

fn later(value: Option<&Instant>) -> Option<Instant> {
    Some(Instant::from_epoch_seconds(
        value.map(|instant| instant.epoch_seconds()).unwrap_or(0) + 1,
    ))
}

/// Returns a copy of `metadata` with exactly one member replaced by a different value.
fn with_member_changed(metadata: &KeyMetadata, member: usize) -> KeyMetadata {
    let mut out = metadata.clone();
    match member {
        0 => out.aws_account_id = changed(metadata.aws_account_id()),
        1 => out.key_id = changed(metadata.key_id()),
        2 => out.arn = changed(metadata.arn()),
        3 => out.creation_date = later(metadata.creation_date()),
        4 => out.enabled = Some(!metadata.enabled().unwrap_or(false)),
        5 => out.description = changed(metadata.description()),
        6 => {
            out.key_usage = changed(metadata.key_usage().map(|v| v.as_str()))
                .map(KeyUsageType::Unknown)
        }
        7 => {
            out.key_state =
                changed(metadata.key_state().map(|v| v.as_str())).map(KeyState::Unknown)
        }
        8 => out.deletion_date = later(metadata.deletion_date()),
        9 => out.origin = changed(metadata.origin().map(|v| v.as_str())).map(OriginType::Unknown),
        10 => {
            out.key_manager = changed(metadata.key_manager().map(|v| v.as_str()))
                .map(KeyManagerType::Unknown)
        }
        11 => {
            out.customer_master_key_spec =
                changed(metadata.customer_master_key_spec().map(|v| v.as_str()))
                    .map(CustomerMasterKeySpec::Unknown)
        }
        12 => {
            let mut algorithms = metadata.encryption_algorithms().unwrap_or_default().to_vec();
            algorithms.push(EncryptionAlgorithmSpec::SymmetricDefault);
            out.encryption_algorithms = Some(algorithms);
        }
        13 => out.multi_region = Some(!metadata.multi_region().unwrap_or(false)),
        _ => unreachable!("KeyMetadata has {} members", MEMBER_COUNT),
    }
    out
}

/// Renders `metadata` the way KMS returns it in a `DescribeKey` response.
fn describe_key_body(metadata: &KeyMetadata) -> Vec<u8> {
    use serde_json::{json, Map, Value};
    let mut members = Map::new();
    let mut put = |name: &str, value: Option<Value>| {
        if let Some(value) = value {
            members.insert(name.to_string(), value);
        }
    };
    put("AWSAccountId", metadata.aws_account_id().map(|v| json!(v)));
    put("KeyId", metadata.key_id().map(|v| json!(v)));
    put("Arn", metadata.arn().map(|v| json!(v)));
    put("CreationDate", metadata.creation_date().map(|v| json!(v.epoch_seconds())));
    put("Enabled", metadata.enabled().map(|v| json!(v)));
    put("Description", metadata.description().map(|v| json!(v)));
    put("KeyUsage", metadata.key_usage().map(|v| json!(v.as_str())));
    put("KeyState", metadata.key_state().map(|v| json!(v.as_str())));
    put("DeletionDate", metadata.deletion_date().map(|v| json!(v.epoch_seconds())));
    put("Origin", metadata.origin().map(|v| json!(v.as_str())));
    put("KeyManager", metadata.key_manager().map(|v| json!(v.as_str())));
    put(
        "CustomerMasterKeySpec",
        metadata.customer_master_key_spec().map(|v| json!(v.as_str())),
    );
    put(
        "EncryptionAlgorithms",
        metadata
            .encryption_algorithms()
            .map(|v| json!(v.iter().map(|a| a.as_str()).collect::<Vec<_>>())),
    );
    put("MultiRegion", metadata.multi_region().map(|v| json!(v)));
    serde_json::to_vec(&json!({ "KeyMetadata": members })).unwrap()
}

proptest! {
    #[test]
    fn equal_key_metadata_hashes_equally(metadata in key_metadata()) {
        let copy = metadata.clone();
        prop_assert_eq!(&copy, &metadata);
        prop_assert_eq!(hash_of(&copy), hash_of(&metadata));
    }

    #[test]
    fn any_changed_member_makes_key_metadata_unequal(
        metadata in key_metadata(),
        member in 0..MEMBER_COUNT,
    ) {
        let other = with_member_changed(&metadata, member);
        prop_assert_ne!(&other, &metadata);
    }

    #[test]
    fn key_metadata_survives_describe_key(metadata in key_metadata()) {
        let response = http::Response::builder()
            .status(200)
            .body(bytes::Bytes::from(describe_key_body(&metadata)))
            .unwrap();
        let output = DescribeKey::new().parse(&response).unwrap();
        let parsed = output.key_metadata().expect("metadata is present");
        prop_assert_eq!(parsed, &metadata);
        prop_assert_eq!(hash_of(parsed), hash_of(&metadata));
    }
}
