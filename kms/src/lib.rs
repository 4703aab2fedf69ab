/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
//! <p>Key Management Service (KMS) is an encryption and key management web service. This
//! crate builds requests for the KMS key lifecycle, encryption and data key operations and
//! parses their responses.</p>

pub use config::Config;

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
mod json_deser;
mod json_ser;

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("kms", PKG_VERSION);
pub use aws_types::region::Region;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_types::Blob;
pub use smithy_types::Instant;
