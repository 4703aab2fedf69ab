/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
//! <fullname>Amazon Simple Notification Service</fullname>
//! <p>Amazon Simple Notification Service (Amazon SNS) is a web service that enables you to build
//! distributed web-enabled applications. Applications can use Amazon SNS to easily push
//! real-time notification messages to interested subscribers over multiple delivery
//! protocols.</p>

pub use config::Config;

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
mod query_ser;
mod xml_deser;

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("sns", PKG_VERSION);
pub use aws_types::region::Region;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_types::Blob;
pub use smithy_types::Instant;
