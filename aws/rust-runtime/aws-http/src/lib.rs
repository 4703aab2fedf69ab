/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS-specific HTTP behavior shared by the generated clients: user agent headers, request ids
//! and the error envelopes of the awsJson and awsQuery protocols.

pub mod json_errors;
pub mod query_errors;
pub mod request_id;
pub mod user_agent;
