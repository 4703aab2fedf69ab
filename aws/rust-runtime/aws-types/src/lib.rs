/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every AWS service client: regions, build metadata and the process
//! environment shim.

pub mod build_metadata;
// internal APIs, may be unstable
pub mod os_shim_internal;
pub mod region;
