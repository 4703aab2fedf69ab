/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request assembly and response loading shared by the generated service clients.

pub mod body;
pub mod endpoint;
pub mod middleware;
pub mod operation;
pub mod response;
pub mod result;
