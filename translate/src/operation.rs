/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// <p>Translates input text from the source language to the target language.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct TranslateText {
    _private: (),
}
impl TranslateText {
    /// Creates a new builder-style object to manufacture [`TranslateTextInput`](crate::input::TranslateTextInput)
    pub fn builder() -> crate::input::translate_text_input::Builder {
        crate::input::translate_text_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for TranslateText {
    type Output = std::result::Result<crate::output::TranslateTextOutput, crate::error::TranslateTextError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_translate_text_error(response)
        } else {
            crate::operation_deser::parse_translate_text_response(response)
        }
    }
}

/// <p>Provides a list of custom terminologies associated with your account.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTerminologies {
    _private: (),
}
impl ListTerminologies {
    /// Creates a new builder-style object to manufacture [`ListTerminologiesInput`](crate::input::ListTerminologiesInput)
    pub fn builder() -> crate::input::list_terminologies_input::Builder {
        crate::input::list_terminologies_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTerminologies {
    type Output = std::result::Result<crate::output::ListTerminologiesOutput, crate::error::ListTerminologiesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_terminologies_error(response)
        } else {
            crate::operation_deser::parse_list_terminologies_response(response)
        }
    }
}

/// <p>Retrieves a custom terminology.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetTerminology {
    _private: (),
}
impl GetTerminology {
    /// Creates a new builder-style object to manufacture [`GetTerminologyInput`](crate::input::GetTerminologyInput)
    pub fn builder() -> crate::input::get_terminology_input::Builder {
        crate::input::get_terminology_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetTerminology {
    type Output = std::result::Result<crate::output::GetTerminologyOutput, crate::error::GetTerminologyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_terminology_error(response)
        } else {
            crate::operation_deser::parse_get_terminology_response(response)
        }
    }
}

/// <p>A synchronous action that deletes a custom terminology.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteTerminology {
    _private: (),
}
impl DeleteTerminology {
    /// Creates a new builder-style object to manufacture [`DeleteTerminologyInput`](crate::input::DeleteTerminologyInput)
    pub fn builder() -> crate::input::delete_terminology_input::Builder {
        crate::input::delete_terminology_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteTerminology {
    type Output = std::result::Result<crate::output::DeleteTerminologyOutput, crate::error::DeleteTerminologyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_terminology_error(response)
        } else {
            crate::operation_deser::parse_delete_terminology_response(response)
        }
    }
}
