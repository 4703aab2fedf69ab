/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

fn assemble_request(
    config: &crate::config::Config,
    target: &'static str,
    body: smithy_http::body::SdkBody,
) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
    let content_length = body.content_length().unwrap_or_default();
    let mut request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .header(http::header::CONTENT_LENGTH, content_length)
        .body(body)?;
    aws_endpoint::set_endpoint(
        &mut request,
        config.endpoint_resolver.as_ref(),
        config.region.as_ref(),
    )?;
    aws_http::user_agent::AwsUserAgent::new_from_environment(
        aws_types::os_shim_internal::Env::real(),
        crate::API_METADATA.clone(),
    )
    .apply(&mut request)
    .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
    Ok(request)
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TranslateTextInput {
    /// <p>The text to translate.</p>
    pub text: std::option::Option<std::string::String>,
    /// <p>The name of the terminology list file to be used in the TranslateText request.</p>
    pub terminology_names: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The language code for the language of the source text.</p>
    pub source_language_code: std::option::Option<std::string::String>,
    /// <p>The language code requested for the language of the target text.</p>
    pub target_language_code: std::option::Option<std::string::String>,
    /// <p>Settings to configure your translation output, including the option to set the formality
    /// level of the output text and the option to mask profane words and phrases.</p>
    pub settings: std::option::Option<crate::model::TranslationSettings>,
}
impl TranslateTextInput {
    /// <p>The text to translate.</p>
    pub fn text(&self) -> std::option::Option<&str> {
        self.text.as_deref()
    }

    /// <p>The name of the terminology list file to be used in the TranslateText request.</p>
    pub fn terminology_names(&self) -> std::option::Option<&[std::string::String]> {
        self.terminology_names.as_deref()
    }

    /// <p>The language code for the language of the source text.</p>
    pub fn source_language_code(&self) -> std::option::Option<&str> {
        self.source_language_code.as_deref()
    }

    /// <p>The language code requested for the language of the target text.</p>
    pub fn target_language_code(&self) -> std::option::Option<&str> {
        self.target_language_code.as_deref()
    }

    /// <p>Settings to configure your translation output, including the option to set the formality
    /// level of the output text and the option to mask profane words and phrases.</p>
    pub fn settings(&self) -> std::option::Option<&crate::model::TranslationSettings> {
        self.settings.as_ref()
    }
}
impl std::fmt::Debug for TranslateTextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TranslateTextInput");
        if let Some(text) = &self.text {
            formatter.field("text", text);
        }
        if let Some(terminology_names) = &self.terminology_names {
            formatter.field("terminology_names", terminology_names);
        }
        if let Some(source_language_code) = &self.source_language_code {
            formatter.field("source_language_code", source_language_code);
        }
        if let Some(target_language_code) = &self.target_language_code {
            formatter.field("target_language_code", target_language_code);
        }
        if let Some(settings) = &self.settings {
            formatter.field("settings", settings);
        }
        formatter.finish()
    }
}
impl TranslateTextInput {
    /// Consumes the builder and constructs an Operation<[`TranslateText`](crate::operation::TranslateText)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TranslateText>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_translate_text(self)?;
        let request = assemble_request(config, "AWSShineFrontendService_20170701.TranslateText", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::TranslateText::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "TranslateText",
            "translate",
        ));
        Ok(op)
    }
}
/// See [`TranslateTextInput`](crate::input::TranslateTextInput)
pub mod translate_text_input {
    /// A builder for [`TranslateTextInput`](crate::input::TranslateTextInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        text: std::option::Option<std::string::String>,
        terminology_names: std::option::Option<std::vec::Vec<std::string::String>>,
        source_language_code: std::option::Option<std::string::String>,
        target_language_code: std::option::Option<std::string::String>,
        settings: std::option::Option<crate::model::TranslationSettings>,
    }
    impl Builder {
        /// <p>The text to translate.</p>
        pub fn text(mut self, input: impl Into<std::string::String>) -> Self {
            self.text = Some(input.into());
            self
        }
        pub fn set_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text = input;
            self
        }
        /// Appends an item to `terminology_names`.
        ///
        /// To override the contents of this collection use [`set_terminology_names`](Self::set_terminology_names).
        pub fn terminology_names(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.terminology_names.unwrap_or_default();
            v.push(input.into());
            self.terminology_names = Some(v);
            self
        }
        pub fn set_terminology_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.terminology_names = input;
            self
        }
        /// <p>The language code for the language of the source text.</p>
        pub fn source_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_language_code = Some(input.into());
            self
        }
        pub fn set_source_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_language_code = input;
            self
        }
        /// <p>The language code requested for the language of the target text.</p>
        pub fn target_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.target_language_code = Some(input.into());
            self
        }
        pub fn set_target_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.target_language_code = input;
            self
        }
        /// <p>Settings to configure your translation output, including the option to set the formality
        /// level of the output text and the option to mask profane words and phrases.</p>
        pub fn settings(mut self, input: crate::model::TranslationSettings) -> Self {
            self.settings = Some(input);
            self
        }
        pub fn set_settings(mut self, input: std::option::Option<crate::model::TranslationSettings>) -> Self {
            self.settings = input;
            self
        }
        /// Consumes the builder and constructs a [`TranslateTextInput`](crate::input::TranslateTextInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TranslateTextInput, smithy_http::operation::BuildError> {
            Ok(crate::input::TranslateTextInput {
                text: self.text,
                terminology_names: self.terminology_names,
                source_language_code: self.source_language_code,
                target_language_code: self.target_language_code,
                settings: self.settings,
            })
        }
    }
}
impl TranslateTextInput {
    /// Creates a new builder-style object to manufacture [`TranslateTextInput`](crate::input::TranslateTextInput)
    pub fn builder() -> crate::input::translate_text_input::Builder {
        crate::input::translate_text_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListTerminologiesInput {
    /// <p>If the result of the request to ListTerminologies was truncated, include the NextToken to
    /// fetch the next group of custom terminologies. </p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of custom terminologies returned per list request.</p>
    pub max_results: std::option::Option<i32>,
}
impl ListTerminologiesInput {
    /// <p>If the result of the request to ListTerminologies was truncated, include the NextToken to
    /// fetch the next group of custom terminologies. </p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of custom terminologies returned per list request.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Debug for ListTerminologiesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListTerminologiesInput");
        if let Some(next_token) = &self.next_token {
            formatter.field("next_token", next_token);
        }
        if let Some(max_results) = &self.max_results {
            formatter.field("max_results", max_results);
        }
        formatter.finish()
    }
}
impl ListTerminologiesInput {
    /// Consumes the builder and constructs an Operation<[`ListTerminologies`](crate::operation::ListTerminologies)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTerminologies>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_list_terminologies(self)?;
        let request = assemble_request(config, "AWSShineFrontendService_20170701.ListTerminologies", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::ListTerminologies::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "ListTerminologies",
            "translate",
        ));
        Ok(op)
    }
}
/// See [`ListTerminologiesInput`](crate::input::ListTerminologiesInput)
pub mod list_terminologies_input {
    /// A builder for [`ListTerminologiesInput`](crate::input::ListTerminologiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>If the result of the request to ListTerminologies was truncated, include the NextToken to
        /// fetch the next group of custom terminologies. </p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The maximum number of custom terminologies returned per list request.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTerminologiesInput`](crate::input::ListTerminologiesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTerminologiesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTerminologiesInput {
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListTerminologiesInput {
    /// Creates a new builder-style object to manufacture [`ListTerminologiesInput`](crate::input::ListTerminologiesInput)
    pub fn builder() -> crate::input::list_terminologies_input::Builder {
        crate::input::list_terminologies_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct GetTerminologyInput {
    /// <p>The name of the custom terminology being retrieved.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The data format of the custom terminology being retrieved.</p>
    pub terminology_data_format: std::option::Option<crate::model::TerminologyDataFormat>,
}
impl GetTerminologyInput {
    /// <p>The name of the custom terminology being retrieved.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The data format of the custom terminology being retrieved.</p>
    pub fn terminology_data_format(&self) -> std::option::Option<&crate::model::TerminologyDataFormat> {
        self.terminology_data_format.as_ref()
    }
}
impl std::fmt::Debug for GetTerminologyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetTerminologyInput");
        if let Some(name) = &self.name {
            formatter.field("name", name);
        }
        if let Some(terminology_data_format) = &self.terminology_data_format {
            formatter.field("terminology_data_format", terminology_data_format);
        }
        formatter.finish()
    }
}
impl GetTerminologyInput {
    /// Consumes the builder and constructs an Operation<[`GetTerminology`](crate::operation::GetTerminology)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetTerminology>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_get_terminology(self)?;
        let request = assemble_request(config, "AWSShineFrontendService_20170701.GetTerminology", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetTerminology::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "GetTerminology",
            "translate",
        ));
        Ok(op)
    }
}
/// See [`GetTerminologyInput`](crate::input::GetTerminologyInput)
pub mod get_terminology_input {
    /// A builder for [`GetTerminologyInput`](crate::input::GetTerminologyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        terminology_data_format: std::option::Option<crate::model::TerminologyDataFormat>,
    }
    impl Builder {
        /// <p>The name of the custom terminology being retrieved.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The data format of the custom terminology being retrieved.</p>
        pub fn terminology_data_format(mut self, input: crate::model::TerminologyDataFormat) -> Self {
            self.terminology_data_format = Some(input);
            self
        }
        pub fn set_terminology_data_format(mut self, input: std::option::Option<crate::model::TerminologyDataFormat>) -> Self {
            self.terminology_data_format = input;
            self
        }
        /// Consumes the builder and constructs a [`GetTerminologyInput`](crate::input::GetTerminologyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetTerminologyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetTerminologyInput {
                name: self.name,
                terminology_data_format: self.terminology_data_format,
            })
        }
    }
}
impl GetTerminologyInput {
    /// Creates a new builder-style object to manufacture [`GetTerminologyInput`](crate::input::GetTerminologyInput)
    pub fn builder() -> crate::input::get_terminology_input::Builder {
        crate::input::get_terminology_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DeleteTerminologyInput {
    /// <p>The name of the custom terminology being deleted. </p>
    pub name: std::option::Option<std::string::String>,
}
impl DeleteTerminologyInput {
    /// <p>The name of the custom terminology being deleted. </p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for DeleteTerminologyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteTerminologyInput");
        if let Some(name) = &self.name {
            formatter.field("name", name);
        }
        formatter.finish()
    }
}
impl DeleteTerminologyInput {
    /// Consumes the builder and constructs an Operation<[`DeleteTerminology`](crate::operation::DeleteTerminology)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteTerminology>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_delete_terminology(self)?;
        let request = assemble_request(config, "AWSShineFrontendService_20170701.DeleteTerminology", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteTerminology::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DeleteTerminology",
            "translate",
        ));
        Ok(op)
    }
}
/// See [`DeleteTerminologyInput`](crate::input::DeleteTerminologyInput)
pub mod delete_terminology_input {
    /// A builder for [`DeleteTerminologyInput`](crate::input::DeleteTerminologyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of the custom terminology being deleted. </p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteTerminologyInput`](crate::input::DeleteTerminologyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteTerminologyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteTerminologyInput {
                name: self.name,
            })
        }
    }
}
impl DeleteTerminologyInput {
    /// Creates a new builder-style object to manufacture [`DeleteTerminologyInput`](crate::input::DeleteTerminologyInput)
    pub fn builder() -> crate::input::delete_terminology_input::Builder {
        crate::input::delete_terminology_input::Builder::default()
    }
}
