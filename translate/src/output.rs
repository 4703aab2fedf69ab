/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct TranslateTextOutput {
    /// <p>The translated text.</p>
    pub translated_text: std::option::Option<std::string::String>,
    /// <p>The language code for the language of the source text.</p>
    pub source_language_code: std::option::Option<std::string::String>,
    /// <p>The language code for the language of the target text.</p>
    pub target_language_code: std::option::Option<std::string::String>,
    /// <p>The names of the custom terminologies applied to the input text by Amazon Translate for the
    /// translated text response.</p>
    pub applied_terminologies: std::option::Option<std::vec::Vec<crate::model::AppliedTerminology>>,
    /// <p>Settings that configure the translation output.</p>
    pub applied_settings: std::option::Option<crate::model::TranslationSettings>,
}
impl TranslateTextOutput {
    /// <p>The translated text.</p>
    pub fn translated_text(&self) -> std::option::Option<&str> {
        self.translated_text.as_deref()
    }

    /// <p>The language code for the language of the source text.</p>
    pub fn source_language_code(&self) -> std::option::Option<&str> {
        self.source_language_code.as_deref()
    }

    /// <p>The language code for the language of the target text.</p>
    pub fn target_language_code(&self) -> std::option::Option<&str> {
        self.target_language_code.as_deref()
    }

    /// <p>The names of the custom terminologies applied to the input text by Amazon Translate for the
    /// translated text response.</p>
    pub fn applied_terminologies(&self) -> std::option::Option<&[crate::model::AppliedTerminology]> {
        self.applied_terminologies.as_deref()
    }

    /// <p>Settings that configure the translation output.</p>
    pub fn applied_settings(&self) -> std::option::Option<&crate::model::TranslationSettings> {
        self.applied_settings.as_ref()
    }
}
impl std::fmt::Debug for TranslateTextOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TranslateTextOutput");
        if let Some(translated_text) = &self.translated_text {
            formatter.field("translated_text", translated_text);
        }
        if let Some(source_language_code) = &self.source_language_code {
            formatter.field("source_language_code", source_language_code);
        }
        if let Some(target_language_code) = &self.target_language_code {
            formatter.field("target_language_code", target_language_code);
        }
        if let Some(applied_terminologies) = &self.applied_terminologies {
            formatter.field("applied_terminologies", applied_terminologies);
        }
        if let Some(applied_settings) = &self.applied_settings {
            formatter.field("applied_settings", applied_settings);
        }
        formatter.finish()
    }
}
/// See [`TranslateTextOutput`](crate::output::TranslateTextOutput)
pub mod translate_text_output {
    /// A builder for [`TranslateTextOutput`](crate::output::TranslateTextOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        translated_text: std::option::Option<std::string::String>,
        source_language_code: std::option::Option<std::string::String>,
        target_language_code: std::option::Option<std::string::String>,
        applied_terminologies: std::option::Option<std::vec::Vec<crate::model::AppliedTerminology>>,
        applied_settings: std::option::Option<crate::model::TranslationSettings>,
    }
    impl Builder {
        /// <p>The translated text.</p>
        pub fn translated_text(mut self, input: impl Into<std::string::String>) -> Self {
            self.translated_text = Some(input.into());
            self
        }
        pub fn set_translated_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.translated_text = input;
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
        /// <p>The language code for the language of the target text.</p>
        pub fn target_language_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.target_language_code = Some(input.into());
            self
        }
        pub fn set_target_language_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.target_language_code = input;
            self
        }
        /// Appends an item to `applied_terminologies`.
        ///
        /// To override the contents of this collection use [`set_applied_terminologies`](Self::set_applied_terminologies).
        pub fn applied_terminologies(mut self, input: impl Into<crate::model::AppliedTerminology>) -> Self {
            let mut v = self.applied_terminologies.unwrap_or_default();
            v.push(input.into());
            self.applied_terminologies = Some(v);
            self
        }
        pub fn set_applied_terminologies(mut self, input: std::option::Option<std::vec::Vec<crate::model::AppliedTerminology>>) -> Self {
            self.applied_terminologies = input;
            self
        }
        /// <p>Settings that configure the translation output.</p>
        pub fn applied_settings(mut self, input: crate::model::TranslationSettings) -> Self {
            self.applied_settings = Some(input);
            self
        }
        pub fn set_applied_settings(mut self, input: std::option::Option<crate::model::TranslationSettings>) -> Self {
            self.applied_settings = input;
            self
        }
        /// Consumes the builder and constructs a [`TranslateTextOutput`](crate::output::TranslateTextOutput)
        pub fn build(self) -> crate::output::TranslateTextOutput {
            crate::output::TranslateTextOutput {
                translated_text: self.translated_text,
                source_language_code: self.source_language_code,
                target_language_code: self.target_language_code,
                applied_terminologies: self.applied_terminologies,
                applied_settings: self.applied_settings,
            }
        }
    }
}
impl TranslateTextOutput {
    /// Creates a new builder-style object to manufacture [`TranslateTextOutput`](crate::output::TranslateTextOutput)
    pub fn builder() -> crate::output::translate_text_output::Builder {
        crate::output::translate_text_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListTerminologiesOutput {
    /// <p>The properties list of the custom terminologies returned on the list request.</p>
    pub terminology_properties_list: std::option::Option<std::vec::Vec<crate::model::TerminologyProperties>>,
    /// <p> If the response to the ListTerminologies was truncated, the NextToken fetches the next
    /// group of custom terminologies.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTerminologiesOutput {
    /// <p>The properties list of the custom terminologies returned on the list request.</p>
    pub fn terminology_properties_list(&self) -> std::option::Option<&[crate::model::TerminologyProperties]> {
        self.terminology_properties_list.as_deref()
    }

    /// <p> If the response to the ListTerminologies was truncated, the NextToken fetches the next
    /// group of custom terminologies.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for ListTerminologiesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListTerminologiesOutput");
        if let Some(terminology_properties_list) = &self.terminology_properties_list {
            formatter.field("terminology_properties_list", terminology_properties_list);
        }
        if let Some(next_token) = &self.next_token {
            formatter.field("next_token", next_token);
        }
        formatter.finish()
    }
}
/// See [`ListTerminologiesOutput`](crate::output::ListTerminologiesOutput)
pub mod list_terminologies_output {
    /// A builder for [`ListTerminologiesOutput`](crate::output::ListTerminologiesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        terminology_properties_list: std::option::Option<std::vec::Vec<crate::model::TerminologyProperties>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `terminology_properties_list`.
        ///
        /// To override the contents of this collection use [`set_terminology_properties_list`](Self::set_terminology_properties_list).
        pub fn terminology_properties_list(mut self, input: impl Into<crate::model::TerminologyProperties>) -> Self {
            let mut v = self.terminology_properties_list.unwrap_or_default();
            v.push(input.into());
            self.terminology_properties_list = Some(v);
            self
        }
        pub fn set_terminology_properties_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::TerminologyProperties>>) -> Self {
            self.terminology_properties_list = input;
            self
        }
        /// <p> If the response to the ListTerminologies was truncated, the NextToken fetches the next
        /// group of custom terminologies.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTerminologiesOutput`](crate::output::ListTerminologiesOutput)
        pub fn build(self) -> crate::output::ListTerminologiesOutput {
            crate::output::ListTerminologiesOutput {
                terminology_properties_list: self.terminology_properties_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTerminologiesOutput {
    /// Creates a new builder-style object to manufacture [`ListTerminologiesOutput`](crate::output::ListTerminologiesOutput)
    pub fn builder() -> crate::output::list_terminologies_output::Builder {
        crate::output::list_terminologies_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct GetTerminologyOutput {
    /// <p>The properties of the custom terminology being retrieved.</p>
    pub terminology_properties: std::option::Option<crate::model::TerminologyProperties>,
    /// <p>The Amazon S3 location of the most recent custom terminology input file that was
    /// successfully imported into Amazon Translate.</p>
    pub terminology_data_location: std::option::Option<crate::model::TerminologyDataLocation>,
    /// <p>The Amazon S3 location of a file that provides any errors or warnings that were produced
    /// by your input file.</p>
    pub auxiliary_data_location: std::option::Option<crate::model::TerminologyDataLocation>,
}
impl GetTerminologyOutput {
    /// <p>The properties of the custom terminology being retrieved.</p>
    pub fn terminology_properties(&self) -> std::option::Option<&crate::model::TerminologyProperties> {
        self.terminology_properties.as_ref()
    }

    /// <p>The Amazon S3 location of the most recent custom terminology input file that was
    /// successfully imported into Amazon Translate.</p>
    pub fn terminology_data_location(&self) -> std::option::Option<&crate::model::TerminologyDataLocation> {
        self.terminology_data_location.as_ref()
    }

    /// <p>The Amazon S3 location of a file that provides any errors or warnings that were produced
    /// by your input file.</p>
    pub fn auxiliary_data_location(&self) -> std::option::Option<&crate::model::TerminologyDataLocation> {
        self.auxiliary_data_location.as_ref()
    }
}
impl std::fmt::Debug for GetTerminologyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetTerminologyOutput");
        if let Some(terminology_properties) = &self.terminology_properties {
            formatter.field("terminology_properties", terminology_properties);
        }
        if let Some(terminology_data_location) = &self.terminology_data_location {
            formatter.field("terminology_data_location", terminology_data_location);
        }
        if let Some(auxiliary_data_location) = &self.auxiliary_data_location {
            formatter.field("auxiliary_data_location", auxiliary_data_location);
        }
        formatter.finish()
    }
}
/// See [`GetTerminologyOutput`](crate::output::GetTerminologyOutput)
pub mod get_terminology_output {
    /// A builder for [`GetTerminologyOutput`](crate::output::GetTerminologyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        terminology_properties: std::option::Option<crate::model::TerminologyProperties>,
        terminology_data_location: std::option::Option<crate::model::TerminologyDataLocation>,
        auxiliary_data_location: std::option::Option<crate::model::TerminologyDataLocation>,
    }
    impl Builder {
        /// <p>The properties of the custom terminology being retrieved.</p>
        pub fn terminology_properties(mut self, input: crate::model::TerminologyProperties) -> Self {
            self.terminology_properties = Some(input);
            self
        }
        pub fn set_terminology_properties(mut self, input: std::option::Option<crate::model::TerminologyProperties>) -> Self {
            self.terminology_properties = input;
            self
        }
        /// <p>The Amazon S3 location of the most recent custom terminology input file that was
        /// successfully imported into Amazon Translate.</p>
        pub fn terminology_data_location(mut self, input: crate::model::TerminologyDataLocation) -> Self {
            self.terminology_data_location = Some(input);
            self
        }
        pub fn set_terminology_data_location(mut self, input: std::option::Option<crate::model::TerminologyDataLocation>) -> Self {
            self.terminology_data_location = input;
            self
        }
        /// <p>The Amazon S3 location of a file that provides any errors or warnings that were produced
        /// by your input file.</p>
        pub fn auxiliary_data_location(mut self, input: crate::model::TerminologyDataLocation) -> Self {
            self.auxiliary_data_location = Some(input);
            self
        }
        pub fn set_auxiliary_data_location(mut self, input: std::option::Option<crate::model::TerminologyDataLocation>) -> Self {
            self.auxiliary_data_location = input;
            self
        }
        /// Consumes the builder and constructs a [`GetTerminologyOutput`](crate::output::GetTerminologyOutput)
        pub fn build(self) -> crate::output::GetTerminologyOutput {
            crate::output::GetTerminologyOutput {
                terminology_properties: self.terminology_properties,
                terminology_data_location: self.terminology_data_location,
                auxiliary_data_location: self.auxiliary_data_location,
            }
        }
    }
}
impl GetTerminologyOutput {
    /// Creates a new builder-style object to manufacture [`GetTerminologyOutput`](crate::output::GetTerminologyOutput)
    pub fn builder() -> crate::output::get_terminology_output::Builder {
        crate::output::get_terminology_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DeleteTerminologyOutput {}
impl std::fmt::Debug for DeleteTerminologyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteTerminologyOutput").finish()
    }
}
/// See [`DeleteTerminologyOutput`](crate::output::DeleteTerminologyOutput)
pub mod delete_terminology_output {
    /// A builder for [`DeleteTerminologyOutput`](crate::output::DeleteTerminologyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteTerminologyOutput`](crate::output::DeleteTerminologyOutput)
        pub fn build(self) -> crate::output::DeleteTerminologyOutput {
            crate::output::DeleteTerminologyOutput {}
        }
    }
}
impl DeleteTerminologyOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTerminologyOutput`](crate::output::DeleteTerminologyOutput)
    pub fn builder() -> crate::output::delete_terminology_output::Builder {
        crate::output::delete_terminology_output::Builder::default()
    }
}
